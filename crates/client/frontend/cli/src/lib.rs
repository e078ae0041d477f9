//! Terminal UI frontend for the dungeon view.
//!
//! This crate paints frames from `client-frontend-core` onto a pixel canvas
//! backed by terminal cells and feeds crossterm key presses back into the
//! session as key codes.
//!
//! # Architecture
//!
//! ```text
//! crossterm KeyEvent ─→ input::key_code ─→ Session::handle_key
//!                                            └─→ CanvasSurface ─→ ratatui Buffer
//! ```

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliFrontend, StartupError};
pub use config::{CliConfig, UiConfig};
pub use presentation::canvas::CanvasSurface;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
