//! Framework-independent presentation layer for the dungeon view.
//!
//! Renders engine map snapshots onto any [`surface::Surface`] and turns key
//! codes into engine commands. Terminal, GUI, or test frontends only supply a
//! surface and a source of key codes.
//!
//! ```text
//! key code ─→ keymap ─→ Game::move_player ─→ frame::render
//!                                              ├─→ draw::render_map (per-cell style)
//!                                              └─→ player tile
//! ```
pub mod config;
pub mod coords;
pub mod draw;
pub mod error;
pub mod frame;
pub mod frontend;
pub mod keymap;
pub mod session;
pub mod style;
pub mod surface;

pub use config::FrontendConfig;
pub use draw::MapRenderReport;
pub use error::FrontendError;
pub use frame::{Context, SessionSettings};
pub use frontend::Frontend;
pub use keymap::Binding;
pub use session::{KeyOutcome, Session};
pub use style::{Colour, StyleKey, StyleOptions};
pub use surface::{Rect, Surface, TextPaint};
