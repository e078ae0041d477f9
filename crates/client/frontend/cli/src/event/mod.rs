//! Event handling for CLI client.
//!
//! The loop polls crossterm for key presses and resizes, hands key codes to
//! the session, and redraws the terminal from the canvas.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
