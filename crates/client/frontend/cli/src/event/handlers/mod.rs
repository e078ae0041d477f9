//! Event handler implementations for EventLoop.
//!
//! - `input`: Keyboard input and terminal resizes
//! - `rendering`: Terminal drawing

mod input;
mod rendering;
