//! Presentation layer: terminal lifecycle, pixel canvas, and widgets.
pub mod canvas;
pub mod terminal;
pub mod ui;
pub mod widgets;
