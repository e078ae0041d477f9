//! Widgets drawn around the map canvas.
pub mod footer;
