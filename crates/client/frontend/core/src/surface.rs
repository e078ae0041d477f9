//! Drawing surface abstraction.
//!
//! Every call carries its own paint (colour, font), so a surface holds no
//! paint state between calls and draw order is the only thing that matters.
use crate::style::Colour;

/// Pixel rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: i32, y: i32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn centre(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }
}

/// Paint for a single text draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPaint<'a> {
    pub colour: Colour,
    /// Font size in pixels; zero draws nothing.
    pub size_px: u32,
    pub family: &'a str,
}

/// A 2D raster the renderers paint on.
pub trait Surface {
    /// Resets `rect` to the surface background.
    fn clear_rect(&mut self, rect: Rect);

    /// Fills `rect` with `colour`, compositing when it is translucent.
    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    /// Paints `text` centred horizontally and vertically on `(x, y)`.
    fn fill_text(&mut self, text: &str, x: i32, y: i32, paint: &TextPaint<'_>);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    FillRect {
        rect: Rect,
        colour: Colour,
    },
    FillText {
        text: String,
        x: i32,
        y: i32,
        colour: Colour,
        size_px: u32,
        family: String,
    },
}

/// Surface that records calls instead of painting.
///
/// Useful for headless rendering and for asserting on draw order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Returns and forgets everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Recorded rectangle fills in call order.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Colour)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, colour } => Some((*rect, *colour)),
            _ => None,
        })
    }

    /// Recorded operations touching the tile whose top-left corner is `origin`.
    pub fn ops_at(&self, origin: (i32, i32)) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| match op {
                DrawOp::FillRect { rect, .. } => (rect.x, rect.y) == origin,
                _ => false,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.ops.push(DrawOp::FillRect { rect, colour });
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, paint: &TextPaint<'_>) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            colour: paint.colour,
            size_px: paint.size_px,
            family: paint.family.to_string(),
        });
    }
}
