//! Pixel canvas rasterised onto terminal cells.
//!
//! The frame renderers address pixels; the terminal only has cells. Each cell
//! stands for a `cell_width_px` x `cell_height_px` block of pixels and is
//! painted when its centre pixel falls inside a drawn rectangle. Colours are
//! kept as RGBA and composited per cell, so the fog overlay darkens both the
//! background and the glyph underneath it.
use std::ops::Range;

use client_frontend_core::{Colour, Rect, Surface, TextPaint};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect as Area},
    style::Color,
    widgets::Widget,
};

use crate::config::UiConfig;

/// One terminal cell of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasCell {
    /// `None` shows the terminal's own background.
    pub bg: Option<Colour>,
    pub glyph: Option<char>,
    pub fg: Colour,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            bg: None,
            glyph: None,
            fg: Colour::WHITE,
        }
    }
}

impl CanvasCell {
    fn backdrop(&self) -> Colour {
        self.bg.unwrap_or(Colour::BLACK)
    }
}

/// [`Surface`] that rasterises onto a grid of terminal cells.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    cols: u16,
    rows: u16,
    cell_width_px: u32,
    cell_height_px: u32,
    cells: Vec<CanvasCell>,
}

impl CanvasSurface {
    pub fn new(cols: u16, rows: u16, ui: &UiConfig) -> Self {
        Self {
            cols,
            rows,
            cell_width_px: ui.cell_width_px.max(1),
            cell_height_px: ui.cell_height_px.max(1),
            cells: vec![CanvasCell::default(); usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Canvas size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            u32::from(self.cols) * self.cell_width_px,
            u32::from(self.rows) * self.cell_height_px,
        )
    }

    /// Changes the cell grid; all content is discarded.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![CanvasCell::default(); usize::from(cols) * usize::from(rows)];
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&CanvasCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(self.offset(col, row))
    }

    fn offset(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    /// Cells whose centre pixel lies inside `rect`.
    fn covered(&self, rect: Rect) -> impl Iterator<Item = (u16, u16)> + use<> {
        let cols = span(rect.x, rect.width, self.cell_width_px, self.cols);
        let rows = span(rect.y, rect.height, self.cell_height_px, self.rows);
        rows.flat_map(move |row| cols.clone().map(move |col| (col, row)))
    }

    fn for_each_covered(&mut self, rect: Rect, mut paint: impl FnMut(&mut CanvasCell)) {
        for (col, row) in self.covered(rect) {
            let offset = self.offset(col, row);
            paint(&mut self.cells[offset]);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.for_each_covered(rect, |cell| *cell = CanvasCell::default());
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.for_each_covered(rect, |cell| {
            if colour.is_opaque() {
                *cell = CanvasCell {
                    bg: Some(colour),
                    glyph: None,
                    fg: colour,
                };
            } else {
                cell.bg = Some(colour.over(cell.backdrop()));
                cell.fg = colour.over(cell.fg);
            }
        });
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, paint: &TextPaint<'_>) {
        let glyphs = text.chars().count() as i64;
        if paint.size_px == 0 || glyphs == 0 {
            return;
        }

        let cell_w = i64::from(self.cell_width_px);
        let row = i64::from(y).div_euclid(i64::from(self.cell_height_px));
        let first_col = (i64::from(x) - glyphs * cell_w / 2).div_euclid(cell_w);

        if !(0..i64::from(self.rows)).contains(&row) {
            return;
        }

        for (i, ch) in text.chars().enumerate() {
            let col = first_col + i as i64;
            if !(0..i64::from(self.cols)).contains(&col) {
                continue;
            }
            // Both bounds were checked against u16 dimensions above.
            let offset = self.offset(col as u16, row as u16);
            let cell = &mut self.cells[offset];
            cell.glyph = Some(ch);
            cell.fg = paint.colour.over(cell.backdrop());
        }
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Area, buf: &mut Buffer) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);

        for row in 0..rows {
            for col in 0..cols {
                let Some(source) = self.cell(col, row) else {
                    continue;
                };
                let Some(target) = buf.cell_mut(Position::new(area.x + col, area.y + row)) else {
                    continue;
                };

                target.set_char(source.glyph.unwrap_or(' '));
                target.set_bg(source.bg.map_or(Color::Reset, to_color));
                target.set_fg(to_color(source.fg));
            }
        }
    }
}

/// Terminal colour for an already-composited canvas colour.
pub fn to_color(colour: Colour) -> Color {
    Color::Rgb(colour.r, colour.g, colour.b)
}

/// Indices of cells (edge `cell` px, `limit` cells) whose centre lies in
/// `[start, start + len)`.
fn span(start: i32, len: u32, cell: u32, limit: u16) -> Range<u16> {
    let cell = i64::from(cell);
    let half = cell / 2;
    let start = i64::from(start);
    let end = start + i64::from(len);

    let first = ceil_div(start - half, cell).clamp(0, i64::from(limit));
    let last = ceil_div(end - half, cell).clamp(0, i64::from(limit));

    // Clamped into `0..=limit` just above.
    first as u16..last.max(first) as u16
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}
