//! Tile and map rendering.
use game_core::{Tile, Vector};

use crate::{
    coords,
    error::FrontendError,
    frame::Context,
    style::{self, StyleKey, StyleOptions},
    surface::{Rect, Surface, TextPaint},
};

/// Per-pass counts of what the map renderer did with each cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapRenderReport {
    /// Cells handed to the tile renderer.
    pub drawn: usize,
    /// Cells never seen, left cleared.
    pub unseen: usize,
    /// Cells skipped because their tile type has no style.
    pub unknown: usize,
}

impl MapRenderReport {
    /// Total number of cells visited.
    pub fn cells(&self) -> usize {
        self.drawn + self.unseen + self.unknown
    }
}

/// Paints one tile: background square, centred glyph, and the fog overlay
/// when the tile is remembered but not currently visible.
pub fn fill_tile<S>(
    ctx: &Context,
    surface: &mut S,
    pos: Vector,
    style: &StyleOptions,
    visible: bool,
) where
    S: Surface + ?Sized,
{
    let tile_size = ctx.tile_size;
    let cell = Rect::square(
        coords::pixel_x(tile_size, pos.x),
        coords::pixel_y(tile_size, pos.y),
        tile_size,
    );

    surface.fill_rect(cell, style.bg_colour);

    let (centre_x, centre_y) = cell.centre();
    let paint = TextPaint {
        colour: style.text_colour,
        size_px: style.font_size(tile_size),
        family: &*ctx.font_family,
    };
    surface.fill_text(style.text, centre_x, centre_y, &paint);

    if !visible {
        surface.fill_rect(cell, style::colours::FOG);
    }
}

/// Renders every seen tile of a fresh map snapshot.
///
/// The region covering the whole grid is cleared first, so unseen cells stay
/// background. Tiles with an unrecognised type are skipped with a warning.
pub async fn render_map<S>(ctx: &Context, surface: &mut S) -> Result<MapRenderReport, FrontendError>
where
    S: Surface + ?Sized,
{
    let size = ctx.game.size();
    let map = ctx.game.get_map().await?;

    if map.size() != size {
        return Err(FrontendError::SnapshotMismatch {
            expected: size,
            actual: map.size(),
        });
    }

    let tile_size = ctx.tile_size;
    surface.clear_rect(Rect::new(
        0,
        0,
        size.x as u32 * tile_size,
        size.y as u32 * tile_size,
    ));

    let mut report = MapRenderReport::default();

    for row in 0..size.y {
        for col in 0..size.x {
            let tile: &Tile = &map[coords::index(size.x, row, col)];

            if !tile.seen {
                report.unseen += 1;
                continue;
            }

            let Some(style) = style::resolve(StyleKey::Tile(tile.tile_type)) else {
                tracing::warn!(
                    tag = tile.tile_type.tag(),
                    col,
                    row,
                    "Unknown tile type, skipping cell"
                );
                report.unknown += 1;
                continue;
            };

            fill_tile(ctx, surface, Vector::new(col, row), &style, tile.visible);
            report.drawn += 1;
        }
    }

    Ok(report)
}
