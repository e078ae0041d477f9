//! Frame composition: map canvas on top, optional footer below.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    config::UiConfig,
    presentation::{
        canvas::CanvasSurface,
        terminal::Tui,
        widgets::footer::{self, FooterStatus},
    },
};

/// Rendering context containing everything one terminal draw needs.
pub struct RenderContext<'a> {
    pub canvas: &'a CanvasSurface,
    pub footer: Option<FooterStatus>,
    pub ui: &'a UiConfig,
}

/// Splits the terminal into the map area and the footer line, if shown.
pub fn layout(area: Rect, ui: &UiConfig) -> (Rect, Option<Rect>) {
    let footer_rows = ui.footer_rows().min(area.height);
    if footer_rows == 0 {
        return (area, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_rows)])
        .split(area);

    (chunks[0], Some(chunks[1]))
}

/// Draw the canvas and footer to the terminal.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let (map_area, footer_area) = layout(frame.area(), ctx.ui);

    frame.render_widget(ctx.canvas, map_area);

    if let (Some(area), Some(status)) = (footer_area, ctx.footer.as_ref()) {
        footer::render(frame, area, status);
    }
}
