//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui, widgets::footer::FooterStatus};

impl EventLoop {
    /// Copy the canvas and footer to the terminal.
    pub(in crate::event) fn draw(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = self.session.context();
        let footer = self.cli_config.ui.show_footer.then(|| FooterStatus {
            player: ctx.game.player(),
            tile_size: ctx.tile_size,
        });

        let render_ctx = ui::RenderContext {
            canvas: &self.canvas,
            footer,
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, &render_ctx)
    }
}
