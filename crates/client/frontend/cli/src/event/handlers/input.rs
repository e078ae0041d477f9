//! Input handling (keyboard and resize).

use anyhow::Result;
use client_frontend_core::KeyOutcome;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tokio::time::Duration;

use super::super::{EventLoop, r#loop::Tick};
use crate::{
    app, input,
    presentation::{terminal::Tui, ui},
};

impl EventLoop {
    /// Poll for one terminal event and handle it.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<Tick> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(Tick::Continue);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(cols, rows) => Ok(Tick::Resized { cols, rows }),
            _ => Ok(Tick::Continue),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<Tick> {
        let Some(code) = input::key_code(key) else {
            return Ok(Tick::Continue);
        };

        match self.session.handle_key(code, &mut self.canvas).await? {
            KeyOutcome::Quit => {
                tracing::info!(code, "Quit requested");
                Ok(Tick::Quit)
            }
            KeyOutcome::Moved(_) | KeyOutcome::Reset => {
                self.draw(terminal)?;
                Ok(Tick::Continue)
            }
            KeyOutcome::Ignored => Ok(Tick::Continue),
        }
    }

    /// Resizes the canvas, refits the tile size, and repaints the session.
    ///
    /// When the new terminal is too small the previous tile size is kept and
    /// the map is clipped.
    pub(in crate::event) async fn handle_resize(mut self, cols: u16, rows: u16) -> Result<Self> {
        let (map_area, _) = ui::layout(Rect::new(0, 0, cols, rows), &self.cli_config.ui);
        self.canvas.resize(map_area.width, map_area.height);

        match app::tile_size_for(map_area, &self.config, &self.cli_config.ui) {
            Ok(tile_size) => {
                tracing::debug!(cols, rows, tile_size, "Terminal resized");
                self.session = self.session.with_tile_size(tile_size);
            }
            Err(err) => tracing::warn!(%err, "Keeping previous tile size"),
        }

        self.session.render(&mut self.canvas).await?;
        Ok(self)
    }
}
