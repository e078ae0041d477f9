//! Event loop orchestrating user input and rendering.
use anyhow::Result;
use client_frontend_core::{FrontendConfig, Session};
use tokio::time::{self, Duration};

use crate::{
    config::CliConfig,
    presentation::{canvas::CanvasSurface, terminal::Tui},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Owns the session and the canvas it paints on.
///
/// Each key press is handled to completion (engine move, canvas render,
/// terminal draw) before the next event is read.
pub struct EventLoop {
    pub(crate) session: Session,
    pub(crate) canvas: CanvasSurface,
    pub(crate) config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        session: Session,
        canvas: CanvasSurface,
        config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            session,
            canvas,
            config,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        // The session rendered its first frame into the canvas on start.
        self.draw(terminal)?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            let tick = tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Interrupted");
                    Tick::Quit
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    self.handle_input_tick(terminal).await?
                }
            };

            match tick {
                Tick::Continue => {}
                Tick::Quit => break,
                Tick::Resized { cols, rows } => {
                    self = self.handle_resize(cols, rows).await?;
                    self.draw(terminal)?;
                }
            }
        }

        Ok(())
    }
}

/// What the loop does after one input tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tick {
    Continue,
    Quit,
    /// The terminal changed size; the session is rebuilt for it.
    Resized { cols: u16, rows: u16 },
}
