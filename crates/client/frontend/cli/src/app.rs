//! Glue code tying the game module, session, and terminal UI together.
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ratatui::layout::Rect;
use thiserror::Error;

use client_frontend_core::{Frontend, FrontendConfig, Session, SessionSettings, coords};
use game_core::GameModule;

use crate::{
    config::{CliConfig, UiConfig},
    event::EventLoop,
    presentation::{
        canvas::CanvasSurface,
        terminal::{self, TerminalGuard},
        ui,
    },
};

/// Conditions that stop the frontend before any key is handled.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("terminal unavailable: {0}")]
    Terminal(String),

    #[error(
        "terminal too small: {cols}x{rows} cells cannot show a {width}x{height} map \
         at {min_tile_size}px per tile"
    )]
    SurfaceTooSmall {
        cols: u16,
        rows: u16,
        width: i32,
        height: i32,
        min_tile_size: u32,
    },

    #[error(
        "DUNGEON_MAX_TILE_SIZE={max_tile_size} is below one whole tile of terminal cells \
         ({min_tile_size}px)"
    )]
    TileCapTooSmall {
        max_tile_size: u32,
        min_tile_size: u32,
    },
}

/// Terminal frontend.
pub struct CliFrontend {
    config: FrontendConfig,
    cli_config: CliConfig,
    seed_map: Option<Arc<str>>,
}

impl CliFrontend {
    pub fn new(config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            config,
            cli_config,
            seed_map: None,
        }
    }

    /// Seed map text handed to every new game.
    pub fn with_seed_map(mut self, seed_map: impl Into<Arc<str>>) -> Self {
        self.seed_map = Some(seed_map.into());
        self
    }

    fn settings(&self, module: Arc<dyn GameModule>, tile_size: u32) -> SessionSettings {
        SessionSettings {
            module,
            width: self.config.map.width,
            height: self.config.map.height,
            seed_map: self.seed_map.clone(),
            tile_size,
            font_family: Arc::from(self.config.render.font_family.as_str()),
        }
    }

    pub async fn execute(&self, module: Arc<dyn GameModule>) -> Result<()> {
        tracing::info!(module = module.name(), "CLI frontend starting...");

        let mut terminal = match terminal::init() {
            Ok(terminal) => terminal,
            Err(err) => {
                alert(&StartupError::Terminal(err.to_string()));
                return Ok(());
            }
        };
        let guard = TerminalGuard;

        let size = terminal.size().context("Failed to query terminal size")?;
        let (map_area, _) = ui::layout(
            Rect::new(0, 0, size.width, size.height),
            &self.cli_config.ui,
        );

        let tile_size = match tile_size_for(map_area, &self.config, &self.cli_config.ui) {
            Ok(tile_size) => tile_size,
            Err(err) => {
                drop(guard);
                alert(&err);
                return Ok(());
            }
        };

        let mut canvas = CanvasSurface::new(map_area.width, map_area.height, &self.cli_config.ui);
        let session = Session::start(self.settings(module, tile_size), &mut canvas)
            .await
            .context("Failed to start session")?;

        EventLoop::new(session, canvas, self.config.clone(), self.cli_config.clone())
            .run(&mut terminal)
            .await?;

        drop(guard);
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, module: Arc<dyn GameModule>) -> Result<()> {
        self.execute(module).await
    }
}

/// Largest tile size that fits the whole map into `area`, in whole cells.
pub(crate) fn tile_size_for(
    area: Rect,
    config: &FrontendConfig,
    ui: &UiConfig,
) -> Result<u32, StartupError> {
    let step = ui.tile_step();
    if config.render.max_tile_size < step {
        return Err(StartupError::TileCapTooSmall {
            max_tile_size: config.render.max_tile_size,
            min_tile_size: step,
        });
    }

    let fitted = coords::fit_tile_size(
        u32::from(area.width) * ui.cell_width_px,
        u32::from(area.height) * ui.cell_height_px,
        config.map.width.max(0) as u32,
        config.map.height.max(0) as u32,
        config.render.max_tile_size,
    );
    let tile_size = fitted - fitted % step;

    if tile_size == 0 {
        return Err(StartupError::SurfaceTooSmall {
            cols: area.width,
            rows: area.height,
            width: config.map.width,
            height: config.map.height,
            min_tile_size: step,
        });
    }

    Ok(tile_size)
}

/// Reports a fatal startup condition once the terminal is back to normal.
fn alert(err: &StartupError) {
    tracing::error!(%err, "Fatal startup error");
    eprintln!("dungeon: {err}");
}
