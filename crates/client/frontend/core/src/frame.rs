//! Frame orchestration: full renders and session resets.
use std::sync::Arc;

use game_core::{Game, GameModule};

use crate::{
    draw::{self, MapRenderReport},
    error::FrontendError,
    style,
    surface::Surface,
};

/// Everything needed to render one frame of a session.
///
/// Built once per session by [`reset`] and replaced wholesale when the map is
/// regenerated. The surface is borrowed separately by each draw call.
pub struct Context {
    pub game: Box<dyn Game>,
    pub module: Arc<dyn GameModule>,
    /// Edge length of one tile in surface pixels.
    pub tile_size: u32,
    pub font_family: Arc<str>,
}

impl Context {
    /// Rebuilds the context around the same engine with a new tile size.
    pub fn with_tile_size(self, tile_size: u32) -> Self {
        let Context {
            game,
            module,
            font_family,
            ..
        } = self;

        Self {
            game,
            module,
            tile_size,
            font_family,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("module", &self.module.name())
            .field("size", &self.game.size())
            .field("player", &self.game.player())
            .field("tile_size", &self.tile_size)
            .field("font_family", &self.font_family)
            .finish()
    }
}

/// Inputs [`reset`] uses to build a fresh [`Context`].
#[derive(Clone)]
pub struct SessionSettings {
    pub module: Arc<dyn GameModule>,
    pub width: i32,
    pub height: i32,
    pub seed_map: Option<Arc<str>>,
    pub tile_size: u32,
    pub font_family: Arc<str>,
}

/// Renders the map, then the player on top of it.
///
/// The player is always drawn fully visible regardless of the fog state of
/// the tile underneath.
pub async fn render<S>(ctx: &Context, surface: &mut S) -> Result<MapRenderReport, FrontendError>
where
    S: Surface + ?Sized,
{
    let report = draw::render_map(ctx, surface).await?;
    draw::fill_tile(
        ctx,
        surface,
        ctx.game.player(),
        &style::PLAYER_STYLE,
        true,
    );

    tracing::trace!(
        drawn = report.drawn,
        unseen = report.unseen,
        unknown = report.unknown,
        "Frame rendered"
    );

    Ok(report)
}

/// Starts a new engine session, builds its context, and renders it.
pub async fn reset<S>(settings: &SessionSettings, surface: &mut S) -> Result<Context, FrontendError>
where
    S: Surface + ?Sized,
{
    let game = settings.module.new_game(
        settings.width,
        settings.height,
        settings.seed_map.as_deref(),
    )?;

    tracing::info!(
        module = settings.module.name(),
        width = settings.width,
        height = settings.height,
        player = %game.player(),
        "New session"
    );

    let ctx = Context {
        game,
        module: Arc::clone(&settings.module),
        tile_size: settings.tile_size,
        font_family: Arc::clone(&settings.font_family),
    };

    render(&ctx, surface).await?;

    Ok(ctx)
}
