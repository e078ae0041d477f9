//! Key dispatch over a running session.
use game_core::Direction;

use crate::{
    error::FrontendError,
    frame::{self, Context, SessionSettings},
    keymap::{self, Binding},
    surface::Surface,
};

/// Result of handling one key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The engine was asked to move and the frame was redrawn.
    Moved(Direction),
    /// A new session replaced the old one and was rendered.
    Reset,
    /// The user asked to leave.
    Quit,
    /// The key has no binding.
    Ignored,
}

/// Current session state: the settings it was built from and its context.
pub struct Session {
    settings: SessionSettings,
    context: Context,
}

impl Session {
    /// Builds the first context and renders it.
    pub async fn start<S>(settings: SessionSettings, surface: &mut S) -> Result<Self, FrontendError>
    where
        S: Surface + ?Sized,
    {
        let context = frame::reset(&settings, surface).await?;
        Ok(Self { settings, context })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Redraws the current frame.
    pub async fn render<S>(&self, surface: &mut S) -> Result<(), FrontendError>
    where
        S: Surface + ?Sized,
    {
        frame::render(&self.context, surface).await.map(|_| ())
    }

    /// Replaces the context with a brand-new session.
    pub async fn reset<S>(&mut self, surface: &mut S) -> Result<(), FrontendError>
    where
        S: Surface + ?Sized,
    {
        self.context = frame::reset(&self.settings, surface).await?;
        Ok(())
    }

    /// Same session with a new tile size (e.g. after a resize).
    ///
    /// The context is rebuilt around the running engine; later resets use
    /// the new size too. Takes effect on the next render.
    pub fn with_tile_size(self, tile_size: u32) -> Self {
        let Session {
            mut settings,
            context,
        } = self;
        settings.tile_size = tile_size;

        Self {
            settings,
            context: context.with_tile_size(tile_size),
        }
    }

    /// Dispatches one key-down event.
    pub async fn handle_key<S>(
        &mut self,
        code: u32,
        surface: &mut S,
    ) -> Result<KeyOutcome, FrontendError>
    where
        S: Surface + ?Sized,
    {
        let Some(binding) = keymap::binding_for(code) else {
            tracing::trace!(code, "Unbound key");
            return Ok(KeyOutcome::Ignored);
        };

        match binding {
            Binding::Move(direction) => {
                tracing::debug!(%direction, "Move player");
                self.context.game.move_player(direction);
                self.render(surface).await?;
                Ok(KeyOutcome::Moved(direction))
            }
            Binding::Reset => {
                tracing::info!("Resetting map");
                self.reset(surface).await?;
                Ok(KeyOutcome::Reset)
            }
            Binding::Quit => Ok(KeyOutcome::Quit),
        }
    }
}
