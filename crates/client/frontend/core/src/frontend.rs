//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use game_core::GameModule;

/// Frontend abstraction for UI layers.
///
/// Frontends receive the loaded game module and own everything else: the
/// drawing surface, the input source, and the session built on top of them.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits. Fatal startup problems are reported to
    /// the user by the frontend itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error after
    /// startup.
    async fn run(&mut self, module: Arc<dyn GameModule>) -> Result<()>;
}
