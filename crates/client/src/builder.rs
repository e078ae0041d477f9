//! Client builder with dependency injection pattern.

use std::sync::Arc;

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use game_core::GameModule;

/// Builder for constructing a Client with proper validation.
///
/// Both the game module and the frontend are required; `build()` fails fast
/// when either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    module: Option<Arc<dyn GameModule>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game module (required).
    ///
    /// The frontend calls it for every new session, including resets.
    pub fn module(mut self, module: impl GameModule + 'static) -> Self {
        self.module = Some(Arc::new(module));
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the module or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let module = self
            .module
            .context("Game module is required. Use .module() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { module, frontend })
    }
}
