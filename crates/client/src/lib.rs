//! Top-level client wiring a game module to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameModule (engine factory, e.g. SeedMapModule)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend builds, renders, and resets engine sessions itself; the
//! client only decides which module and which frontend run together.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use game_core::GameModule;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the module and the frontend
/// 2. `Client::run()` hands the module to the frontend (blocking)
/// 3. The frontend returns when the user quits
pub struct Client {
    module: Arc<dyn GameModule>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            module,
            mut frontend,
        } = self;

        tracing::info!(module = module.name(), "Client starting");
        let result = frontend.run(module).await;
        tracing::info!("Client shutdown complete");

        result
    }
}
