//! Dungeon view client binary.
//!
//! This binary is the composition root: it reads configuration, installs
//! logging, loads the seed map, and runs the chosen frontend over the
//! reference seed-map engine.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! cargo run -p dungeon-client
//! DUNGEON_SEED_MAP=maps/cave.txt DUNGEON_SIGHT_RADIUS=-1 cargo run -p dungeon-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dungeon_client::Client;
    use game_content::SeedMapModule;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!(
        width = frontend_config.map.width,
        height = frontend_config.map.height,
        sight_radius = ?frontend_config.engine.sight_radius(),
        "Map configuration"
    );

    // 3. Load the seed map and the engine module
    let seed_map = load_seed_map(&frontend_config)?;
    let module = SeedMapModule::new(frontend_config.engine.sight_radius());

    // 4. Build Frontend
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config).with_seed_map(seed_map);

    // 5. Build and run
    let client = Client::builder().module(module).frontend(frontend).build()?;
    client.run().await
}

/// Seed map from `DUNGEON_SEED_MAP`, or the built-in caverns.
///
/// A seed whose shape differs from the configured map size still loads
/// (short seeds are padded with walls) but is logged.
#[cfg(feature = "frontend-cli")]
fn load_seed_map(config: &client_frontend_core::FrontendConfig) -> Result<String> {
    use anyhow::Context;
    use game_content::{DEFAULT_SEED_MAP, SeedMapLoader, seed_dimensions};
    use game_core::Vector;

    let seed_map = match &config.map.seed_map_path {
        Some(path) => {
            tracing::info!("Loading seed map from {}", path.display());
            SeedMapLoader::load(path)
                .with_context(|| format!("Failed to load seed map {}", path.display()))?
        }
        None => DEFAULT_SEED_MAP.to_string(),
    };

    let seed_size = seed_dimensions(&seed_map);
    let map_size = Vector::new(config.map.width, config.map.height);
    if seed_size != map_size {
        tracing::warn!(%seed_size, %map_size, "Seed map shape differs from map size");
    }

    Ok(seed_map)
}
