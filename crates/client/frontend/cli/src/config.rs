//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Log directory name for this run; a timestamp is used when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CELL_WIDTH_PX` - Canvas pixels per terminal column (default: 8)
    /// - `CLI_CELL_HEIGHT_PX` - Canvas pixels per terminal row (default: 16)
    /// - `CLI_SHOW_FOOTER` - Show the key help line (default: true)
    /// - `DUNGEON_SESSION_ID` - Session name used for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("CLI_CELL_WIDTH_PX") {
            config.ui.cell_width_px = width.max(1);
        }
        if let Some(height) = read_env::<u32>("CLI_CELL_HEIGHT_PX") {
            config.ui.cell_height_px = height.max(1);
        }
        if let Some(show) = read_env::<bool>("CLI_SHOW_FOOTER") {
            config.ui.show_footer = show;
        }

        config.session_id = env::var("DUNGEON_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// Canvas geometry and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub cell_width_px: u32,
    pub cell_height_px: u32,
    /// Reserve the bottom line for key help.
    pub show_footer: bool,
}

impl UiConfig {
    /// Smallest tile edge that covers whole terminal cells in both axes.
    pub fn tile_step(&self) -> u32 {
        let (w, h) = (self.cell_width_px.max(1), self.cell_height_px.max(1));
        w / gcd(w, h) * h
    }

    /// Rows taken by widgets below the map.
    pub fn footer_rows(&self) -> u16 {
        u16::from(self.show_footer)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 8,
            cell_height_px: 16,
            show_footer: true,
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
