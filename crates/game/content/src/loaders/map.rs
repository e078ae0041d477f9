//! Seed map loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Loader for seed map text files.
pub struct SeedMapLoader;

impl SeedMapLoader {
    /// Load a seed map from a text file.
    ///
    /// Trailing whitespace lines are dropped; the file must contain at least
    /// one row.
    pub fn load(path: &Path) -> LoadResult<String> {
        let content = read_file(path)?;
        let seed = content.trim_end_matches(['\n', '\r']).to_string();

        if seed.trim().is_empty() {
            anyhow::bail!("Seed map {} is empty", path.display());
        }

        Ok(seed)
    }
}
