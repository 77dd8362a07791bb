//! Content factory for building games from data files.

use std::path::{Path, PathBuf};

use sentinel_core::{Game, ItemCatalog, SessionConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all session content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load session rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SessionConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Build a game from both files.
    pub fn build_game(&self) -> LoadResult<Game> {
        let config = self.load_config()?;
        let catalog = self.load_items()?;
        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = catalog.len(),
            max_level = config.max_level,
            "content loaded"
        );
        Ok(Game::with_config(config, catalog)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
