//! Session configuration loader.

use std::path::Path;

use sentinel_core::SessionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for session rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate session rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SessionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse session rules from TOML text. Missing keys take their defaults.
    pub fn parse(content: &str) -> LoadResult<SessionConfig> {
        let config: SessionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid session config: {}", e))?;

        Ok(config)
    }
}
