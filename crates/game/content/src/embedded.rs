//! Stock content compiled into the binary.

use sentinel_core::{ItemCatalog, SessionConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

const ITEMS_RON: &str = include_str!("../data/items.ron");
const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// The stock item catalog.
pub fn items() -> LoadResult<ItemCatalog> {
    ItemLoader::parse(ITEMS_RON)
}

/// The stock session rules.
pub fn config() -> LoadResult<SessionConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_matches_builtin_defaults() {
        assert_eq!(items().expect("valid RON"), ItemCatalog::standard());
        assert_eq!(config().expect("valid TOML"), SessionConfig::default());
    }
}
