//! Collectible item catalog.

use std::sync::Arc;

use crate::config::ConfigError;

/// Template for a collectible item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub name: String,
    pub power: u32,
    /// Uses a fresh instance starts with.
    pub durability: u32,
}

impl ItemTemplate {
    pub fn new(name: impl Into<String>, power: u32, durability: u32) -> Self {
        Self {
            name: name.into(),
            power,
            durability,
        }
    }
}

/// Immutable set of item templates injected into a [`Game`](crate::Game).
///
/// Clones share the same backing slice; the catalog is never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemCatalog {
    templates: Arc<[ItemTemplate]>,
}

impl ItemCatalog {
    /// Builds a catalog after checking every entry has power and durability.
    pub fn new(templates: Vec<ItemTemplate>) -> Result<Self, ConfigError> {
        for template in &templates {
            if template.power == 0 {
                return Err(ConfigError::ZeroPower {
                    name: template.name.clone(),
                });
            }
            if template.durability == 0 {
                return Err(ConfigError::ZeroDurability {
                    name: template.name.clone(),
                });
            }
        }
        Ok(Self {
            templates: templates.into(),
        })
    }

    /// A catalog with nothing to collect.
    pub fn empty() -> Self {
        Self {
            templates: Arc::from(Vec::new()),
        }
    }

    /// The five stock items.
    pub fn standard() -> Self {
        Self {
            templates: Arc::from(vec![
                ItemTemplate::new("Sword", 10, 5),
                ItemTemplate::new("Staff", 8, 8),
                ItemTemplate::new("Dagger", 6, 10),
                ItemTemplate::new("Health Potion", 20, 1),
                ItemTemplate::new("Magic Scroll", 15, 3),
            ]),
        }
    }

    pub fn templates(&self) -> &[ItemTemplate] {
        &self.templates
    }

    pub fn get(&self, index: usize) -> Option<&ItemTemplate> {
        self.templates.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|template| template.name == name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_five_items() {
        let catalog = ItemCatalog::standard();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.find("Health Potion"), Some(&ItemTemplate::new("Health Potion", 20, 1)));
        assert_eq!(catalog.get(0).map(|t| t.power), Some(10));
    }

    #[test]
    fn new_rejects_unusable_entries() {
        let err = ItemCatalog::new(vec![ItemTemplate::new("Dust", 3, 0)]).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDurability { name: "Dust".into() });

        let err = ItemCatalog::new(vec![ItemTemplate::new("Feather", 0, 2)]).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPower { name: "Feather".into() });
    }

    #[test]
    fn clones_share_templates() {
        let catalog = ItemCatalog::standard();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.templates(), copy.templates()));
    }
}
