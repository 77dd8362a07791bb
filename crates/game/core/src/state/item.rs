//! Per-character items with finite durability.

use crate::env::ItemTemplate;

/// An item owned by a character.
///
/// Instances are created from a catalog [`ItemTemplate`] on collection, so wear
/// on one character's item never leaks into the catalog or another session.
///
/// # Invariants
///
/// - `is_broken()` is true iff `durability == 0`
/// - a broken item never becomes usable again
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    power: u32,
    durability: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, power: u32, durability: u32) -> Self {
        Self {
            name: name.into(),
            power,
            durability,
        }
    }

    /// Fresh instance of a catalog entry.
    pub fn from_template(template: &ItemTemplate) -> Self {
        Self::new(template.name.clone(), template.power, template.durability)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Remaining uses.
    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }

    /// Consumes one use.
    ///
    /// Returns `false` without touching the item when it is already broken.
    pub fn use_item(&mut self) -> bool {
        if self.is_broken() {
            return false;
        }
        self.durability -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_consumes_durability_until_broken() {
        let mut scroll = Item::new("Magic Scroll", 15, 3);

        assert!(scroll.use_item());
        assert!(scroll.use_item());
        assert!(!scroll.is_broken());
        assert!(scroll.use_item());
        assert!(scroll.is_broken());
        assert_eq!(scroll.durability(), 0);
    }

    #[test]
    fn broken_item_use_is_a_stable_no_op() {
        let mut potion = Item::new("Health Potion", 20, 1);
        assert!(potion.use_item());

        for _ in 0..3 {
            assert!(!potion.use_item());
            assert_eq!(potion.durability(), 0);
            assert!(potion.is_broken());
        }
    }

    #[test]
    fn zero_durability_item_starts_broken() {
        let mut husk = Item::new("Husk", 1, 0);
        assert!(husk.is_broken());
        assert!(!husk.use_item());
    }

    #[test]
    fn template_instances_do_not_share_wear() {
        let template = ItemTemplate::new("Sword", 10, 5);
        let mut first = Item::from_template(&template);
        let second = Item::from_template(&template);

        first.use_item();
        assert_eq!(first.durability(), 4);
        assert_eq!(second.durability(), 5);
        assert_eq!(template.durability, 5);
    }
}
