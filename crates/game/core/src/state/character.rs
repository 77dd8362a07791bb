//! The player character and its progression rules.

use super::class::{CharacterClass, PrimaryStat, StatLine};
use super::item::Item;
use super::snapshot::CharacterSnapshot;

/// A class-typed combatant owned by exactly one session.
///
/// # Invariants
///
/// - `health <= max_health`
/// - `level` starts at 1 and never decreases
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Character {
    class: CharacterClass,
    level: u32,
    health: u32,
    max_health: u32,
    health_per_level: u32,
    /// Reserved counter; no rule awards experience yet.
    experience: u64,
    stats: StatLine,
    /// Insertion order is collection order.
    inventory: Vec<Item>,
}

impl Character {
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_HEALTH_PER_LEVEL: u32 = 20;

    /// Creates a level 1 character with the class base stats and full health.
    pub fn new(class: CharacterClass) -> Self {
        Self::with_health(
            class,
            Self::DEFAULT_MAX_HEALTH,
            Self::DEFAULT_HEALTH_PER_LEVEL,
        )
    }

    pub fn with_health(class: CharacterClass, max_health: u32, health_per_level: u32) -> Self {
        Self {
            class,
            level: 1,
            health: max_health,
            max_health,
            health_per_level,
            experience: 0,
            stats: class.profile().base,
            inventory: Vec::new(),
        }
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn stats(&self) -> StatLine {
        self.stats
    }

    pub fn strength(&self) -> u32 {
        self.stats.strength
    }

    pub fn magic(&self) -> u32 {
        self.stats.magic
    }

    pub fn agility(&self) -> u32 {
        self.stats.agility
    }

    /// Value of the class attack stat.
    pub fn primary_stat(&self) -> u32 {
        self.stats.get(self.class.primary_stat())
    }

    pub fn stat(&self, stat: PrimaryStat) -> u32 {
        self.stats.get(stat)
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Raises the level by one: +`health_per_level` max health, a full heal and
    /// the class growth deltas.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.max_health = self.max_health.saturating_add(self.health_per_level);
        self.health = self.max_health;
        self.stats = self.stats.saturating_add(self.class.profile().per_level);
    }

    /// Restores up to `amount` health, capped at max health. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    /// Applies damage, flooring health at zero. Returns the amount removed.
    #[cfg(test)]
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    pub(crate) fn push_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Removes the most recently collected item.
    pub(crate) fn pop_item(&mut self) -> Option<Item> {
        self.inventory.pop()
    }

    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            class: self.class,
            level: self.level,
            health: self.health,
            max_health: self.max_health,
            strength: self.stats.strength,
            magic: self.stats.magic,
            agility: self.stats.agility,
            experience: self.experience,
            inventory: self.inventory.iter().map(|item| item.name().to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn new_warrior_has_base_stats_and_full_health() {
        let warrior = Character::new(CharacterClass::Warrior);
        assert_eq!(warrior.strength(), 15);
        assert_eq!(warrior.magic(), 5);
        assert_eq!(warrior.agility(), 8);
        assert_eq!(warrior.level(), 1);
        assert_eq!(warrior.health(), 100);
        assert_eq!(warrior.max_health(), 100);
        assert!(warrior.inventory().is_empty());
    }

    #[test]
    fn n_level_ups_apply_n_deltas() {
        for class in CharacterClass::iter() {
            let profile = class.profile();
            let mut character = Character::new(class);

            for n in 1..=6u32 {
                character.level_up();

                assert_eq!(character.level(), 1 + n);
                assert_eq!(character.max_health(), 100 + 20 * n);
                assert_eq!(character.health(), character.max_health());
                assert_eq!(
                    character.strength(),
                    profile.base.strength + n * profile.per_level.strength
                );
                assert_eq!(character.magic(), profile.base.magic + n * profile.per_level.magic);
                assert_eq!(
                    character.agility(),
                    profile.base.agility + n * profile.per_level.agility
                );
            }
        }
    }

    #[test]
    fn level_up_fully_heals() {
        let mut rogue = Character::new(CharacterClass::Rogue);
        rogue.take_damage(70);
        assert_eq!(rogue.health(), 30);

        rogue.level_up();
        assert_eq!(rogue.health(), 120);
    }

    #[test]
    fn heal_is_capped_at_max_health() {
        let mut mage = Character::new(CharacterClass::Mage);
        assert_eq!(mage.heal(10), 0);

        mage.take_damage(4);
        assert_eq!(mage.heal(10), 4);
        assert_eq!(mage.health(), 100);
    }

    #[test]
    fn heal_never_underflows_above_max_health() {
        let mut warrior = Character::new(CharacterClass::Warrior);
        warrior.health = 150;

        assert_eq!(warrior.heal(10), 0);
        assert_eq!(warrior.health(), 150);
    }

    #[test]
    fn inventory_is_last_in_first_out() {
        let mut warrior = Character::new(CharacterClass::Warrior);
        warrior.push_item(Item::new("Sword", 10, 5));
        warrior.push_item(Item::new("Dagger", 6, 10));

        assert_eq!(warrior.pop_item().map(|i| i.name().to_owned()), Some("Dagger".into()));
        assert_eq!(warrior.pop_item().map(|i| i.name().to_owned()), Some("Sword".into()));
        assert_eq!(warrior.pop_item(), None);
    }

    #[test]
    fn primary_stat_follows_class() {
        assert_eq!(Character::new(CharacterClass::Warrior).primary_stat(), 15);
        let mut mage = Character::new(CharacterClass::Mage);
        mage.level_up();
        assert_eq!(mage.primary_stat(), 18);
        assert_eq!(mage.stat(PrimaryStat::Strength), 6);
    }
}
