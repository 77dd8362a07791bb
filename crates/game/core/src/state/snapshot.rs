//! Read-only views handed to callers.

use super::class::CharacterClass;

/// Point-in-time view of a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub class: CharacterClass,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub agility: u32,
    pub experience: u64,
    /// Item names in collection order.
    pub inventory: Vec<String>,
}

impl CharacterSnapshot {
    pub fn inventory_size(&self) -> usize {
        self.inventory.len()
    }
}

/// Point-in-time view of session statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub duration_secs: f64,
    pub actions_performed: u64,
    pub items_collected: u64,
    pub enemies_defeated: u64,
    pub levels_completed: u32,
    pub high_score: u64,
}
