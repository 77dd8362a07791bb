use std::fmt;

use crate::error::Rejection;

/// What a single action did, before any level advancement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Attacked { damage: u64 },
    /// Reports the configured heal even when health was already full.
    Defended { healed: u32 },
    Collected { item: String },
    /// The catalog is empty.
    NoItemsAvailable,
    UsedItem { item: String, power: u32 },
    /// The popped item had no uses left and was discarded.
    ItemBroken { item: String },
    NothingToUse,
}

impl ActionOutcome {
    /// Score added by this outcome.
    pub fn score_gained(&self) -> u64 {
        match self {
            Self::Attacked { damage } => *damage,
            Self::UsedItem { power, .. } => u64::from(*power),
            _ => 0,
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attacked { damage } => write!(f, "Performed attack dealing {damage} damage"),
            Self::Defended { healed } => write!(f, "Defended and recovered {healed} health"),
            Self::Collected { item } => write!(f, "Collected {item}"),
            Self::NoItemsAvailable => f.write_str("No items available to collect"),
            Self::UsedItem { item, power } => write!(f, "Used {item} for {power} power"),
            Self::ItemBroken { item } => write!(f, "{item} is broken"),
            Self::NothingToUse => f.write_str("No items in inventory"),
        }
    }
}

/// End-of-session summary produced on victory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictorySummary {
    pub final_score: u64,
    pub duration_secs: f64,
    pub actions_performed: u64,
    pub items_collected: u64,
    pub levels_completed: u32,
    pub new_high_score: bool,
}

impl fmt::Display for VictorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game completed!")?;
        writeln!(f, "Final score: {}", self.final_score)?;
        writeln!(f, "Time played: {:.2} seconds", self.duration_secs)?;
        writeln!(f, "Actions performed: {}", self.actions_performed)?;
        writeln!(f, "Items collected: {}", self.items_collected)?;
        write!(f, "Levels completed: {}", self.levels_completed)?;
        if self.new_high_score {
            write!(f, "\nNew high score achieved!")?;
        }
        Ok(())
    }
}

/// Full result of an accepted action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    /// Levels reached during this action, in order.
    pub level_ups: Vec<u32>,
    /// Set when this action won the session.
    pub victory: Option<VictorySummary>,
}

impl ActionReport {
    pub(crate) fn new(outcome: ActionOutcome) -> Self {
        Self {
            outcome,
            level_ups: Vec::new(),
            victory: None,
        }
    }

    pub fn advanced(&self) -> bool {
        !self.level_ups.is_empty()
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)?;
        for level in &self.level_ups {
            write!(f, "\nAdvanced to level {level}")?;
        }
        Ok(())
    }
}

/// Renders either arm of an operation result as the player-facing message.
pub trait Response {
    fn message(&self) -> String;
}

impl<T: fmt::Display> Response for Result<T, Rejection> {
    fn message(&self) -> String {
        match self {
            Ok(value) => value.to_string(),
            Err(rejection) => rejection.to_string(),
        }
    }
}
