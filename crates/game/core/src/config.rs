//! Session configuration constants and tunable parameters.
use crate::error::{ErrorSeverity, GameError};

/// How many levels a single action may advance once the score threshold is crossed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LevelingMode {
    /// At most one level per action, even when the score overshoots several thresholds.
    #[default]
    SingleStep,
    /// Keep advancing until `score < current_level * step` (or the session ends).
    Cascade,
}

/// Inclusive bounds of the random bonus added to every attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    pub min: u32,
    pub max: u32,
}

impl DamageRoll {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for DamageRoll {
    fn default() -> Self {
        Self::new(SessionConfig::DEFAULT_ROLL_MIN, SessionConfig::DEFAULT_ROLL_MAX)
    }
}

/// Rules configuration shared by every session started on a [`Game`](crate::Game).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Last playable level; advancing past it wins the session.
    pub max_level: u32,
    /// Score required per level: advancing from level N needs `N * level_threshold_step`.
    pub level_threshold_step: u64,
    /// Maximum health of a freshly created character.
    pub base_max_health: u32,
    /// Maximum health gained on every level-up.
    pub health_per_level: u32,
    /// Health restored by the defend action.
    pub defend_heal: u32,
    pub damage_roll: DamageRoll,
    pub leveling: LevelingMode,
    /// Fixed RNG seed. `None` draws a fresh seed for each `Game`.
    pub seed: Option<u64>,
}

impl SessionConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LEVEL: u32 = 5;
    pub const DEFAULT_LEVEL_THRESHOLD_STEP: u64 = 100;
    pub const DEFAULT_BASE_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_HEALTH_PER_LEVEL: u32 = 20;
    pub const DEFAULT_DEFEND_HEAL: u32 = 10;
    pub const DEFAULT_ROLL_MIN: u32 = 1;
    pub const DEFAULT_ROLL_MAX: u32 = 10;

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            level_threshold_step: Self::DEFAULT_LEVEL_THRESHOLD_STEP,
            base_max_health: Self::DEFAULT_BASE_MAX_HEALTH,
            health_per_level: Self::DEFAULT_HEALTH_PER_LEVEL,
            defend_heal: Self::DEFAULT_DEFEND_HEAL,
            damage_roll: DamageRoll::default(),
            leveling: LevelingMode::default(),
            seed: None,
        }
    }

    /// Default rules with a pinned seed, for replayable sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_leveling(mut self, leveling: LevelingMode) -> Self {
        self.leveling = leveling;
        self
    }

    /// Score at which a session sitting on `level` advances.
    pub fn threshold_for(&self, level: u32) -> u64 {
        u64::from(level).saturating_mul(self.level_threshold_step)
    }

    /// Rejects configurations under which the rules cannot make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }
        if self.level_threshold_step == 0 {
            return Err(ConfigError::ZeroThresholdStep);
        }
        if self.base_max_health == 0 {
            return Err(ConfigError::ZeroBaseHealth);
        }
        if self.damage_roll.min > self.damage_roll.max {
            return Err(ConfigError::InvertedDamageRoll {
                min: self.damage_roll.min,
                max: self.damage_roll.max,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid configuration or catalog data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_level must be at least 1")]
    ZeroMaxLevel,

    #[error("level_threshold_step must be at least 1")]
    ZeroThresholdStep,

    #[error("base_max_health must be at least 1")]
    ZeroBaseHealth,

    #[error("damage roll range is empty (min {min} > max {max})")]
    InvertedDamageRoll { min: u32, max: u32 },

    #[error("catalog item '{name}' has zero power")]
    ZeroPower { name: String },

    #[error("catalog item '{name}' has zero durability")]
    ZeroDurability { name: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxLevel => "CONFIG_ZERO_MAX_LEVEL",
            Self::ZeroThresholdStep => "CONFIG_ZERO_THRESHOLD_STEP",
            Self::ZeroBaseHealth => "CONFIG_ZERO_BASE_HEALTH",
            Self::InvertedDamageRoll { .. } => "CONFIG_INVERTED_DAMAGE_ROLL",
            Self::ZeroPower { .. } => "CATALOG_ZERO_POWER",
            Self::ZeroDurability { .. } => "CATALOG_ZERO_DURABILITY",
        }
    }
}
