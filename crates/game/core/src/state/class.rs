//! Character classes and the class balance table.
//!
//! Every class-dependent rule (base stats, per-level growth and the stat that
//! drives attack damage) is read from [`ClassProfile`], so the whole balance
//! model lives in one table.

/// Playable character class. Fixed once a character is created.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

/// The attribute a class attacks with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PrimaryStat {
    Strength,
    Magic,
    Agility,
}

/// Strength/magic/agility triple, used both for values and for per-level deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub strength: u32,
    pub magic: u32,
    pub agility: u32,
}

impl StatLine {
    pub const fn new(strength: u32, magic: u32, agility: u32) -> Self {
        Self {
            strength,
            magic,
            agility,
        }
    }

    pub fn get(&self, stat: PrimaryStat) -> u32 {
        match stat {
            PrimaryStat::Strength => self.strength,
            PrimaryStat::Magic => self.magic,
            PrimaryStat::Agility => self.agility,
        }
    }

    #[must_use]
    pub fn saturating_add(self, other: StatLine) -> Self {
        Self {
            strength: self.strength.saturating_add(other.strength),
            magic: self.magic.saturating_add(other.magic),
            agility: self.agility.saturating_add(other.agility),
        }
    }
}

/// Balance entry for one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassProfile {
    pub base: StatLine,
    pub per_level: StatLine,
    pub primary: PrimaryStat,
}

impl ClassProfile {
    const WARRIOR: Self = Self {
        base: StatLine::new(15, 5, 8),
        per_level: StatLine::new(3, 1, 1),
        primary: PrimaryStat::Strength,
    };

    const MAGE: Self = Self {
        base: StatLine::new(5, 15, 8),
        per_level: StatLine::new(1, 3, 1),
        primary: PrimaryStat::Magic,
    };

    const ROGUE: Self = Self {
        base: StatLine::new(8, 5, 15),
        per_level: StatLine::new(1, 1, 3),
        primary: PrimaryStat::Agility,
    };
}

impl CharacterClass {
    /// Balance table lookup.
    pub const fn profile(self) -> &'static ClassProfile {
        match self {
            Self::Warrior => &ClassProfile::WARRIOR,
            Self::Mage => &ClassProfile::MAGE,
            Self::Rogue => &ClassProfile::ROGUE,
        }
    }

    pub const fn primary_stat(self) -> PrimaryStat {
        self.profile().primary
    }
}
