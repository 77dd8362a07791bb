//! Session state representation.
//!
//! This module owns the data structures that describe the player character,
//! its items and the session statistics. Callers read this state through
//! snapshots but mutate it exclusively through [`Game`](crate::Game).
pub mod character;
pub mod class;
pub mod item;
pub mod snapshot;
pub mod statistics;

pub use character::Character;
pub use class::{CharacterClass, ClassProfile, PrimaryStat, StatLine};
pub use item::Item;
pub use snapshot::{CharacterSnapshot, StatsSnapshot};
pub use statistics::GameStatistics;

/// Lifecycle state of a session.
///
/// `Menu` is the initial state; `GameOver` and `Victory` are terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameState {
    /// Returns true for states with no outgoing transitions except a restart.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}
