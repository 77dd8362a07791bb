//! Rules engine for a single-player, turn-based RPG session.
//!
//! `sentinel-core` defines the canonical rules (character classes, leveling,
//! item durability, scoring) and the session state machine. All state
//! mutation flows through [`Game`]; everything else in the crate is data the
//! game owns or hands out as read-only snapshots.
//!
//! ```
//! use sentinel_core::{ActionKind, CharacterClass, Game, GameState};
//!
//! let mut game = Game::new();
//! game.start_new_game(CharacterClass::Warrior);
//! let report = game.perform_action(ActionKind::Attack).expect("session is playing");
//! assert!(report.to_string().starts_with("Performed attack dealing"));
//! assert_eq!(game.state(), GameState::Playing);
//! ```
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{ActionKind, ActionOutcome, ActionReport, Response, VictorySummary};
pub use config::{ConfigError, DamageRoll, LevelingMode, SessionConfig};
pub use engine::{Game, Transition};
pub use env::{ItemCatalog, ItemTemplate, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError, NoActiveSession, ParseActionError, Rejection};
pub use state::{
    Character, CharacterClass, CharacterSnapshot, ClassProfile, GameState, GameStatistics, Item,
    PrimaryStat, StatLine, StatsSnapshot,
};
