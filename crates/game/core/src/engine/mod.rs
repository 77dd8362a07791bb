//! Session orchestration and action resolution.
//!
//! [`Game`] is the authoritative owner of a session: the character, the
//! statistics, the score and the [`GameState`] machine. Every mutation flows
//! through its operations, which validate the current state first and report
//! refusals as [`Rejection`](crate::Rejection) values.
//!
//! ```text
//! Menu ──start──▶ Playing ◀──resume── Paused
//!                   │ ──pause────────▶ │
//!                   │ level > max      │
//!                   ▼                  ▼
//!                Victory   GameOver ◀─quit (any state)
//! ```
//! `start_new_game` is accepted from every state and always lands in `Playing`.

mod actions;
mod leveling;
mod transition;

pub use transition::Transition;

use crate::action::VictorySummary;
use crate::config::{ConfigError, SessionConfig};
use crate::env::{ItemCatalog, PcgRng, RngOracle};
use crate::error::NoActiveSession;
use crate::state::{Character, CharacterSnapshot, GameState, GameStatistics, StatsSnapshot};

/// A single-player session and its rules engine.
///
/// Not synchronized: a `Game` must be driven by one caller at a time. The
/// [`ItemCatalog`] it holds is shared read-only data and may back any number of games.
#[derive(Debug)]
pub struct Game<R: RngOracle = PcgRng> {
    state: GameState,
    character: Option<Character>,
    score: u64,
    current_level: u32,
    stats: GameStatistics,
    /// Best victory score across every session of this `Game`.
    high_score: u64,
    last_summary: Option<VictorySummary>,

    config: SessionConfig,
    catalog: ItemCatalog,
    rng: R,
    game_seed: u64,
    /// Accepted-action counter feeding per-roll seeds. Never reset.
    nonce: u64,
}

impl Game<PcgRng> {
    /// A game with the default rules and the standard item catalog.
    pub fn new() -> Self {
        Self::build(SessionConfig::default(), ItemCatalog::standard(), PcgRng)
    }

    /// A game with custom rules and catalog.
    pub fn with_config(config: SessionConfig, catalog: ItemCatalog) -> Result<Self, ConfigError> {
        Self::with_rng(config, catalog, PcgRng)
    }
}

impl Default for Game<PcgRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngOracle> Game<R> {
    /// A game driven by a caller-supplied RNG oracle.
    pub fn with_rng(config: SessionConfig, catalog: ItemCatalog, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, catalog, rng))
    }

    fn build(config: SessionConfig, catalog: ItemCatalog, rng: R) -> Self {
        let game_seed = config.seed.unwrap_or_else(rand::random);
        Self {
            state: GameState::Menu,
            character: None,
            score: 0,
            current_level: 1,
            stats: GameStatistics::new(),
            high_score: 0,
            last_summary: None,
            config,
            catalog,
            rng,
            game_seed,
            nonce: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current character, once a session has been started.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn character_snapshot(&self) -> Result<CharacterSnapshot, NoActiveSession> {
        self.character
            .as_ref()
            .map(Character::snapshot)
            .ok_or(NoActiveSession)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Overrides the running score without touching any counter.
    ///
    /// Lets test harnesses park a session just below a leveling threshold.
    pub fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn max_level(&self) -> u32 {
        self.config.max_level
    }

    pub fn stats(&self) -> &GameStatistics {
        &self.stats
    }

    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Best victory score over the lifetime of this `Game`.
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Summary of the most recent victory in the current session.
    pub fn last_summary(&self) -> Option<&VictorySummary> {
        self.last_summary.as_ref()
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.game_seed
    }
}
