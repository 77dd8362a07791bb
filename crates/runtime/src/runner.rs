//! Scenario execution and transcripts.

use sentinel_content::ContentFactory;
use sentinel_core::{
    CharacterSnapshot, Game, GameState, ItemCatalog, Response, SessionConfig, StatsSnapshot,
    VictorySummary,
};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::scenario::{Command, Scenario};

/// One executed command and what the game answered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub command: Command,
    pub message: String,
    /// False when the game refused the command in its current state.
    pub accepted: bool,
    pub state_after: GameState,
    pub score_after: u64,
}

/// Complete record of one scenario run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub scenario: String,
    pub seed: u64,
    pub entries: Vec<TranscriptEntry>,
    pub final_state: GameState,
    pub score: u64,
    pub current_level: u32,
    pub character: Option<CharacterSnapshot>,
    pub stats: StatsSnapshot,
    pub victory: Option<VictorySummary>,
}

impl Transcript {
    /// Messages in execution order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.message.as_str())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(|entry| !entry.accepted)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Replays scenarios against fresh games built from one rules/catalog pair.
#[derive(Clone, Debug, Default)]
pub struct ScenarioRunner {
    config: SessionConfig,
    catalog: ItemCatalog,
}

impl ScenarioRunner {
    pub fn new(config: SessionConfig, catalog: ItemCatalog) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    /// Runner using the content found in `factory`'s data directory.
    pub fn from_content(factory: &ContentFactory) -> Result<Self> {
        let config = factory.load_config().map_err(RuntimeError::Content)?;
        let catalog = factory.load_items().map_err(RuntimeError::Content)?;
        Self::new(config, catalog)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Runs one scenario on a new game and returns its transcript.
    pub fn run(&self, scenario: &Scenario) -> Result<Transcript> {
        scenario.validate()?;
        let span = tracing::info_span!("scenario", name = %scenario.name);
        let _guard = span.enter();

        let mut game = Game::with_config(self.config.clone(), self.catalog.clone())?;
        let mut entries = Vec::with_capacity(scenario.steps.len() + 1);
        let mut victory = None;

        let start = Command::Restart(scenario.class);
        for command in std::iter::once(&start).chain(&scenario.steps) {
            let (message, accepted) = match *command {
                Command::Restart(class) => {
                    victory = None;
                    (game.start_new_game(class).to_string(), true)
                }
                Command::Action(action) => {
                    let result = game.perform_action(action);
                    if let Ok(report) = &result {
                        if report.victory.is_some() {
                            victory.clone_from(&report.victory);
                        }
                    }
                    (result.message(), result.is_ok())
                }
                Command::Pause => {
                    let result = game.pause_game();
                    (result.message(), result.is_ok())
                }
                Command::Resume => {
                    let result = game.resume_game();
                    (result.message(), result.is_ok())
                }
                Command::Quit => (game.quit_game().to_string(), true),
            };

            tracing::debug!(%command, accepted, %message, "step");
            entries.push(TranscriptEntry {
                command: *command,
                message,
                accepted,
                state_after: game.state(),
                score_after: game.score(),
            });
        }

        let transcript = Transcript {
            scenario: scenario.name.clone(),
            seed: game.seed(),
            entries,
            final_state: game.state(),
            score: game.score(),
            current_level: game.current_level(),
            character: game.character_snapshot().ok(),
            stats: game.stats_snapshot(),
            victory,
        };
        tracing::info!(
            final_state = %transcript.final_state,
            score = transcript.score,
            rejected = transcript.rejected().count(),
            "scenario finished"
        );
        Ok(transcript)
    }

    /// Runs scenarios in order, stopping at the first setup error.
    pub fn run_all(&self, scenarios: &[Scenario]) -> Result<Vec<Transcript>> {
        scenarios.iter().map(|scenario| self.run(scenario)).collect()
    }
}
