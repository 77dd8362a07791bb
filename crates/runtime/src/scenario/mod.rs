//! Scenario scripts for driving a session.
//!
//! A scenario names the character class to start with and lists the
//! commands to issue afterwards, in order. Scenarios are plain data so test
//! suites can keep them in RON files next to their expectations:
//!
//! ```ron
//! (
//!     name: "pause_blocks_actions",
//!     class: warrior,
//!     steps: [Action(attack), Pause, Action(attack), Resume, Quit],
//! )
//! ```

use std::path::Path;

use sentinel_core::{ActionKind, CharacterClass};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// One caller-issued command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a fresh session with the given class.
    Restart(CharacterClass),
    Action(ActionKind),
    Pause,
    Resume,
    Quit,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Restart(class) => write!(f, "restart({class})"),
            Command::Action(action) => write!(f, "{action}"),
            Command::Pause => f.write_str("pause"),
            Command::Resume => f.write_str("resume"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

/// Scripted session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Class of the session started before the first step.
    pub class: CharacterClass,
    pub steps: Vec<Command>,
}

impl Scenario {
    /// Creates a new scenario.
    pub fn new(name: impl Into<String>, class: CharacterClass, steps: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            class,
            steps,
        }
    }

    /// Every action once, then a pause/resume cycle with a blocked action, then quit.
    pub fn smoke(class: CharacterClass) -> Self {
        Self::new(
            format!("smoke_{class}"),
            class,
            vec![
                Command::Action(ActionKind::Attack),
                Command::Action(ActionKind::Defend),
                Command::Action(ActionKind::CollectItem),
                Command::Action(ActionKind::UseItem),
                Command::Pause,
                Command::Action(ActionKind::Attack),
                Command::Resume,
                Command::Quit,
            ],
        )
    }

    /// `count` repetitions of one action.
    pub fn repeat(class: CharacterClass, action: ActionKind, count: usize) -> Self {
        Self::new(
            format!("{action}_x{count}"),
            class,
            vec![Command::Action(action); count],
        )
    }

    /// Rejects scenarios that would not exercise anything.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(RuntimeError::EmptyScenario {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a single scenario from a RON file.
    pub fn load(path: &Path) -> Result<Scenario> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ReadScenario {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> Result<Scenario> {
        let scenario: Scenario = ron::from_str(content)?;
        scenario.validate()?;
        tracing::debug!(
            name = %scenario.name,
            steps = scenario.steps.len(),
            "scenario parsed"
        );
        Ok(scenario)
    }
}
