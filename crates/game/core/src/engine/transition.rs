//! Session lifecycle transitions: start, pause, resume, quit.

use std::fmt;

use super::Game;
use crate::env::RngOracle;
use crate::error::{GameError, Rejection};
use crate::state::{Character, CharacterClass, GameState, GameStatistics};

/// An accepted lifecycle transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Started { class: CharacterClass },
    Paused,
    Resumed,
    Quit,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { class } => write!(f, "Started new game with {class} class"),
            Self::Paused => f.write_str("Game paused"),
            Self::Resumed => f.write_str("Game resumed"),
            Self::Quit => f.write_str("Game quit"),
        }
    }
}

impl<R: RngOracle> Game<R> {
    /// Starts a fresh session from any state.
    ///
    /// Replaces the character, resets score and level, and opens new statistics
    /// that carry over the game-wide high score.
    pub fn start_new_game(&mut self, class: CharacterClass) -> Transition {
        self.character = Some(Character::with_health(
            class,
            self.config.base_max_health,
            self.config.health_per_level,
        ));
        self.state = GameState::Playing;
        self.score = 0;
        self.current_level = 1;
        self.last_summary = None;
        self.stats = GameStatistics::with_high_score(self.high_score);
        self.stats.start_session();

        tracing::info!(%class, seed = self.game_seed, "session started");
        Transition::Started { class }
    }

    /// `Playing -> Paused`.
    pub fn pause_game(&mut self) -> Result<Transition, Rejection> {
        if self.state != GameState::Playing {
            let rejection = Rejection::CannotPause { state: self.state };
            tracing::warn!(
                %rejection,
                code = rejection.error_code(),
                severity = rejection.severity().as_str(),
                "pause refused"
            );
            return Err(rejection);
        }
        self.state = GameState::Paused;
        tracing::debug!("session paused");
        Ok(Transition::Paused)
    }

    /// `Paused -> Playing`.
    pub fn resume_game(&mut self) -> Result<Transition, Rejection> {
        if self.state != GameState::Paused {
            let rejection = Rejection::CannotResume { state: self.state };
            tracing::warn!(
                %rejection,
                code = rejection.error_code(),
                severity = rejection.severity().as_str(),
                "resume refused"
            );
            return Err(rejection);
        }
        self.state = GameState::Playing;
        tracing::debug!("session resumed");
        Ok(Transition::Resumed)
    }

    /// Ends the session from any state. Each call re-stamps the end time.
    pub fn quit_game(&mut self) -> Transition {
        self.state = GameState::GameOver;
        self.stats.end_session();
        tracing::info!(score = self.score, level = self.current_level, "session quit");
        Transition::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, Response};

    fn playing() -> Game {
        let mut game = Game::new();
        game.start_new_game(CharacterClass::Warrior);
        game
    }

    #[test]
    fn start_initializes_session() {
        let mut game = Game::new();
        let started = game.start_new_game(CharacterClass::Mage);

        assert_eq!(started.to_string(), "Started new game with mage class");
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.character().map(Character::class), Some(CharacterClass::Mage));
        assert!(game.stats().start_time().is_some());
    }

    #[test]
    fn restart_resets_progress_from_any_state() {
        let mut game = playing();
        game.perform_action(ActionKind::CollectItem).expect("playing");
        game.set_score(250);
        game.quit_game();

        game.start_new_game(CharacterClass::Rogue);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.stats().actions_performed, 0);
        assert_eq!(game.stats().items_collected, 0);
        assert_eq!(game.character_snapshot().map(|c| c.inventory_size()), Ok(0));
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let mut game = playing();

        assert_eq!(game.pause_game().message(), "Game paused");
        assert_eq!(game.state(), GameState::Paused);

        assert_eq!(game.resume_game().message(), "Game resumed");
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn pause_outside_playing_is_refused() {
        let mut game = Game::new();
        assert_eq!(
            game.pause_game(),
            Err(Rejection::CannotPause {
                state: GameState::Menu
            })
        );

        let mut game = playing();
        game.pause_game().expect("playing");
        assert_eq!(
            game.pause_game().message(),
            "Cannot pause: Game is in paused state"
        );
        assert_eq!(game.state(), GameState::Paused);
    }

    #[test]
    fn resume_outside_paused_is_refused() {
        let mut game = playing();
        assert_eq!(
            game.resume_game().message(),
            "Cannot resume: Game is in playing state"
        );
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn quit_is_unconditional_and_repeatable() {
        let mut game = Game::new();
        assert_eq!(game.quit_game().to_string(), "Game quit");
        assert_eq!(game.state(), GameState::GameOver);

        let mut game = playing();
        game.pause_game().expect("playing");
        game.quit_game();
        let first_end = game.stats().end_time();
        game.quit_game();

        assert_eq!(game.state(), GameState::GameOver);
        assert!(game.stats().end_time() >= first_end);
        assert!(game.resume_game().is_err());
    }
}
