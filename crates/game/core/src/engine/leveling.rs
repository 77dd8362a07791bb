//! Level advancement and session completion.

use super::Game;
use crate::action::{ActionReport, VictorySummary};
use crate::config::LevelingMode;
use crate::env::RngOracle;
use crate::state::GameState;

impl<R: RngOracle> Game<R> {
    /// Advances while `score >= current_level * step`.
    ///
    /// `SingleStep` stops after one advance; `Cascade` keeps going until the
    /// score is below the next threshold or the session is won.
    pub(super) fn check_level_threshold(&mut self, report: &mut ActionReport) {
        while self.score >= self.config.threshold_for(self.current_level) {
            self.advance_level(report);
            if self.config.leveling == LevelingMode::SingleStep || self.state != GameState::Playing
            {
                break;
            }
        }
    }

    fn advance_level(&mut self, report: &mut ActionReport) {
        self.current_level += 1;
        if let Some(character) = self.character.as_mut() {
            character.level_up();
        }
        self.stats.levels_completed += 1;
        report.level_ups.push(self.current_level);
        tracing::debug!(level = self.current_level, score = self.score, "level advanced");

        if self.current_level > self.config.max_level {
            report.victory = Some(self.complete_game());
        }
    }

    /// Wins the session: stamps the end time, records the high score and
    /// builds the final summary.
    pub(crate) fn complete_game(&mut self) -> VictorySummary {
        self.state = GameState::Victory;
        self.stats.end_session();
        let new_high_score = self.stats.update_high_score(self.score);
        self.high_score = self.high_score.max(self.stats.high_score());

        let summary = VictorySummary {
            final_score: self.score,
            duration_secs: self.stats.session_duration().as_secs_f64(),
            actions_performed: self.stats.actions_performed,
            items_collected: self.stats.items_collected,
            levels_completed: self.stats.levels_completed,
            new_high_score,
        };
        tracing::info!(
            score = summary.final_score,
            actions = summary.actions_performed,
            new_high_score,
            "session won"
        );
        self.last_summary = Some(summary.clone());
        summary
    }
}
