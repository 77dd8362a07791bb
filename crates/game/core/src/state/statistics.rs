//! Session-scoped counters and timers.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::snapshot::StatsSnapshot;

/// Counters and timestamps for one session.
///
/// Counters are mutated only by [`Game`](crate::Game) and never decrease.
/// `session_duration` is zero until both the start and the end are stamped.
#[derive(Clone, Debug, Default)]
pub struct GameStatistics {
    started: Option<Stamp>,
    ended: Option<Stamp>,
    pub actions_performed: u64,
    pub items_collected: u64,
    /// Reserved; no action defeats enemies yet.
    pub enemies_defeated: u64,
    pub levels_completed: u32,
    high_score: u64,
}

/// Wall-clock time for reporting plus a monotonic instant for measuring.
#[derive(Clone, Copy, Debug)]
struct Stamp {
    wall: DateTime<Utc>,
    instant: Instant,
}

impl Stamp {
    fn now() -> Self {
        Self {
            wall: Utc::now(),
            instant: Instant::now(),
        }
    }
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh statistics that remember a previously reached high score.
    pub fn with_high_score(high_score: u64) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    pub fn start_session(&mut self) {
        self.started = Some(Stamp::now());
    }

    /// Stamps the end time. Calling it again re-stamps.
    pub fn end_session(&mut self) {
        self.ended = Some(Stamp::now());
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.started.map(|stamp| stamp.wall)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.ended.map(|stamp| stamp.wall)
    }

    /// Elapsed time between start and end, or zero if either is unset.
    pub fn session_duration(&self) -> Duration {
        match (self.started, self.ended) {
            (Some(start), Some(end)) => end.instant.saturating_duration_since(start.instant),
            _ => Duration::ZERO,
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Records `score` if it strictly beats the stored high score.
    ///
    /// Returns whether a new record was set.
    pub fn update_high_score(&mut self, score: u64) -> bool {
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            duration_secs: self.session_duration().as_secs_f64(),
            actions_performed: self.actions_performed,
            items_collected: self.items_collected,
            enemies_defeated: self.enemies_defeated,
            levels_completed: self.levels_completed,
            high_score: self.high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_until_both_ends_are_stamped() {
        let mut stats = GameStatistics::new();
        assert_eq!(stats.session_duration(), Duration::ZERO);

        stats.start_session();
        assert_eq!(stats.session_duration(), Duration::ZERO);
        assert!(stats.start_time().is_some());
        assert!(stats.end_time().is_none());

        stats.end_session();
        assert!(stats.end_time().is_some());
        assert!(stats.end_time() >= stats.start_time());
    }

    #[test]
    fn end_without_start_reports_zero() {
        let mut stats = GameStatistics::new();
        stats.end_session();
        assert_eq!(stats.session_duration(), Duration::ZERO);
    }

    #[test]
    fn high_score_only_moves_up() {
        let mut stats = GameStatistics::new();
        assert!(stats.update_high_score(120));
        assert!(!stats.update_high_score(120));
        assert!(!stats.update_high_score(80));
        assert_eq!(stats.high_score(), 120);
        assert!(stats.update_high_score(121));
    }

    #[test]
    fn carried_high_score_must_be_beaten() {
        let mut stats = GameStatistics::with_high_score(500);
        assert_eq!(stats.actions_performed, 0);
        assert!(!stats.update_high_score(499));
        assert!(stats.update_high_score(501));
    }
}
