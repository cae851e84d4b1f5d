#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use bevy_ecs::prelude::Resource;
use log::trace;

use crate::config::Config;
use crate::game::{DROP_INTERVALS_MS, HANG_MULTIPLIER};
use crate::session::{AdvanceOutcome, SessionController};

/// Decides when gravity fires. Lives beside the session, never inside it.
#[derive(Resource, Debug, Clone)]
pub struct GravityScheduler {
    last_drop: Duration,
    intervals: Vec<Duration>,
    hang_multiplier: u32,
}

impl Default for GravityScheduler {
    fn default() -> Self {
        Self::new(
            DROP_INTERVALS_MS.iter().copied().map(Duration::from_millis).collect(),
            HANG_MULTIPLIER,
        )
    }
}

impl GravityScheduler {
    /// # Panics
    ///
    /// Panics if `intervals` is empty.
    #[must_use]
    pub fn new(intervals: Vec<Duration>, hang_multiplier: u32) -> Self {
        assert!(!intervals.is_empty(), "drop interval table must not be empty");
        Self {
            last_drop: Duration::ZERO,
            intervals,
            hang_multiplier,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.timing.drop_intervals(), config.timing.hang_multiplier)
    }

    /// Interval for `level`, clamped to the last table entry.
    #[must_use]
    pub fn drop_interval(&self, level: u32) -> Duration {
        let last = self.intervals.len() - 1;
        let index = usize::try_from(level).map_or(last, |level| level.min(last));
        self.intervals[index]
    }

    #[must_use]
    pub fn last_drop(&self) -> Duration {
        self.last_drop
    }

    /// Forgets the previous drop, e.g. after a restart.
    pub fn reset(&mut self, now: Duration) {
        self.last_drop = now;
    }

    /// Runs one gravity step if it is due at `now`.
    pub fn tick(&mut self, session: &mut SessionController, now: Duration) -> Option<AdvanceOutcome> {
        if session.is_paused() || session.is_game_over() {
            return None;
        }

        let interval = self.drop_interval(session.level());
        let hang = session.hang();
        let due = if hang.active {
            now.saturating_sub(hang.since) > interval * self.hang_multiplier
        } else {
            now.saturating_sub(self.last_drop) > interval
        };
        if !due {
            return None;
        }

        self.last_drop = now;
        let outcome = session.advance(now);
        trace!("Gravity tick at {now:?}: {outcome:?}");
        Some(outcome)
    }
}
