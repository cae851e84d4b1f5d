pub mod app;
pub mod bag;
pub mod components;
pub mod config;
pub mod field;
pub mod game;
pub mod input;
pub mod piece;
pub mod scheduler;
pub mod session;
pub mod shape;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

/// Session clock. Game logic only sees `elapsed()`, never an `Instant`.
#[derive(Resource, Debug, Clone)]
pub struct Time {
    delta: Duration,
    elapsed: Duration,
    // None for a manual clock that only moves through `advance`
    last_update: Option<Instant>,
}

impl Time {
    /// Wall-clock backed, refreshed by `update`.
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            elapsed: Duration::default(),
            last_update: Some(Instant::now()),
        }
    }

    /// Frozen until `advance` is called.
    pub fn manual() -> Self {
        Self {
            delta: Duration::default(),
            elapsed: Duration::default(),
            last_update: None,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.last_update.is_none()
    }

    pub fn update(&mut self) {
        let Some(last_update) = self.last_update else {
            self.delta = Duration::default();
            return;
        };
        let now = Instant::now();
        self.delta = now.duration_since(last_update);
        self.elapsed += self.delta;
        self.last_update = Some(now);
    }

    pub fn advance(&mut self, step: Duration) {
        self.delta = step;
        self.elapsed += step;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
