pub mod loader;

pub use loader::{ConfigError, load_config, load_config_from_path, save_config_to_path};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::{DROP_INTERVALS_MS, FIELD_HEIGHT, FIELD_WIDTH, HANG_MULTIPLIER};

// Smallest field that still fits every piece in every orientation
const MIN_FIELD_SIZE: u16 = 4;
// Keeps the cell buffer and the rendered board width within range
const MAX_FIELD_SIZE: u16 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub timing: TimingConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.width < MIN_FIELD_SIZE || self.field.height < MIN_FIELD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "field must be at least {MIN_FIELD_SIZE}x{MIN_FIELD_SIZE}, got {}x{}",
                self.field.width, self.field.height
            )));
        }
        if self.field.width > MAX_FIELD_SIZE || self.field.height > MAX_FIELD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "field must be at most {MAX_FIELD_SIZE}x{MAX_FIELD_SIZE}, got {}x{}",
                self.field.width, self.field.height
            )));
        }

        let intervals = &self.timing.drop_intervals_ms;
        if intervals.is_empty() {
            return Err(ConfigError::Invalid(
                "timing.drop_intervals_ms must not be empty".to_string(),
            ));
        }
        if intervals.contains(&0) {
            return Err(ConfigError::Invalid(
                "timing.drop_intervals_ms entries must be non-zero".to_string(),
            ));
        }
        if intervals.windows(2).any(|pair| pair[1] > pair[0]) {
            return Err(ConfigError::Invalid(
                "timing.drop_intervals_ms must not increase from one level to the next"
                    .to_string(),
            ));
        }

        if self.timing.hang_multiplier == 0 {
            return Err(ConfigError::Invalid(
                "timing.hang_multiplier must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Playfield interior size in cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

// Gravity speed per level and lock-delay length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub drop_intervals_ms: Vec<u64>,
    pub hang_multiplier: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            drop_intervals_ms: DROP_INTERVALS_MS.to_vec(),
            hang_multiplier: HANG_MULTIPLIER,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn drop_intervals(&self) -> Vec<Duration> {
        self.drop_intervals_ms
            .iter()
            .copied()
            .map(Duration::from_millis)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub start_paused: bool,
    /// Fixed bag seed for reproducible piece order. Unset means entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_paused: true,
            seed: None,
        }
    }
}
