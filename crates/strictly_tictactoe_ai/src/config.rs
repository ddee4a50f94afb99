//! Tunable AI settings, loadable from TOML.

use crate::difficulty::Difficulty;
use crate::error::ConfigError;
use derive_getters::Getters;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Randomized pause range applied before an AI answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelay {
    /// Lower bound in milliseconds.
    pub min_ms: u64,
    /// Upper bound in milliseconds.
    pub max_ms: u64,
}

impl ThinkingDelay {
    /// Creates a delay range.
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// No pause at all.
    pub const fn none() -> Self {
        Self::new(0, 0)
    }

    /// Draws a duration from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }

    /// Sleeps for a sampled duration; returns immediately for a zero range.
    pub async fn pause(&self) {
        let delay = self.sample(&mut StdRng::from_entropy());
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Thinking");
            tokio::time::sleep(delay).await;
        }
    }
}

/// Settings shared by every AI tier.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// Pause range for the easy AI.
    #[serde(default = "default_easy_delay")]
    easy_delay: ThinkingDelay,

    /// Pause range for the medium AI.
    #[serde(default = "default_medium_delay")]
    medium_delay: ThinkingDelay,

    /// Pause range for the hard AI.
    #[serde(default = "default_hard_delay")]
    hard_delay: ThinkingDelay,

    /// Chance that the easy AI notices a winning move.
    #[serde(default = "default_win_detection_rate")]
    win_detection_rate: f64,

    /// Chance that the easy AI notices a move it must block.
    #[serde(default = "default_block_detection_rate")]
    block_detection_rate: f64,

    /// Search depth ceiling for the hard AI, in plies.
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

fn default_easy_delay() -> ThinkingDelay {
    ThinkingDelay::new(200, 800)
}

fn default_medium_delay() -> ThinkingDelay {
    ThinkingDelay::new(500, 1200)
}

fn default_hard_delay() -> ThinkingDelay {
    ThinkingDelay::new(800, 2000)
}

fn default_win_detection_rate() -> f64 {
    0.8
}

fn default_block_detection_rate() -> f64 {
    0.7
}

fn default_max_depth() -> usize {
    10
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            easy_delay: default_easy_delay(),
            medium_delay: default_medium_delay(),
            hard_delay: default_hard_delay(),
            win_detection_rate: default_win_detection_rate(),
            block_detection_rate: default_block_detection_rate(),
            max_depth: default_max_depth(),
        }
    }
}

impl AiConfig {
    /// Default settings with every thinking delay removed.
    pub fn headless() -> Self {
        Self {
            easy_delay: ThinkingDelay::none(),
            medium_delay: ThinkingDelay::none(),
            hard_delay: ThinkingDelay::none(),
            ..Self::default()
        }
    }

    /// Pause range for the given tier.
    pub fn delay_for(&self, difficulty: Difficulty) -> ThinkingDelay {
        match difficulty {
            Difficulty::Easy => self.easy_delay,
            Difficulty::Medium => self.medium_delay,
            Difficulty::Hard => self.hard_delay,
        }
    }

    /// Replaces the pause range for one tier.
    pub fn with_delay(mut self, difficulty: Difficulty, delay: ThinkingDelay) -> Self {
        match difficulty {
            Difficulty::Easy => self.easy_delay = delay,
            Difficulty::Medium => self.medium_delay = delay,
            Difficulty::Hard => self.hard_delay = delay,
        }
        self
    }

    /// Replaces the easy AI's detection rates, clamped to `[0, 1]`.
    pub fn with_detection_rates(mut self, win: f64, block: f64) -> Self {
        self.win_detection_rate = clamp_rate(win);
        self.block_detection_rate = clamp_rate(block);
        self
    }

    /// Replaces the hard AI's search depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses TOML, applying defaults for missing keys.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validated()
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(max_depth = config.max_depth, "Config loaded successfully");
        Ok(config)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        for (name, delay) in [
            ("easy_delay", self.easy_delay),
            ("medium_delay", self.medium_delay),
            ("hard_delay", self.hard_delay),
        ] {
            if delay.max_ms < delay.min_ms {
                return Err(ConfigError::new(format!(
                    "{}: max_ms {} is below min_ms {}",
                    name, delay.max_ms, delay.min_ms
                )));
            }
        }
        if self.win_detection_rate.is_nan() || self.block_detection_rate.is_nan() {
            return Err(ConfigError::new("Detection rates must be numbers"));
        }
        self.win_detection_rate = clamp_rate(self.win_detection_rate);
        self.block_detection_rate = clamp_rate(self.block_detection_rate);
        Ok(self)
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}
