//! Ticker configuration loaded from TOML
//!
//! ```toml
//! step_hz = 60.0
//! max_backlog_steps = 10
//! ```
//!
//! Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tickwork_core::{Result, TickworkError};

/// Fixed-timestep parameters for a `Ticker`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Simulation steps per second
    pub step_hz: f64,
    /// Largest backlog kept between frames, in whole steps
    pub max_backlog_steps: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            step_hz: 60.0,
            max_backlog_steps: 10,
        }
    }
}

impl TickerConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TickerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.step_hz.is_finite() || self.step_hz <= 0.0 {
            return Err(TickworkError::InvalidArgument(format!(
                "step_hz must be a positive finite number, got {}",
                self.step_hz
            )));
        }
        if self.max_backlog_steps == 0 {
            return Err(TickworkError::InvalidArgument(
                "max_backlog_steps must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Length of one simulation quantum in seconds
    pub fn step_seconds(&self) -> f64 {
        1.0 / self.step_hz
    }

    /// Backlog ceiling in seconds
    pub fn max_backlog(&self) -> f64 {
        self.max_backlog_steps as f64 * self.step_seconds()
    }
}
