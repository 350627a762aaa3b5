//! # Scenario Configuration
//!
//! Roster sizes and reward options for the tag scenario, plus the JSON
//! document the runtime loads them from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reset::ResetOverrides;

/// Distance-based reward shaping.
///
/// With [`RewardShaping::Distance`] prey earn `0.1` per unit of distance to
/// each predator, and every predator loses `0.1` per unit of distance between
/// each predator and its nearest prey.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardShaping {
    #[default]
    Disabled,
    Distance,
}

impl RewardShaping {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, RewardShaping::Distance)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Number of prey.
    pub num_good: usize,
    /// Number of predators.
    pub num_adversaries: usize,
    /// Number of static, non-boundary obstacles.
    pub num_obstacles: usize,
    pub shaping: RewardShaping,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            num_good: 1,
            num_adversaries: 3,
            num_obstacles: 2,
            shaping: RewardShaping::Disabled,
        }
    }
}

impl TagConfig {
    #[must_use]
    pub const fn new(num_good: usize, num_adversaries: usize, num_obstacles: usize) -> Self {
        Self {
            num_good,
            num_adversaries,
            num_obstacles,
            shaping: RewardShaping::Disabled,
        }
    }

    /// Builds a config from signed counts supplied by a host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] for the first count below zero.
    pub fn from_counts(
        num_good: i64,
        num_adversaries: i64,
        num_obstacles: i64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            non_negative("num_good", num_good)?,
            non_negative("num_adversaries", num_adversaries)?,
            non_negative("num_obstacles", num_obstacles)?,
        ))
    }

    #[must_use]
    pub const fn with_shaping(mut self, shaping: RewardShaping) -> Self {
        self.shaping = shaping;
        self
    }

    #[must_use]
    pub const fn num_agents(&self) -> usize {
        self.num_adversaries + self.num_good
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeCount { field, value })
}

/// Scenario description read by hosts: the roster config and optional fixed
/// starting positions.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub config: TagConfig,
    #[serde(default)]
    pub overrides: Option<ResetOverrides>,
}

impl ScenarioFile {
    /// Parses a scenario document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, including negative
    /// roster sizes.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid scenario.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json)
    }
}
