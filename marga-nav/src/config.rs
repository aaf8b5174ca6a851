//! Configuration loading for MargaNav

use crate::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Navigator configuration
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Round-0 step budget once the goal has been reached (default: 900)
    #[serde(default = "default_step_budget")]
    pub step_budget: u32,

    /// Maximum cells per move (default: 3)
    #[serde(default = "default_max_move")]
    pub max_move: i32,

    /// Exploration tuning
    #[serde(default)]
    pub exploration: ExplorationConfig,
}

/// Cost/gain accounting and exploration randomness
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// Number of route computations compared by the cost/gain trigger (default: 6)
    #[serde(default = "default_route_window")]
    pub route_window: usize,

    /// Steps a one-cell shorter best path is worth (default: 30)
    #[serde(default = "default_gain_multiplier")]
    pub gain_multiplier: i64,

    /// Randomness while seeking the goal: 0 = off, 1 = less, 2 = more (default: 0)
    #[serde(default)]
    pub randomness: u8,

    /// Randomness stays active for `maze_dim * horizon` steps (default: 25)
    #[serde(default = "default_randomness_horizon")]
    pub randomness_horizon_per_dim: u32,

    /// Seed for the candidate sampler (default: 0)
    #[serde(default)]
    pub rng_seed: u64,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            route_window: default_route_window(),
            gain_multiplier: default_gain_multiplier(),
            randomness: 0,
            randomness_horizon_per_dim: default_randomness_horizon(),
            rng_seed: 0,
        }
    }
}

// Default value functions
fn default_step_budget() -> u32 {
    900
}
fn default_max_move() -> i32 {
    3
}
fn default_route_window() -> usize {
    6
}
fn default_gain_multiplier() -> i64 {
    30
}
fn default_randomness_horizon() -> u32 {
    25
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            step_budget: default_step_budget(),
            max_move: default_max_move(),
            exploration: ExplorationConfig::default(),
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NavigatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the navigator cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(1..=3).contains(&self.max_move) {
            return Err(NavError::Config(format!(
                "max_move must be between 1 and 3, got {}",
                self.max_move
            )));
        }
        if self.exploration.route_window < 2 {
            return Err(NavError::Config(format!(
                "route_window must be at least 2, got {}",
                self.exploration.route_window
            )));
        }
        if self.exploration.randomness > 2 {
            return Err(NavError::Config(format!(
                "randomness must be 0, 1 or 2, got {}",
                self.exploration.randomness
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.step_budget, 900);
        assert_eq!(config.max_move, 3);
        assert_eq!(config.exploration.route_window, 6);
        assert_eq!(config.exploration.gain_multiplier, 30);
        assert_eq!(config.exploration.randomness, 0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = NavigatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavigatorConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = NavigatorConfig::from_toml_str(
            r#"
            step_budget = 500

            [exploration]
            randomness = 1
            rng_seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.step_budget, 500);
        assert_eq!(config.max_move, 3);
        assert_eq!(config.exploration.randomness, 1);
        assert_eq!(config.exploration.rng_seed, 7);
        assert_eq!(config.exploration.route_window, 6);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = NavigatorConfig::from_toml_str("max_move = 5").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));

        let err = NavigatorConfig::from_toml_str("[exploration]\nrandomness = 3").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = NavigatorConfig::from_toml_str("step_budget = \"lots\"").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = NavigatorConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = NavigatorConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
