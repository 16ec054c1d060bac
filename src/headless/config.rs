//! Headless duel configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::difficulty::Difficulty;
use crate::kit::Kit;

/// One fighter's kit and skill tier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FighterSpec {
    pub kit: Kit,
    pub difficulty: Difficulty,
}

/// Configuration for a headless duel, loaded from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeadlessDuelConfig {
    pub fighter_a: FighterSpec,
    pub fighter_b: FighterSpec,
    /// Tick limit before the duel is called a draw.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,
    /// Seed for both fighters' decisions. Omit for entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Where to write the combat log. Omit for a timestamped default.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Optional RON tuning file overriding the built-in profiles.
    #[serde(default)]
    pub tuning_path: Option<PathBuf>,
}

fn default_max_ticks() -> u32 {
    2400
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl HeadlessDuelConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: HeadlessDuelConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ticks == 0 {
            return Err(ConfigError::Invalid(
                "max_ticks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let json = r#"{
            "fighter_a": { "kit": "Sword", "difficulty": "Hard" },
            "fighter_b": { "kit": "Bow", "difficulty": "Medium" }
        }"#;
        let config: HeadlessDuelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_ticks, 2400);
        assert!(config.random_seed.is_none());
        assert!(matches!(config.fighter_a.kit, Kit::Sword));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tick_limit_is_rejected() {
        let json = r#"{
            "fighter_a": { "kit": "Sword", "difficulty": "Hard" },
            "fighter_b": { "kit": "Sword", "difficulty": "Hard" },
            "max_ticks": 0
        }"#;
        let config: HeadlessDuelConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn full_config_round_trips() {
        let config = HeadlessDuelConfig {
            fighter_a: FighterSpec {
                kit: Kit::Mace,
                difficulty: Difficulty::Easy,
            },
            fighter_b: FighterSpec {
                kit: Kit::Shield,
                difficulty: Difficulty::Hard,
            },
            max_ticks: 1000,
            random_seed: Some(7),
            output_path: Some(PathBuf::from("out.json")),
            tuning_path: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: HeadlessDuelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_ticks, 1000);
        assert_eq!(back.random_seed, Some(7));
    }
}
