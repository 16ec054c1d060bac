//! Optional RON-based difficulty tuning
//!
//! The built-in profiles in [`crate::difficulty`] are the defaults; a RON
//! file can override any of them without recompiling. Only numeric profile
//! values can be tuned — behavior structure is fixed in code.
//!
//! ## Usage
//! ```ignore
//! let tuning = BotTuning::load(Path::new("config/tuning.ron"))?;
//! let controller = BotController::new(kit, tuning.profile(Difficulty::Hard).clone(), seed);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::difficulty::{Difficulty, DifficultyProfile};

/// One difficulty profile per tier, loadable from RON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotTuning {
    pub practice: DifficultyProfile,
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for BotTuning {
    fn default() -> Self {
        Self {
            practice: Difficulty::Practice.profile(),
            easy: Difficulty::Easy.profile(),
            medium: Difficulty::Medium.profile(),
            hard: Difficulty::Hard.profile(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

impl BotTuning {
    /// Profile for a given tier.
    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Practice => &self.practice,
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Load tuning from a RON file, validating every profile.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let contents = fs::read_to_string(path)?;
        let tuning: BotTuning = ron::from_str(&contents)?;
        tuning.validate()?;
        info!("loaded bot tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every profile for out-of-range values.
    pub fn validate(&self) -> Result<(), TuningError> {
        let tiers = [
            ("practice", &self.practice),
            ("easy", &self.easy),
            ("medium", &self.medium),
            ("hard", &self.hard),
        ];
        for (name, p) in tiers {
            let chances = [
                ("dodge_chance", p.dodge_chance),
                ("jump_crit_chance", p.jump_crit_chance),
                ("heavy_crit_chance", p.heavy_crit_chance),
                ("combo_burst_chance", p.combo_burst_chance),
                ("block_chance", p.block_chance),
                ("debuff_chance", p.debuff_chance),
            ];
            for (field, chance) in chances {
                if !(0.0..=1.0).contains(&chance) {
                    return Err(TuningError::Invalid(format!(
                        "{name}.{field} must be in 0.0..=1.0, got {chance}"
                    )));
                }
            }
            if p.reaction_fail_pct > 100 {
                return Err(TuningError::Invalid(format!(
                    "{name}.reaction_fail_pct must be at most 100, got {}",
                    p.reaction_fail_pct
                )));
            }
            if p.movement_speed <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name}.movement_speed must be positive, got {}",
                    p.movement_speed
                )));
            }
            if p.max_health <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name}.max_health must be positive, got {}",
                    p.max_health
                )));
            }
            if !(0.0..=1.0).contains(&p.heal_threshold) {
                return Err(TuningError::Invalid(format!(
                    "{name}.heal_threshold must be in 0.0..=1.0, got {}",
                    p.heal_threshold
                )));
            }
        }
        Ok(())
    }
}
