//! Difficulty tiers and their numeric profiles
//!
//! Every number the engine scales by skill lives in [`DifficultyProfile`].
//! A profile is an immutable value handed to each controller at creation;
//! nothing in the engine reaches for global tuning state. Higher tiers are
//! strictly more aggressive and more accurate (see the monotonicity tests).

use serde::{Deserialize, Serialize};

/// Named skill level selecting a [`DifficultyProfile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Training dummy mode: deals no damage, barely reacts.
    Practice,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Practice,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Practice => "Practice",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Built-in numeric profile for this tier.
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Practice => practice(),
            Difficulty::Easy => easy(),
            Difficulty::Medium => medium(),
            Difficulty::Hard => hard(),
        }
    }
}

/// All difficulty-scaled numbers consumed by the decision engine.
///
/// Durations are in ticks, distances in world units, chances in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Base steering speed in units per tick.
    pub movement_speed: f32,
    /// Multiplier applied to every damage number the bot produces.
    pub damage_multiplier: f32,
    /// Health the host should spawn the bot with.
    pub max_health: f32,

    /// Percent chance per tick that the bot fumbles and stalls.
    pub reaction_fail_pct: u32,
    /// Upper bound on the stall; the actual stall is rolled in `1..=n/2`.
    pub reaction_stall_ticks: u32,

    /// Chance to dodge when struck inside dodge range.
    pub dodge_chance: f64,
    /// Chance to jump for a crit before a standard melee strike.
    pub jump_crit_chance: f64,
    /// Chance to jump for a crit with the heavy (axe) kit.
    pub heavy_crit_chance: f64,
    /// Chance to convert an active combo into a bonus knockback impulse.
    pub combo_burst_chance: f64,
    /// Horizontal strength of that bonus knockback.
    pub combo_knockback: f32,

    /// Heal triggers below this health fraction; zero disables healing.
    pub heal_threshold: f32,
    /// Health restored per heal.
    pub heal_amount: f32,
    pub heal_cooldown: u32,

    /// Chance to raise a block inside block range (doubled against a swing).
    pub block_chance: f64,
    pub block_cooldown: u32,

    /// Vertical speed of the jump-smash launch.
    pub launch_power: f32,
    pub launch_cooldown: u32,

    /// Ticks of bow draw before a shot releases.
    pub draw_ticks: u32,
    pub shot_cooldown: u32,

    pub blast_cooldown: u32,

    /// Horizontal strength of the rod pull.
    pub pull_strength: f32,

    pub throw_cooldown: u32,
    /// Chance a thrown toxin also applies a slow.
    pub debuff_chance: f64,
    /// Duration of that slow.
    pub debuff_ticks: u32,

    /// How much of the target's estimated displacement to lead by.
    pub prediction_confidence: f32,
    /// Angular error, in degrees, applied to every released projectile.
    pub aim_inaccuracy: f32,

    /// Fraction of approach speed spent strafing sideways.
    pub strafe_fraction: f32,
}

fn practice() -> DifficultyProfile {
    DifficultyProfile {
        movement_speed: 0.20,
        damage_multiplier: 0.0,
        max_health: 50.0,
        reaction_fail_pct: 70,
        reaction_stall_ticks: 60,
        dodge_chance: 0.0,
        jump_crit_chance: 0.05,
        heavy_crit_chance: 0.10,
        combo_burst_chance: 0.0,
        combo_knockback: 0.20,
        heal_threshold: 0.0,
        heal_amount: 2.0,
        heal_cooldown: 400,
        block_chance: 0.05,
        block_cooldown: 80,
        launch_power: 0.5,
        launch_cooldown: 200,
        draw_ticks: 40,
        shot_cooldown: 60,
        blast_cooldown: 80,
        pull_strength: 0.20,
        throw_cooldown: 80,
        debuff_chance: 0.0,
        debuff_ticks: 20,
        prediction_confidence: 0.10,
        aim_inaccuracy: 12.0,
        strafe_fraction: 0.10,
    }
}

fn easy() -> DifficultyProfile {
    DifficultyProfile {
        movement_speed: 0.25,
        damage_multiplier: 0.5,
        max_health: 10.0,
        reaction_fail_pct: 35,
        reaction_stall_ticks: 50,
        dodge_chance: 0.10,
        jump_crit_chance: 0.20,
        heavy_crit_chance: 0.35,
        combo_burst_chance: 0.15,
        combo_knockback: 0.35,
        heal_threshold: 0.25,
        heal_amount: 4.0,
        heal_cooldown: 200,
        block_chance: 0.15,
        block_cooldown: 50,
        launch_power: 0.8,
        launch_cooldown: 120,
        draw_ticks: 28,
        shot_cooldown: 35,
        blast_cooldown: 55,
        pull_strength: 0.35,
        throw_cooldown: 50,
        debuff_chance: 0.20,
        debuff_ticks: 60,
        prediction_confidence: 0.40,
        aim_inaccuracy: 7.0,
        strafe_fraction: 0.25,
    }
}

fn medium() -> DifficultyProfile {
    DifficultyProfile {
        movement_speed: 0.30,
        damage_multiplier: 0.75,
        max_health: 20.0,
        reaction_fail_pct: 12,
        reaction_stall_ticks: 30,
        dodge_chance: 0.25,
        jump_crit_chance: 0.40,
        heavy_crit_chance: 0.55,
        combo_burst_chance: 0.35,
        combo_knockback: 0.45,
        heal_threshold: 0.35,
        heal_amount: 6.0,
        heal_cooldown: 140,
        block_chance: 0.30,
        block_cooldown: 35,
        launch_power: 1.0,
        launch_cooldown: 90,
        draw_ticks: 20,
        shot_cooldown: 22,
        blast_cooldown: 35,
        pull_strength: 0.50,
        throw_cooldown: 35,
        debuff_chance: 0.35,
        debuff_ticks: 100,
        prediction_confidence: 0.75,
        aim_inaccuracy: 3.5,
        strafe_fraction: 0.40,
    }
}

fn hard() -> DifficultyProfile {
    DifficultyProfile {
        movement_speed: 0.35,
        damage_multiplier: 1.0,
        max_health: 30.0,
        reaction_fail_pct: 3,
        reaction_stall_ticks: 15,
        dodge_chance: 0.45,
        jump_crit_chance: 0.60,
        heavy_crit_chance: 0.75,
        combo_burst_chance: 0.55,
        combo_knockback: 0.55,
        heal_threshold: 0.50,
        heal_amount: 8.0,
        heal_cooldown: 80,
        block_chance: 0.50,
        block_cooldown: 25,
        launch_power: 1.3,
        launch_cooldown: 60,
        draw_ticks: 14,
        shot_cooldown: 12,
        blast_cooldown: 20,
        pull_strength: 0.65,
        throw_cooldown: 22,
        debuff_chance: 0.50,
        debuff_ticks: 160,
        prediction_confidence: 1.0,
        aim_inaccuracy: 1.0,
        strafe_fraction: 0.55,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each adjacent tier pair must be at least as capable as the one below.
    #[test]
    fn profiles_are_monotone_across_tiers() {
        for pair in Difficulty::ALL.windows(2) {
            let (lo, hi) = (pair[0].profile(), pair[1].profile());
            assert!(hi.damage_multiplier >= lo.damage_multiplier);
            assert!(hi.movement_speed >= lo.movement_speed);
            assert!(hi.dodge_chance >= lo.dodge_chance);
            assert!(hi.jump_crit_chance >= lo.jump_crit_chance);
            assert!(hi.heavy_crit_chance >= lo.heavy_crit_chance);
            assert!(hi.block_chance >= lo.block_chance);
            assert!(hi.prediction_confidence >= lo.prediction_confidence);
            assert!(hi.pull_strength >= lo.pull_strength);
            // Faster reactions and tighter aim as skill rises.
            assert!(hi.reaction_fail_pct <= lo.reaction_fail_pct);
            assert!(hi.reaction_stall_ticks <= lo.reaction_stall_ticks);
            assert!(hi.aim_inaccuracy <= lo.aim_inaccuracy);
            assert!(hi.draw_ticks <= lo.draw_ticks);
            assert!(hi.shot_cooldown <= lo.shot_cooldown);
            assert!(hi.heal_cooldown <= lo.heal_cooldown);
        }
    }

    #[test]
    fn practice_bots_are_harmless() {
        let profile = Difficulty::Practice.profile();
        assert_eq!(profile.damage_multiplier, 0.0);
        assert_eq!(profile.heal_threshold, 0.0);
        assert_eq!(profile.dodge_chance, 0.0);
    }

    #[test]
    fn chances_stay_inside_unit_interval() {
        for tier in Difficulty::ALL {
            let p = tier.profile();
            for chance in [
                p.dodge_chance,
                p.jump_crit_chance,
                p.heavy_crit_chance,
                p.combo_burst_chance,
                p.block_chance,
                p.debuff_chance,
            ] {
                assert!((0.0..=1.0).contains(&chance));
            }
            assert!(p.reaction_fail_pct <= 100);
        }
    }
}
