//! Strafe patterns and movement-band steering
//!
//! Movement is a function of distance: retreat when wounded and close,
//! approach from mid range, circle when on top of the target. Inside the
//! approach and circle bands the bot weaves sideways following one of the
//! strafe patterns below.

use glam::Vec3;

use crate::constants::{
    APPROACH_BAND_MAX, APPROACH_BAND_MIN, CIRCLE_APPROACH_FACTOR, CIRCLE_BAND_MAX,
    CIRCLE_BAND_MIN, CIRCLE_SPEED_FACTOR, MOVE_NOISE, PATTERN_SWITCH_CHANCE,
    RETREAT_BAND_MAX, RETREAT_SPEED_FACTOR, RETREAT_STRAFE_FACTOR, STRAFE_RESAMPLE_TICKS,
};
use crate::difficulty::DifficultyProfile;
use crate::engine::context::{ActorState, TacticalState};
use crate::engine::horizontal;
use crate::rng::BotRng;

/// Strafe direction sequences. Each entry is a direction multiplier the
/// pattern steps through; mixing lengths keeps the rhythm hard to read.
pub const STRAFE_PATTERNS: &[&[f32]] = &[
    &[1.0, 1.0, -1.0, -1.0],
    &[1.0, -1.0, 1.0, -1.0],
    &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0],
    &[1.0, -1.0, -1.0, 1.0, 1.0],
    &[-1.0, 1.0, 1.0, -1.0],
];

/// Distance bands that select a steering behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementBand {
    Retreat,
    Approach,
    Circle,
}

/// Pick the band for this tick, if any. Retreat takes priority while the
/// hysteresis is engaged; outside every band the bot holds position.
pub fn band_for(distance: f32, retreating: bool) -> Option<MovementBand> {
    if retreating && distance < RETREAT_BAND_MAX {
        Some(MovementBand::Retreat)
    } else if (APPROACH_BAND_MIN..APPROACH_BAND_MAX).contains(&distance) {
        Some(MovementBand::Approach)
    } else if (CIRCLE_BAND_MIN..CIRCLE_BAND_MAX).contains(&distance) {
        Some(MovementBand::Circle)
    } else {
        None
    }
}

/// Advance the strafe pattern. Every few ticks the pattern steps forward
/// and occasionally swaps to a different pattern entirely.
pub fn update_strafe(tactics: &mut TacticalState, rng: &mut BotRng) {
    tactics.pattern_ticks += 1;
    if tactics.pattern_ticks < STRAFE_RESAMPLE_TICKS {
        return;
    }
    tactics.pattern_ticks = 0;
    if rng.chance(PATTERN_SWITCH_CHANCE) {
        tactics.pattern = rng.index(STRAFE_PATTERNS.len());
        tactics.pattern_phase = 0;
    } else {
        tactics.pattern_phase = (tactics.pattern_phase + 1) % STRAFE_PATTERNS[tactics.pattern].len();
    }
    tactics.strafe_dir = STRAFE_PATTERNS[tactics.pattern][tactics.pattern_phase];
}

/// Compute this tick's horizontal steering velocity, or `None` when the
/// bot should hold position.
pub fn steering(
    bot: &ActorState,
    target: &ActorState,
    distance: f32,
    profile: &DifficultyProfile,
    tactics: &TacticalState,
    rng: &mut BotRng,
) -> Option<Vec3> {
    let band = band_for(distance, tactics.retreating)?;
    let to_target = horizontal(target.position - bot.position).normalize_or_zero();
    // Sideways unit vector, flipped by the current strafe direction.
    let side = Vec3::new(-to_target.z, 0.0, to_target.x) * tactics.strafe_dir;
    let speed = profile.movement_speed;

    let velocity = match band {
        MovementBand::Retreat => {
            (-to_target + side * RETREAT_STRAFE_FACTOR) * (speed * RETREAT_SPEED_FACTOR)
        }
        MovementBand::Approach => {
            let noise = Vec3::new(
                rng.range_f32(-MOVE_NOISE, MOVE_NOISE),
                0.0,
                rng.range_f32(-MOVE_NOISE, MOVE_NOISE),
            );
            to_target * speed + side * (speed * profile.strafe_fraction) + noise
        }
        MovementBand::Circle => {
            (side + to_target * CIRCLE_APPROACH_FACTOR) * (speed * CIRCLE_SPEED_FACTOR)
        }
    };
    Some(velocity)
}
