//! Combat Constants
//!
//! Centralized location for magic numbers used throughout the decision engine.
//! This makes it easier to tune behavior and ensures consistency.
//!
//! All distances are in world units, all durations in simulation ticks
//! (one tick = 50 ms, 20 ticks per second).

// ============================================================================
// Timing
// ============================================================================

/// Simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;

// ============================================================================
// Combat Ranges
// ============================================================================

/// Standard melee reach. Sword-class kits swing within this distance.
pub const MELEE_RANGE: f32 = 3.5;

/// Shorter "panic" melee distance used by ranged/special kits when cornered.
pub const PANIC_MELEE_RANGE: f32 = 3.0;

/// Maximum distance at which an incoming hit can still be dodged.
pub const DODGE_RANGE: f32 = 5.0;

// ============================================================================
// Movement Bands
// ============================================================================

/// A retreating bot only backpedals while the opponent is closer than this.
pub const RETREAT_BAND_MAX: f32 = 10.0;

/// Lower edge of the approach band. Closer than this, circling takes over.
pub const APPROACH_BAND_MIN: f32 = 3.0;

/// Upper edge of the approach band. Beyond this the engine issues no
/// steering; long-distance pursuit belongs to the host's navigation.
pub const APPROACH_BAND_MAX: f32 = 12.0;

/// Lower edge of the circle-strafe band.
pub const CIRCLE_BAND_MIN: f32 = 1.5;

/// Upper edge of the circle-strafe band.
pub const CIRCLE_BAND_MAX: f32 = 3.0;

/// Speed factor applied while backpedaling.
pub const RETREAT_SPEED_FACTOR: f32 = 0.85;

/// Fraction of retreat speed spent on lateral movement.
pub const RETREAT_STRAFE_FACTOR: f32 = 0.4;

/// Speed factor applied while circle-strafing.
pub const CIRCLE_SPEED_FACTOR: f32 = 0.65;

/// Small inward drift while circling, so the bot keeps pressure on.
pub const CIRCLE_APPROACH_FACTOR: f32 = 0.2;

/// Magnitude of per-tick positional noise added during approach.
pub const MOVE_NOISE: f32 = 0.1;

/// Ticks between strafe-direction re-samples.
pub const STRAFE_RESAMPLE_TICKS: u32 = 8;

/// Per-resample probability of abandoning the current strafe pattern.
pub const PATTERN_SWITCH_CHANCE: f64 = 0.05;

// ============================================================================
// Health Thresholds
// ============================================================================

/// Health fraction below which the bot enters its retreat state.
/// Tunable; the exit threshold is intentionally higher to form a
/// hysteresis band and avoid flickering in and out of retreat.
pub const RETREAT_ENTER_HP: f32 = 0.30;

/// Health fraction above which the bot leaves its retreat state.
pub const RETREAT_EXIT_HP: f32 = 0.50;

/// Minimum ticks between retreat-state entries.
pub const RETREAT_REENTRY_TICKS: u32 = 80;

// ============================================================================
// Reactive Responses
// ============================================================================

/// Cooldown after any dodge evaluation, successful or not.
pub const DODGE_COOLDOWN_TICKS: u32 = 15;

/// Lateral speed of a dodge burst.
pub const DODGE_STRAFE_SPEED: f32 = 0.4;

/// Backward component of a dodge burst.
pub const DODGE_BACK_SPEED: f32 = 0.2;

/// Small upward hop applied with every successful dodge.
pub const DODGE_HOP: f32 = 0.1;

/// Duration of the damage-absorption buff granted by a heal.
pub const ABSORPTION_TICKS: u32 = 120 * TICKS_PER_SECOND;

/// Damage soaked by the absorption buff before it expires.
pub const ABSORPTION_POOL: f32 = 4.0;

// ============================================================================
// Melee
// ============================================================================

/// Vertical launch speed of a crit jump.
pub const JUMP_VELOCITY: f32 = 0.42;

/// A strike lands as a crit while the bot falls faster than this.
pub const FALLING_CRIT_THRESHOLD: f32 = -0.08;

/// Damage multiplier for falling crits.
pub const CRIT_MULTIPLIER: f32 = 1.5;

/// Ticks without a landed hit before the combo counter resets.
pub const COMBO_IDLE_TICKS: u32 = 30;

// ============================================================================
// Projectiles
// ============================================================================

/// Arrow muzzle speed in units per tick.
pub const ARROW_SPEED: f32 = 2.8;

/// Base arrow damage before the difficulty multiplier.
pub const ARROW_DAMAGE: f32 = 6.0;

/// Fixed gravity-compensating lift added to every shot.
pub const ARROW_ARC_BASE: f32 = 0.1;

/// Additional lift per unit of distance to the target.
pub const ARROW_ARC_PER_DISTANCE: f32 = 0.008;

/// Fraction of the target's eye height a shot aims for.
pub const AIM_HEIGHT_FRACTION: f32 = 0.65;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_bands_are_ordered() {
        assert!(CIRCLE_BAND_MIN < CIRCLE_BAND_MAX);
        assert!(CIRCLE_BAND_MAX <= APPROACH_BAND_MIN);
        assert!(APPROACH_BAND_MIN < APPROACH_BAND_MAX);
        assert!(RETREAT_BAND_MAX <= APPROACH_BAND_MAX);
    }

    #[test]
    fn retreat_thresholds_form_a_hysteresis_band() {
        assert!(RETREAT_ENTER_HP < RETREAT_EXIT_HP);
        assert!(RETREAT_ENTER_HP > 0.0 && RETREAT_EXIT_HP < 1.0);
    }

    #[test]
    fn melee_ranges_are_positive() {
        assert!(PANIC_MELEE_RANGE > 0.0);
        assert!(MELEE_RANGE >= PANIC_MELEE_RANGE);
        assert!(DODGE_RANGE > MELEE_RANGE);
    }
}
