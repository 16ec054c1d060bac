//! Predictive projectile aiming
//!
//! Shots lead the target by its estimated velocity, lift for gravity, and
//! then get perturbed by a difficulty-scaled angular error so lower tiers
//! miss moving targets convincingly.

use glam::{Quat, Vec3};

use crate::constants::{
    AIM_HEIGHT_FRACTION, ARROW_ARC_BASE, ARROW_ARC_PER_DISTANCE, ARROW_SPEED,
};
use crate::difficulty::DifficultyProfile;
use crate::engine::context::ActorState;
use crate::engine::horizontal;
use crate::rng::BotRng;

/// Where the target will be when a projectile fired now arrives, scaled by
/// how much the profile trusts its own prediction.
pub fn predict_point(
    target: &ActorState,
    velocity_estimate: Vec3,
    distance: f32,
    confidence: f32,
) -> Vec3 {
    let flight_ticks = distance / ARROW_SPEED;
    target.position + horizontal(velocity_estimate) * flight_ticks * confidence
}

/// Full launch velocity for a projectile: predicted point, eye-height lift,
/// gravity arc, then angular error.
pub fn aim_projectile(
    origin: Vec3,
    target: &ActorState,
    velocity_estimate: Vec3,
    profile: &DifficultyProfile,
    rng: &mut BotRng,
) -> Vec3 {
    let distance = origin.distance(target.position);
    let mut aim_point = predict_point(
        target,
        velocity_estimate,
        distance,
        profile.prediction_confidence,
    );
    aim_point.y += target.eye_height * AIM_HEIGHT_FRACTION;

    let mut dir = (aim_point - origin).normalize_or_zero();
    dir.y += ARROW_ARC_BASE + distance * ARROW_ARC_PER_DISTANCE;
    dir = dir.normalize_or_zero();
    dir = perturb(dir, profile.aim_inaccuracy, rng);
    dir * ARROW_SPEED
}

/// Rotate a direction by a random yaw and pitch, each within plus or minus
/// `degrees`.
fn perturb(dir: Vec3, degrees: f32, rng: &mut BotRng) -> Vec3 {
    if degrees <= 0.0 {
        return dir;
    }
    let yaw = rng.range_f32(-degrees, degrees).to_radians();
    let pitch = rng.range_f32(-degrees, degrees).to_radians();
    let rotation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
    rotation * dir
}
