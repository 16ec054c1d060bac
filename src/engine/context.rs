//! Snapshot and working-state types handed to kit routines

use glam::Vec3;

use crate::combat::CombatLog;
use crate::difficulty::DifficultyProfile;
use crate::engine::actions::ActionBuffer;
use crate::engine::cooldowns::CooldownRegistry;
use crate::kit::Kit;
use crate::rng::BotRng;

/// Host-provided snapshot of one actor at the start of a tick.
///
/// This is the only view of the world the engine ever gets. Hosts fill one
/// for the bot and one for its target each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub on_ground: bool,
    /// Whether the actor currently holds a raised block.
    pub blocking: bool,
    /// Whether the actor's attack animation is playing this tick.
    pub swinging: bool,
    /// Number of active status effects; the potion kit skips re-buffing
    /// while this is nonzero.
    pub active_effects: u8,
    /// Eye offset above the feet, used for aim points.
    pub eye_height: f32,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            health: 20.0,
            max_health: 20.0,
            on_ground: true,
            blocking: false,
            swinging: false,
            active_effects: 0,
            eye_height: 1.62,
        }
    }
}

impl ActorState {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Health as a fraction of maximum, treating a non-positive maximum as
    /// full health.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            1.0
        } else {
            self.health / self.max_health
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.eye_height, 0.0)
    }
}

/// Mutable per-bot combat state that persists across ticks.
#[derive(Clone, Debug)]
pub struct TacticalState {
    /// Current strafe direction, `1.0` or `-1.0`.
    pub strafe_dir: f32,
    /// Index into the strafe pattern table.
    pub pattern: usize,
    /// Position within the current pattern.
    pub pattern_phase: usize,
    /// Ticks since the pattern last advanced.
    pub pattern_ticks: u32,
    /// Whether the retreat hysteresis is currently engaged.
    pub retreating: bool,
    /// Whether the bot holds a raised block (shield kit).
    pub blocking: bool,
    /// Consecutive hits in the current combo.
    pub combo: u32,
    /// Ticks since the bot last landed a hit.
    pub ticks_since_hit: u32,
    pub hits_landed: u32,
    pub hits_taken: u32,
    /// Set by [`notify_hurt`](crate::engine::controller::BotController::notify_hurt),
    /// consumed by the dodge check.
    pub was_hurt: bool,
    /// Target position from the previous tick, for velocity estimation.
    pub last_target_pos: Option<Vec3>,
    /// Estimated target velocity in units per tick.
    pub target_velocity: Vec3,
    /// Target health from the previous tick, for hit confirmation.
    pub last_target_health: Option<f32>,
}

impl Default for TacticalState {
    fn default() -> Self {
        Self {
            strafe_dir: 1.0,
            pattern: 0,
            pattern_phase: 0,
            pattern_ticks: 0,
            retreating: false,
            blocking: false,
            combo: 0,
            ticks_since_hit: 0,
            hits_landed: 0,
            hits_taken: 0,
            was_hurt: false,
            last_target_pos: None,
            target_velocity: Vec3::ZERO,
            last_target_health: None,
        }
    }
}

/// Everything a kit routine may read or touch during its turn in the tick.
pub struct KitContext<'a> {
    pub kit: Kit,
    /// Display label for log entries.
    pub label: &'a str,
    pub bot: &'a ActorState,
    pub target: &'a ActorState,
    /// Horizontal-plane-inclusive distance between bot and target.
    pub distance: f32,
    pub profile: &'a DifficultyProfile,
    pub cooldowns: &'a mut CooldownRegistry,
    pub tactics: &'a mut TacticalState,
    pub rng: &'a mut BotRng,
    pub log: &'a mut CombatLog,
    pub actions: &'a mut ActionBuffer,
}
