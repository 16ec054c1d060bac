//! Host-facing action protocol
//!
//! The decision engine never mutates the world. Each tick it emits a batch
//! of [`Action`] values into an [`ActionBuffer`]; the host (game server,
//! built-in simulation, replay tool) applies them however it sees fit.

use glam::Vec3;
use smallvec::SmallVec;

/// Which actor an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorId {
    /// The bot that produced the action.
    Bot,
    /// The bot's current opponent.
    Target,
}

/// How a damage action was delivered. Hosts can use this to pick armor
/// rules, block interactions, or log wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageKind {
    Melee,
    Smash,
    Blast,
    Arrow,
    Toxin,
}

impl DamageKind {
    pub fn label(&self) -> &'static str {
        match self {
            DamageKind::Melee => "melee",
            DamageKind::Smash => "smash",
            DamageKind::Blast => "blast",
            DamageKind::Arrow => "arrow",
            DamageKind::Toxin => "toxin",
        }
    }
}

/// Timed status effect applied to an actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusEffect {
    pub kind: EffectKind,
    pub duration_ticks: u32,
    /// Effect-specific strength (pool size for absorption, speed factor
    /// for slowness, and so on).
    pub magnitude: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Extra damage pool consumed before health.
    Absorption,
    Speed,
    Strength,
    Slowness,
}

/// Audio cue hint for the host. The engine never depends on these being
/// played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    MeleeHit,
    ShieldBreak,
    WindBurst,
    Blast,
    BowRelease,
    PotionShatter,
    RodPull,
    Drink,
}

/// Particle cue hint for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleCue {
    Crit,
    Impact,
    BlastBurst,
    Splash,
}

/// One world mutation or presentation hint requested by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Turn the bot to look at a point.
    Face { at: Vec3 },
    /// Play the arm-swing animation.
    SwingArm,
    /// Replace the bot's velocity outright.
    SetVelocity(Vec3),
    /// Replace only the horizontal components, keeping vertical motion.
    SetPlanarVelocity { x: f32, z: f32 },
    /// Add an upward impulse (jumps, crit hops).
    JumpImpulse { vy: f32 },
    /// Add a velocity delta to an actor (knockback, pulls).
    AddVelocity { who: ActorId, delta: Vec3 },
    /// Deal damage to an actor.
    Damage {
        who: ActorId,
        amount: f32,
        kind: DamageKind,
    },
    /// Restore health to the bot.
    Heal { amount: f32 },
    /// Apply a timed status effect.
    ApplyEffect { who: ActorId, effect: StatusEffect },
    /// Launch a projectile owned by the bot.
    SpawnProjectile {
        origin: Vec3,
        velocity: Vec3,
        damage: f32,
    },
    Sound { cue: SoundCue, at: Vec3 },
    Particles { cue: ParticleCue, at: Vec3, count: u32 },
}

/// Per-tick batch of actions. Inline capacity covers a busy tick without
/// allocating.
#[derive(Debug, Default)]
pub struct ActionBuffer {
    actions: SmallVec<[Action; 8]>,
}

impl ActionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.actions.drain(..)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drains_in_push_order() {
        let mut buf = ActionBuffer::new();
        buf.push(Action::SwingArm);
        buf.push(Action::Heal { amount: 4.0 });
        let drained: Vec<_> = buf.drain().collect();
        assert_eq!(drained[0], Action::SwingArm);
        assert_eq!(drained[1], Action::Heal { amount: 4.0 });
        assert!(buf.is_empty());
    }

    #[test]
    fn damage_kinds_have_distinct_labels() {
        let kinds = [
            DamageKind::Melee,
            DamageKind::Smash,
            DamageKind::Blast,
            DamageKind::Arrow,
            DamageKind::Toxin,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
