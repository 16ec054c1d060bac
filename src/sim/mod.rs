//! Minimal built-in duel host
//!
//! A two-actor world with just enough physics to resolve engine actions:
//! gravity, ground friction, projectile flight, status effects, and an
//! absorption pool. The headless runner drives it; it also doubles as a
//! reference for wiring the engine into a real game host.

use glam::Vec3;
use smallvec::SmallVec;

use crate::engine::actions::{Action, ActorId, DamageKind, EffectKind, StatusEffect};
use crate::engine::context::ActorState;

const GRAVITY: f32 = 0.08;
const GROUND_Y: f32 = 0.0;
const GROUND_FRICTION: f32 = 0.55;
const PROJECTILE_GRAVITY: f32 = 0.05;
const PROJECTILE_HIT_RADIUS: f32 = 1.5;
const PROJECTILE_MAX_AGE: u32 = 200;
/// Raised blocks halve incoming melee damage.
const BLOCK_MELEE_FACTOR: f32 = 0.5;

/// One of the two duel slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveEffect {
    effect: StatusEffect,
    remaining: u32,
}

/// One simulated fighter.
#[derive(Clone, Debug)]
pub struct SimActor {
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub on_ground: bool,
    pub blocking: bool,
    swing_ticks: u32,
    effects: SmallVec<[ActiveEffect; 4]>,
    /// Absorption pool drained before health.
    absorption: f32,
    pub damage_dealt: f32,
    pub damage_taken: f32,
}

impl SimActor {
    pub fn new(position: Vec3, max_health: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            health: max_health,
            max_health,
            on_ground: true,
            blocking: false,
            swing_ticks: 0,
            effects: SmallVec::new(),
            absorption: 0.0,
            damage_dealt: 0.0,
            damage_taken: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Engine-facing snapshot of this actor.
    pub fn state(&self) -> ActorState {
        ActorState {
            position: self.position,
            velocity: self.velocity,
            health: self.health,
            max_health: self.max_health,
            on_ground: self.on_ground,
            blocking: self.blocking,
            swinging: self.swing_ticks > 0,
            active_effects: self.effects.len() as u8,
            eye_height: 1.62,
        }
    }

    fn slow_factor(&self) -> f32 {
        self.effects
            .iter()
            .filter(|e| e.effect.kind == EffectKind::Slowness)
            .map(|e| e.effect.magnitude)
            .fold(1.0, f32::min)
    }

    fn apply_damage(&mut self, mut amount: f32, kind: DamageKind) -> f32 {
        if self.blocking && kind == DamageKind::Melee {
            amount *= BLOCK_MELEE_FACTOR;
        }
        // Absorption soaks first.
        if self.absorption > 0.0 {
            let soaked = amount.min(self.absorption);
            self.absorption -= soaked;
            amount -= soaked;
        }
        self.health = (self.health - amount).max(0.0);
        self.damage_taken += amount;
        amount
    }

    fn apply_effect(&mut self, effect: StatusEffect) {
        if effect.kind == EffectKind::Absorption {
            self.absorption = self.absorption.max(effect.magnitude);
        }
        self.effects.push(ActiveEffect {
            effect,
            remaining: effect.duration_ticks,
        });
    }
}

/// An in-flight projectile.
#[derive(Clone, Debug)]
pub struct SimProjectile {
    pub position: Vec3,
    pub velocity: Vec3,
    pub damage: f32,
    pub owner: Side,
    age: u32,
}

/// Damage and projectile-hit totals observed during one apply or step.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickReport {
    /// Damage each side received.
    pub damage_to: [f32; 2],
    /// Projectile hits each side received.
    pub projectile_hits: [u8; 2],
}

impl TickReport {
    pub fn merge(&mut self, other: TickReport) {
        for i in 0..2 {
            self.damage_to[i] += other.damage_to[i];
            self.projectile_hits[i] += other.projectile_hits[i];
        }
    }
}

/// The duel world.
pub struct SimWorld {
    pub actors: [SimActor; 2],
    pub projectiles: Vec<SimProjectile>,
    pub tick: u32,
}

impl SimWorld {
    pub fn new(actor_a: SimActor, actor_b: SimActor) -> Self {
        Self {
            actors: [actor_a, actor_b],
            projectiles: Vec::new(),
            tick: 0,
        }
    }

    pub fn actor(&self, side: Side) -> &SimActor {
        &self.actors[side.index()]
    }

    pub fn actor_mut(&mut self, side: Side) -> &mut SimActor {
        &mut self.actors[side.index()]
    }

    fn resolve(&self, acting: Side, who: ActorId) -> Side {
        match who {
            ActorId::Bot => acting,
            ActorId::Target => acting.other(),
        }
    }

    /// Apply one side's action batch to the world.
    pub fn apply(&mut self, side: Side, actions: impl IntoIterator<Item = Action>) -> TickReport {
        let mut report = TickReport::default();
        for action in actions {
            match action {
                Action::SwingArm => {
                    self.actor_mut(side).swing_ticks = 3;
                }
                Action::SetVelocity(v) => {
                    let slow = self.actor(side).slow_factor();
                    self.actor_mut(side).velocity = v * slow;
                }
                Action::SetPlanarVelocity { x, z } => {
                    let slow = self.actor(side).slow_factor();
                    let actor = self.actor_mut(side);
                    actor.velocity.x = x * slow;
                    actor.velocity.z = z * slow;
                }
                Action::JumpImpulse { vy } => {
                    let actor = self.actor_mut(side);
                    if actor.on_ground {
                        actor.velocity.y = vy;
                        actor.on_ground = false;
                    }
                }
                Action::AddVelocity { who, delta } => {
                    let target = self.resolve(side, who);
                    self.actor_mut(target).velocity += delta;
                }
                Action::Damage { who, amount, kind } => {
                    let target = self.resolve(side, who);
                    let dealt = self.actor_mut(target).apply_damage(amount, kind);
                    if target != side {
                        self.actor_mut(side).damage_dealt += dealt;
                    }
                    report.damage_to[target.index()] += dealt;
                }
                Action::Heal { amount } => {
                    let actor = self.actor_mut(side);
                    actor.health = (actor.health + amount).min(actor.max_health);
                }
                Action::ApplyEffect { who, effect } => {
                    let target = self.resolve(side, who);
                    self.actor_mut(target).apply_effect(effect);
                }
                Action::SpawnProjectile { origin, velocity, damage } => {
                    self.projectiles.push(SimProjectile {
                        position: origin,
                        velocity,
                        damage,
                        owner: side,
                        age: 0,
                    });
                }
                // Presentation-only hints; the headless host ignores them.
                Action::Face { .. } | Action::Sound { .. } | Action::Particles { .. } => {}
            }
        }
        report
    }

    /// Advance physics by one tick.
    pub fn step(&mut self) -> TickReport {
        let mut report = TickReport::default();
        self.tick += 1;

        for actor in &mut self.actors {
            actor.velocity.y -= GRAVITY;
            actor.position += actor.velocity;
            if actor.position.y <= GROUND_Y {
                actor.position.y = GROUND_Y;
                actor.velocity.y = 0.0;
                actor.on_ground = true;
            } else {
                actor.on_ground = false;
            }
            if actor.on_ground {
                actor.velocity.x *= GROUND_FRICTION;
                actor.velocity.z *= GROUND_FRICTION;
            }
            actor.swing_ticks = actor.swing_ticks.saturating_sub(1);
            actor.effects.retain(|e| {
                e.remaining = e.remaining.saturating_sub(1);
                e.remaining > 0
            });
        }

        let mut hits = Vec::new();
        for (i, projectile) in self.projectiles.iter_mut().enumerate() {
            projectile.velocity.y -= PROJECTILE_GRAVITY;
            projectile.position += projectile.velocity;
            projectile.age += 1;
            let victim = projectile.owner.other();
            let victim_center =
                self.actors[victim.index()].position + Vec3::new(0.0, 0.9, 0.0);
            if projectile.position.distance(victim_center) < PROJECTILE_HIT_RADIUS {
                hits.push((i, victim, projectile.damage));
            }
        }
        for &(_, victim, damage) in hits.iter().rev() {
            let dealt = self.actors[victim.index()].apply_damage(damage, DamageKind::Arrow);
            self.actors[victim.other().index()].damage_dealt += dealt;
            report.damage_to[victim.index()] += dealt;
            report.projectile_hits[victim.index()] += 1;
        }
        let mut hit_indices: Vec<usize> = hits.iter().map(|&(i, _, _)| i).collect();
        hit_indices.sort_unstable();
        for i in hit_indices.into_iter().rev() {
            self.projectiles.swap_remove(i);
        }
        self.projectiles
            .retain(|p| p.age <= PROJECTILE_MAX_AGE && p.position.y > GROUND_Y - 1.0);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(distance: f32) -> SimWorld {
        SimWorld::new(
            SimActor::new(Vec3::ZERO, 20.0),
            SimActor::new(Vec3::new(distance, 0.0, 0.0), 20.0),
        )
    }

    #[test]
    fn damage_routes_to_the_right_actor() {
        let mut w = world(3.0);
        w.apply(
            Side::A,
            [Action::Damage {
                who: ActorId::Target,
                amount: 5.0,
                kind: DamageKind::Melee,
            }],
        );
        assert_eq!(w.actor(Side::B).health, 15.0);
        assert_eq!(w.actor(Side::A).health, 20.0);
        assert_eq!(w.actor(Side::A).damage_dealt, 5.0);
    }

    #[test]
    fn self_damage_is_not_counted_as_dealt() {
        let mut w = world(3.0);
        w.apply(
            Side::A,
            [Action::Damage {
                who: ActorId::Bot,
                amount: 2.0,
                kind: DamageKind::Blast,
            }],
        );
        assert_eq!(w.actor(Side::A).health, 18.0);
        assert_eq!(w.actor(Side::A).damage_dealt, 0.0);
    }

    #[test]
    fn blocking_halves_melee_only() {
        let mut w = world(3.0);
        w.actor_mut(Side::B).blocking = true;
        w.apply(
            Side::A,
            [
                Action::Damage {
                    who: ActorId::Target,
                    amount: 8.0,
                    kind: DamageKind::Melee,
                },
                Action::Damage {
                    who: ActorId::Target,
                    amount: 8.0,
                    kind: DamageKind::Blast,
                },
            ],
        );
        assert_eq!(w.actor(Side::B).health, 20.0 - 4.0 - 8.0);
    }

    #[test]
    fn absorption_soaks_before_health() {
        let mut w = world(3.0);
        w.apply(
            Side::B,
            [Action::ApplyEffect {
                who: ActorId::Bot,
                effect: StatusEffect {
                    kind: EffectKind::Absorption,
                    duration_ticks: 100,
                    magnitude: 4.0,
                },
            }],
        );
        w.apply(
            Side::A,
            [Action::Damage {
                who: ActorId::Target,
                amount: 6.0,
                kind: DamageKind::Blast,
            }],
        );
        assert_eq!(w.actor(Side::B).health, 18.0);
    }

    #[test]
    fn slowness_scales_set_velocities() {
        let mut w = world(3.0);
        w.apply(
            Side::B,
            [Action::ApplyEffect {
                who: ActorId::Target,
                effect: StatusEffect {
                    kind: EffectKind::Slowness,
                    duration_ticks: 100,
                    magnitude: 0.5,
                },
            }],
        );
        w.apply(
            Side::A,
            [Action::SetPlanarVelocity { x: 0.4, z: 0.0 }],
        );
        assert_eq!(w.actor(Side::A).velocity.x, 0.2);
    }

    #[test]
    fn gravity_returns_a_jumper_to_the_ground() {
        let mut w = world(3.0);
        w.apply(Side::A, [Action::JumpImpulse { vy: 0.42 }]);
        assert!(!w.actor(Side::A).on_ground);
        for _ in 0..30 {
            w.step();
        }
        assert!(w.actor(Side::A).on_ground);
        assert_eq!(w.actor(Side::A).position.y, GROUND_Y);
    }

    #[test]
    fn projectile_flies_and_hits() {
        let mut w = world(10.0);
        w.apply(
            Side::A,
            [Action::SpawnProjectile {
                origin: Vec3::new(0.0, 1.6, 0.0),
                velocity: Vec3::new(2.8, 0.15, 0.0),
                damage: 6.0,
            }],
        );
        let mut total = TickReport::default();
        for _ in 0..20 {
            total.merge(w.step());
        }
        assert_eq!(total.projectile_hits[Side::B.index()], 1);
        assert!(w.actor(Side::B).health < 20.0);
        assert!(w.projectiles.is_empty());
    }

    #[test]
    fn effects_expire() {
        let mut w = world(3.0);
        w.apply(
            Side::A,
            [Action::ApplyEffect {
                who: ActorId::Bot,
                effect: StatusEffect {
                    kind: EffectKind::Slowness,
                    duration_ticks: 3,
                    magnitude: 0.5,
                },
            }],
        );
        assert_eq!(w.actor(Side::A).state().active_effects, 1);
        for _ in 0..3 {
            w.step();
        }
        assert_eq!(w.actor(Side::A).state().active_effects, 0);
    }
}
