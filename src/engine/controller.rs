//! Per-bot decision controller
//!
//! One [`BotController`] drives one bot. Each tick it receives fresh
//! snapshots of both actors, runs the shared layers in a fixed order
//! (perception, reaction gate, dodge, heal, retreat), hands the tick to
//! the kit routine, and finally steers. All world mutation goes through
//! the returned action buffer.

use glam::Vec3;
use tracing::debug;

use crate::combat::{CombatLog, CombatLogEventType};
use crate::constants::{
    COMBO_IDLE_TICKS, DODGE_BACK_SPEED, DODGE_COOLDOWN_TICKS, DODGE_HOP, DODGE_RANGE,
    DODGE_STRAFE_SPEED, RETREAT_ENTER_HP, RETREAT_EXIT_HP, RETREAT_REENTRY_TICKS,
    ABSORPTION_POOL, ABSORPTION_TICKS,
};
use crate::difficulty::DifficultyProfile;
use crate::engine::actions::{
    Action, ActionBuffer, ActorId, EffectKind, SoundCue, StatusEffect,
};
use crate::engine::context::{ActorState, KitContext, TacticalState};
use crate::engine::cooldowns::{Cooldown, CooldownRegistry};
use crate::engine::kits::{behavior_for, KitBehavior};
use crate::engine::{horizontal, movement};
use crate::kit::Kit;
use crate::rng::BotRng;

pub struct BotController {
    kit: Kit,
    label: String,
    profile: DifficultyProfile,
    behavior: Box<dyn KitBehavior>,
    cooldowns: CooldownRegistry,
    tactics: TacticalState,
    rng: BotRng,
    /// Remaining ticks of the current reaction stall.
    reaction_stall: u32,
}

impl BotController {
    /// Build a controller for one bot. A seed makes every decision
    /// reproducible; `None` draws from system entropy.
    pub fn new(kit: Kit, profile: DifficultyProfile, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => BotRng::from_seed(seed),
            None => BotRng::from_entropy(),
        };
        let mut tactics = TacticalState::default();
        tactics.pattern = rng.index(movement::STRAFE_PATTERNS.len());
        Self {
            kit,
            label: kit.name().to_string(),
            profile,
            behavior: behavior_for(kit),
            cooldowns: CooldownRegistry::new(),
            tactics,
            rng,
            reaction_stall: 0,
        }
    }

    /// Override the log label (defaults to the kit name).
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn kit(&self) -> Kit {
        self.kit
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Whether the bot currently holds a raised block.
    pub fn is_blocking(&self) -> bool {
        self.tactics.blocking
    }

    pub fn combo_count(&self) -> u32 {
        self.tactics.combo
    }

    pub fn hits_landed(&self) -> u32 {
        self.tactics.hits_landed
    }

    pub fn hits_taken(&self) -> u32 {
        self.tactics.hits_taken
    }

    /// Remaining ticks of the current reaction stall, zero when alert.
    pub fn stalled_ticks(&self) -> u32 {
        self.reaction_stall
    }

    /// Host callback: the bot just took a hit. Arms the dodge check for
    /// the next tick.
    pub fn notify_hurt(&mut self) {
        self.tactics.was_hurt = true;
        self.tactics.hits_taken += 1;
    }

    /// Host callback: the opponent changed. Clears perception history so
    /// stale velocity estimates never leak across targets.
    pub fn retarget(&mut self) {
        self.tactics.last_target_pos = None;
        self.tactics.target_velocity = Vec3::ZERO;
        self.tactics.last_target_health = None;
    }

    /// Run one decision tick. Actions are appended to `actions`.
    pub fn tick(
        &mut self,
        bot: &ActorState,
        target: &ActorState,
        log: &mut CombatLog,
        actions: &mut ActionBuffer,
    ) {
        if !bot.is_alive() || !target.is_alive() {
            return;
        }

        actions.push(Action::Face {
            at: target.eye_position(),
        });

        // Perception: estimate target velocity from position deltas.
        if let Some(last) = self.tactics.last_target_pos {
            self.tactics.target_velocity = target.position - last;
        }
        self.tactics.last_target_pos = Some(target.position);

        self.cooldowns.tick_down();

        // Reaction gate: a stalled bot faces and watches but does nothing.
        if self.reaction_stall > 0 {
            self.reaction_stall -= 1;
            return;
        }
        if self.rng.percent(self.profile.reaction_fail_pct) {
            let cap = (self.profile.reaction_stall_ticks / 2).max(1);
            self.reaction_stall = self.rng.range_u32(1, cap);
            debug!(label = %self.label, ticks = self.reaction_stall, "reaction stall");
            return;
        }

        let distance = bot.position.distance(target.position);
        self.tactics.ticks_since_hit = self.tactics.ticks_since_hit.saturating_add(1);
        if self.tactics.ticks_since_hit > COMBO_IDLE_TICKS {
            self.tactics.combo = 0;
        }

        self.dodge_check(bot, target, distance, actions);
        self.heal_check(bot, log, actions);
        self.retreat_check(bot, log);

        {
            let Self {
                behavior,
                kit,
                label,
                profile,
                cooldowns,
                tactics,
                rng,
                ..
            } = self;
            let mut ctx = KitContext {
                kit: *kit,
                label: label.as_str(),
                bot,
                target,
                distance,
                profile,
                cooldowns,
                tactics,
                rng,
                log,
                actions,
            };
            behavior.tick(&mut ctx);
        }

        movement::update_strafe(&mut self.tactics, &mut self.rng);
        if let Some(v) =
            movement::steering(bot, target, distance, &self.profile, &self.tactics, &mut self.rng)
        {
            actions.push(Action::SetPlanarVelocity { x: v.x, z: v.z });
        }

        // Hit confirmation: a drop in observed target health counts as a
        // landed hit for the kit's bookkeeping.
        if let Some(last_health) = self.tactics.last_target_health {
            if target.health < last_health {
                self.tactics.hits_landed += 1;
                self.tactics.ticks_since_hit = 0;
            }
        }
        self.tactics.last_target_health = Some(target.health);
    }

    /// Dodge reactively when a hit just landed and the attacker is close.
    fn dodge_check(
        &mut self,
        bot: &ActorState,
        target: &ActorState,
        distance: f32,
        actions: &mut ActionBuffer,
    ) {
        if !self.tactics.was_hurt || !self.cooldowns.ready(Cooldown::Dodge) {
            return;
        }
        // Out of dodge range the flag stays armed for when the attacker
        // closes back in.
        if distance > DODGE_RANGE {
            return;
        }
        self.tactics.was_hurt = false;
        self.cooldowns.set(Cooldown::Dodge, DODGE_COOLDOWN_TICKS);
        if !self.rng.chance(self.profile.dodge_chance) {
            return;
        }
        let to_target = horizontal(target.position - bot.position).normalize_or_zero();
        // Break left or right at random so the dodge can't be read.
        let side = Vec3::new(-to_target.z, 0.0, to_target.x) * self.rng.sign();
        let burst =
            side * DODGE_STRAFE_SPEED - to_target * DODGE_BACK_SPEED + Vec3::Y * DODGE_HOP;
        actions.push(Action::SetVelocity(burst));
    }

    /// Heal when wounded past the profile threshold.
    fn heal_check(&mut self, bot: &ActorState, log: &mut CombatLog, actions: &mut ActionBuffer) {
        let threshold = self.profile.heal_threshold;
        if threshold <= 0.0
            || bot.health_fraction() >= threshold
            || !self.cooldowns.ready(Cooldown::Heal)
        {
            return;
        }
        actions.push(Action::Heal {
            amount: self.profile.heal_amount,
        });
        actions.push(Action::ApplyEffect {
            who: ActorId::Bot,
            effect: StatusEffect {
                kind: EffectKind::Absorption,
                duration_ticks: ABSORPTION_TICKS,
                magnitude: ABSORPTION_POOL,
            },
        });
        actions.push(Action::Sound {
            cue: SoundCue::Drink,
            at: bot.position,
        });
        log.healing(&self.label, self.profile.heal_amount);
        self.cooldowns.set(Cooldown::Heal, self.profile.heal_cooldown);
    }

    /// Retreat hysteresis: enter low, exit high, rate-limited re-entry.
    fn retreat_check(&mut self, bot: &ActorState, log: &mut CombatLog) {
        let fraction = bot.health_fraction();
        if !self.tactics.retreating {
            if fraction < RETREAT_ENTER_HP && self.cooldowns.ready(Cooldown::Retreat) {
                self.tactics.retreating = true;
                self.cooldowns.set(Cooldown::Retreat, RETREAT_REENTRY_TICKS);
                log.log(
                    CombatLogEventType::MatchEvent,
                    format!("{} falls back to recover", self.label),
                );
            }
        } else if fraction > RETREAT_EXIT_HP {
            self.tactics.retreating = false;
        }
    }
}
