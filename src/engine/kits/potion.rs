//! Potion kit: self-buffs, lobbed toxins with a chance to slow, and a
//! scrappy melee fallback

use crate::engine::actions::{
    Action, ActorId, DamageKind, EffectKind, ParticleCue, SoundCue, StatusEffect,
};
use crate::engine::aim::predict_point;
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::perform_melee_attack;
use crate::engine::Cooldown;
use crate::constants::{JUMP_VELOCITY, MELEE_RANGE};

const BUFF_DURATION: u32 = 600;
const BUFF_COOLDOWN: u32 = 400;
const THROW_MIN: f32 = 4.0;
const THROW_MAX: f32 = 12.0;
const TOXIN_DAMAGE: f32 = 6.0;
/// Velocity factor applied to a slowed target.
const SLOW_FACTOR: f32 = 0.6;
const MELEE_DAMAGE: f32 = 7.0;
const MELEE_COOLDOWN: u32 = 10;
const JUMP_CHANCE: f64 = 0.3;
const JUMP_COOLDOWN: u32 = 14;

pub struct PotionKit;

impl KitBehavior for PotionKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        // Drink buffs before anything else, but never stack them.
        if ctx.bot.active_effects == 0 && ctx.cooldowns.ready(Cooldown::Special) {
            for kind in [EffectKind::Speed, EffectKind::Strength] {
                ctx.actions.push(Action::ApplyEffect {
                    who: ActorId::Bot,
                    effect: StatusEffect {
                        kind,
                        duration_ticks: BUFF_DURATION,
                        magnitude: 1.0,
                    },
                });
            }
            ctx.actions.push(Action::Sound {
                cue: SoundCue::Drink,
                at: ctx.bot.position,
            });
            ctx.log.kit_action(ctx.label, "drinks a combat draught");
            ctx.cooldowns.set(Cooldown::Special, BUFF_COOLDOWN);
            return;
        }

        if (THROW_MIN..THROW_MAX).contains(&ctx.distance)
            && ctx.cooldowns.ready(Cooldown::Attack)
        {
            let splash_at = predict_point(
                ctx.target,
                ctx.tactics.target_velocity,
                ctx.distance,
                ctx.profile.prediction_confidence,
            );
            let damage = TOXIN_DAMAGE * ctx.profile.damage_multiplier;
            ctx.actions.push(Action::Damage {
                who: ActorId::Target,
                amount: damage,
                kind: DamageKind::Toxin,
            });
            if ctx.rng.chance(ctx.profile.debuff_chance) {
                ctx.actions.push(Action::ApplyEffect {
                    who: ActorId::Target,
                    effect: StatusEffect {
                        kind: EffectKind::Slowness,
                        duration_ticks: ctx.profile.debuff_ticks,
                        magnitude: SLOW_FACTOR,
                    },
                });
            }
            ctx.actions.push(Action::Particles {
                cue: ParticleCue::Splash,
                at: splash_at,
                count: 15,
            });
            ctx.actions.push(Action::Sound {
                cue: SoundCue::PotionShatter,
                at: splash_at,
            });
            ctx.log.damage(ctx.label, damage, DamageKind::Toxin.label());
            ctx.tactics.hits_landed += 1;
            ctx.cooldowns
                .set(Cooldown::Attack, ctx.profile.throw_cooldown);
            return;
        }

        if ctx.distance >= MELEE_RANGE {
            return;
        }
        if ctx.bot.on_ground
            && ctx.cooldowns.ready(Cooldown::Jump)
            && ctx.rng.chance(JUMP_CHANCE)
        {
            ctx.actions.push(Action::JumpImpulse { vy: JUMP_VELOCITY });
            ctx.cooldowns.set(Cooldown::Jump, JUMP_COOLDOWN);
        }
        if ctx.cooldowns.ready(Cooldown::Attack) {
            perform_melee_attack(ctx, MELEE_DAMAGE);
            ctx.cooldowns.set(Cooldown::Attack, MELEE_COOLDOWN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::TestBed;

    #[test]
    fn buffs_itself_when_unbuffed() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(6.0);
        let mut kit = PotionKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let buffs: Vec<_> = bed
            .actions
            .as_slice()
            .iter()
            .filter_map(|a| match a {
                Action::ApplyEffect { who: ActorId::Bot, effect } => Some(effect.kind),
                _ => None,
            })
            .collect();
        assert_eq!(buffs, vec![EffectKind::Speed, EffectKind::Strength]);
        assert!(!bed.cooldowns.ready(Cooldown::Special));
    }

    #[test]
    fn skips_buffing_while_effects_are_active() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(6.0);
        bed.bot.active_effects = 2;
        let mut kit = PotionKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert!(!bed
            .actions
            .as_slice()
            .iter()
            .any(|a| matches!(a, Action::ApplyEffect { who: ActorId::Bot, .. })));
        // The throw happens instead.
        assert!(bed
            .actions
            .as_slice()
            .iter()
            .any(|a| matches!(a, Action::Damage { kind: DamageKind::Toxin, .. })));
    }

    #[test]
    fn toxin_can_apply_a_slow() {
        let mut bed = TestBed::hard_no_chances();
        bed.profile.debuff_chance = 1.0;
        bed.set_distance(6.0);
        bed.bot.active_effects = 1;
        let mut kit = PotionKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let slow = bed.actions.as_slice().iter().find_map(|a| match a {
            Action::ApplyEffect { who: ActorId::Target, effect } => Some(*effect),
            _ => None,
        });
        let slow = slow.unwrap();
        assert_eq!(slow.kind, EffectKind::Slowness);
        assert_eq!(slow.duration_ticks, bed.profile.debuff_ticks);
    }

    #[test]
    fn melee_fallback_up_close() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(2.0);
        bed.bot.active_effects = 1;
        let mut kit = PotionKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let hit = bed.actions.as_slice().iter().find_map(|a| match a {
            Action::Damage { amount, kind: DamageKind::Melee, .. } => Some(*amount),
            _ => None,
        });
        assert_eq!(hit, Some(MELEE_DAMAGE));
    }
}
