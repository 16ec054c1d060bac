//! Crystal kit: point-blank blasts that trade self-damage for burst

use crate::constants::PANIC_MELEE_RANGE;
use crate::engine::actions::{Action, ActorId, DamageKind, ParticleCue, SoundCue};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;

const BLAST_MIN: f32 = 2.0;
const BLAST_MAX: f32 = 8.0;
const BLAST_DAMAGE: f32 = 9.0;
/// Fraction of the blast the bot eats itself.
const SELF_DAMAGE_FRACTION: f32 = 0.25;
const BLAST_KNOCKBACK: f32 = 0.65;
const BLAST_LIFT: f32 = 0.45;
const MELEE_DAMAGE: f32 = 6.0;
const MELEE_COOLDOWN: u32 = 11;

pub struct CrystalKit;

impl KitBehavior for CrystalKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if (BLAST_MIN..BLAST_MAX).contains(&ctx.distance)
            && ctx.cooldowns.ready(Cooldown::Special)
        {
            let damage = BLAST_DAMAGE * ctx.profile.damage_multiplier;
            ctx.actions.push(Action::Damage {
                who: ActorId::Target,
                amount: damage,
                kind: DamageKind::Blast,
            });
            ctx.actions.push(Action::Damage {
                who: ActorId::Bot,
                amount: damage * SELF_DAMAGE_FRACTION,
                kind: DamageKind::Blast,
            });
            let dir = knockback_dir(ctx.bot.position, ctx.target.position);
            let mut delta = dir * BLAST_KNOCKBACK;
            delta.y = BLAST_LIFT;
            ctx.actions.push(Action::AddVelocity {
                who: ActorId::Target,
                delta,
            });
            let midpoint = (ctx.bot.position + ctx.target.position) * 0.5;
            ctx.actions.push(Action::Particles {
                cue: ParticleCue::BlastBurst,
                at: midpoint,
                count: 30,
            });
            ctx.actions.push(Action::Sound {
                cue: SoundCue::Blast,
                at: midpoint,
            });
            ctx.log.damage(ctx.label, damage, DamageKind::Blast.label());
            ctx.tactics.hits_landed += 1;
            ctx.cooldowns
                .set(Cooldown::Special, ctx.profile.blast_cooldown);
            return;
        }

        if ctx.distance < PANIC_MELEE_RANGE && ctx.cooldowns.ready(Cooldown::Attack) {
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
    fn blast_hits_both_sides() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(4.0);
        let mut kit = CrystalKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let mut to_target = None;
        let mut to_self = None;
        for action in bed.actions.as_slice() {
            if let Action::Damage { who, amount, kind: DamageKind::Blast } = action {
                match who {
                    ActorId::Target => to_target = Some(*amount),
                    ActorId::Bot => to_self = Some(*amount),
                }
            }
        }
        assert_eq!(to_target, Some(BLAST_DAMAGE));
        assert_eq!(to_self, Some(BLAST_DAMAGE * SELF_DAMAGE_FRACTION));
        assert!(!bed.cooldowns.ready(Cooldown::Special));
    }

    #[test]
    fn too_close_for_a_blast_means_melee() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(1.0);
        let mut kit = CrystalKit;
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

    #[test]
    fn blast_respects_its_cooldown() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(4.0);
        bed.cooldowns.set(Cooldown::Special, 10);
        let mut kit = CrystalKit;
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert!(!bed
            .actions
            .as_slice()
            .iter()
            .any(|a| matches!(a, Action::Damage { .. })));
    }

    #[test]
    fn melee_covers_the_circle_band_while_the_blast_recharges() {
        // 2.5 sits inside the blast band but also inside melee reach;
        // with the blast down, the swing must still come.
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(2.5);
        bed.cooldowns.set(Cooldown::Special, 10);
        let mut kit = CrystalKit;
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
