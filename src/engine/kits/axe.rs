//! Axe kit: slow heavy strikes that punish raised blocks

use crate::constants::{JUMP_VELOCITY, MELEE_RANGE};
use crate::engine::actions::{Action, ActorId, SoundCue};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;

const ATTACK_DAMAGE: f32 = 9.0;
const ATTACK_COOLDOWN: u32 = 16;
const JUMP_COOLDOWN: u32 = 18;
/// Knockback of the shield-break follow-through.
const BREAK_KNOCKBACK: f32 = 0.7;
const BREAK_LIFT: f32 = 0.45;

pub struct AxeKit;

impl KitBehavior for AxeKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if ctx.distance >= MELEE_RANGE {
            return;
        }

        if ctx.bot.on_ground
            && ctx.cooldowns.ready(Cooldown::Jump)
            && ctx.rng.chance(ctx.profile.heavy_crit_chance)
        {
            ctx.actions.push(Action::JumpImpulse { vy: JUMP_VELOCITY });
            ctx.cooldowns.set(Cooldown::Jump, JUMP_COOLDOWN);
        }

        if !ctx.cooldowns.ready(Cooldown::Attack) {
            return;
        }
        let target_was_blocking = ctx.target.blocking;
        perform_melee_attack(ctx, ATTACK_DAMAGE);
        // An axe strike disables a raised block and staggers the blocker.
        if target_was_blocking {
            let dir = knockback_dir(ctx.bot.position, ctx.target.position);
            let mut delta = dir * BREAK_KNOCKBACK;
            delta.y = BREAK_LIFT;
            ctx.actions.push(Action::AddVelocity {
                who: ActorId::Target,
                delta,
            });
            ctx.actions.push(Action::Sound {
                cue: SoundCue::ShieldBreak,
                at: ctx.target.position,
            });
            ctx.log.kit_action(ctx.label, "breaks the raised shield");
        }
        ctx.cooldowns.set(Cooldown::Attack, ATTACK_COOLDOWN);
    }
}
