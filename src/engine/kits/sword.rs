//! Sword kit: fast combo pressure with jump crits and w-tap knockback

use crate::constants::{COMBO_IDLE_TICKS, JUMP_VELOCITY, MELEE_RANGE};
use crate::engine::actions::{Action, ActorId};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;

const ATTACK_DAMAGE: f32 = 7.0;
const ATTACK_COOLDOWN: u32 = 10;
const JUMP_COOLDOWN: u32 = 16;
/// Vertical component of the w-tap knockback burst.
const BURST_LIFT: f32 = 0.38;
/// Sprint-reset rhythm between knockback bursts.
const SPRINT_RESET_COOLDOWN: u32 = 6;

pub struct SwordKit;

impl KitBehavior for SwordKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if ctx.tactics.ticks_since_hit > COMBO_IDLE_TICKS {
            ctx.tactics.combo = 0;
        }
        if ctx.distance >= MELEE_RANGE {
            return;
        }

        // Hop just before swinging so the strike lands on the way down.
        if ctx.bot.on_ground
            && ctx.cooldowns.ready(Cooldown::Jump)
            && ctx.rng.chance(ctx.profile.jump_crit_chance)
        {
            ctx.actions.push(Action::JumpImpulse { vy: JUMP_VELOCITY });
            ctx.cooldowns.set(Cooldown::Jump, JUMP_COOLDOWN);
        }

        if !ctx.cooldowns.ready(Cooldown::Attack) {
            return;
        }
        let combo_before = ctx.tactics.combo;
        perform_melee_attack(ctx, ATTACK_DAMAGE);
        // W-tap: an ongoing combo can convert into extra knockback that
        // keeps the target off balance. The sprint-reset timer spaces the
        // bursts out.
        if combo_before > 0
            && ctx.cooldowns.ready(Cooldown::SprintReset)
            && ctx.rng.chance(ctx.profile.combo_burst_chance)
        {
            let dir = knockback_dir(ctx.bot.position, ctx.target.position);
            let mut delta = dir * ctx.profile.combo_knockback;
            delta.y = BURST_LIFT;
            ctx.actions.push(Action::AddVelocity {
                who: ActorId::Target,
                delta,
            });
            ctx.cooldowns.set(Cooldown::SprintReset, SPRINT_RESET_COOLDOWN);
        }
        ctx.cooldowns.set(Cooldown::Attack, ATTACK_COOLDOWN);
    }
}
