//! Rod kit: yanks the target into melee range, then brawls

use crate::engine::actions::{Action, ActorId, SoundCue};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;
use crate::constants::{JUMP_VELOCITY, MELEE_RANGE};

const PULL_MIN: f32 = 5.0;
const PULL_MAX: f32 = 14.0;
const PULL_COOLDOWN: u32 = 25;
/// Upward component of the pull so the target clears the ground.
const PULL_LIFT: f32 = 0.25;
const ATTACK_DAMAGE: f32 = 7.0;
const ATTACK_COOLDOWN: u32 = 10;
const JUMP_CHANCE: f64 = 0.35;
const JUMP_COOLDOWN: u32 = 14;

pub struct RodKit;

impl KitBehavior for RodKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if (PULL_MIN..PULL_MAX).contains(&ctx.distance)
            && ctx.cooldowns.ready(Cooldown::Special)
        {
            // Pull direction is target-to-bot.
            let dir = -knockback_dir(ctx.bot.position, ctx.target.position);
            let mut delta = dir * ctx.profile.pull_strength;
            delta.y = PULL_LIFT;
            ctx.actions.push(Action::AddVelocity {
                who: ActorId::Target,
                delta,
            });
            ctx.actions.push(Action::Sound {
                cue: SoundCue::RodPull,
                at: ctx.target.position,
            });
            ctx.log.kit_action(ctx.label, "reels the target in");
            ctx.cooldowns.set(Cooldown::Special, PULL_COOLDOWN);
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
            perform_melee_attack(ctx, ATTACK_DAMAGE);
            ctx.cooldowns.set(Cooldown::Attack, ATTACK_COOLDOWN);
        }
    }
}
