//! Shield kit: turtles behind a block and counters out of it

use crate::engine::actions::{Action, ActorId};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;

const BLOCK_RANGE: f32 = 5.0;
/// Hold ticks left on the block timer below which the guard drops.
const RELEASE_WINDOW: u32 = 15;
const COUNTER_RANGE: f32 = 3.5;
const COUNTER_DAMAGE: f32 = 6.0;
const COUNTER_COOLDOWN: u32 = 11;
const BASH_CHANCE: f64 = 0.25;
const BASH_KNOCKBACK: f32 = 0.6;
const BASH_LIFT: f32 = 0.35;

pub struct ShieldKit;

impl KitBehavior for ShieldKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if ctx.tactics.blocking {
            // The guard drops shortly before the block timer expires so a
            // counterattack fits inside the gap.
            if ctx.cooldowns.remaining(Cooldown::Block) < RELEASE_WINDOW {
                ctx.tactics.blocking = false;
                ctx.log.kit_action(ctx.label, "lowers the shield");
            }
            return;
        }

        if ctx.distance < BLOCK_RANGE && ctx.cooldowns.ready(Cooldown::Block) {
            // Twice as likely to guard against an incoming swing.
            let mut chance = ctx.profile.block_chance;
            if ctx.target.swinging {
                chance *= 2.0;
            }
            if ctx.rng.chance(chance) {
                ctx.tactics.blocking = true;
                ctx.log.kit_action(ctx.label, "raises the shield");
            }
            // Failed or not, the next evaluation waits out the cooldown.
            ctx.cooldowns.set(Cooldown::Block, ctx.profile.block_cooldown);
            if ctx.tactics.blocking {
                return;
            }
        }

        if ctx.distance < COUNTER_RANGE && ctx.cooldowns.ready(Cooldown::Attack) {
            if ctx.rng.chance(BASH_CHANCE) {
                let dir = knockback_dir(ctx.bot.position, ctx.target.position);
                let mut delta = dir * BASH_KNOCKBACK;
                delta.y = BASH_LIFT;
                ctx.actions.push(Action::AddVelocity {
                    who: ActorId::Target,
                    delta,
                });
                ctx.log.kit_action(ctx.label, "bashes with the shield");
            }
            perform_melee_attack(ctx, COUNTER_DAMAGE);
            ctx.cooldowns.set(Cooldown::Attack, COUNTER_COOLDOWN);
        }
    }
}
