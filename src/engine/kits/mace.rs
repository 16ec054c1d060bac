//! Mace kit: jump-smash bursts
//!
//! The mace launches itself upward, then converts the fall into a smash
//! whose damage grows with the height dropped. The smash only arms once
//! the bot has actually left the ground after a launch, so the landing
//! tick of the launch itself can never trigger it.

use glam::Vec3;

use crate::engine::actions::{Action, ActorId, DamageKind, ParticleCue, SoundCue};
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::{knockback_dir, perform_melee_attack};
use crate::engine::Cooldown;

const MELEE_DAMAGE: f32 = 6.0;
const MELEE_COOLDOWN: u32 = 12;
const MELEE_RANGE: f32 = 3.0;
const LAUNCH_MIN: f32 = 4.0;
const LAUNCH_MAX: f32 = 12.0;
/// Forward drift applied with the launch so the fall lands near the target.
const LAUNCH_FORWARD: f32 = 0.5;
const SMASH_RANGE: f32 = 6.0;
const SMASH_BASE: f32 = 8.0;
const SMASH_PER_BLOCK: f32 = 2.5;
const SMASH_CAP: f32 = 28.0;
const SMASH_KNOCKBACK: f32 = 0.9;
const SMASH_LIFT: f32 = 0.55;

#[derive(Default)]
pub struct MaceKit {
    preparing_smash: bool,
    /// Set once the bot is airborne after a launch; the smash fires on the
    /// next grounded tick.
    left_ground: bool,
    fall_start_y: f32,
}

/// Smash damage for a fall of `fall_height` blocks, before capping at
/// [`SMASH_CAP`].
pub fn smash_damage(fall_height: f32, damage_multiplier: f32) -> f32 {
    ((SMASH_BASE + fall_height.max(0.0) * SMASH_PER_BLOCK) * damage_multiplier).min(SMASH_CAP)
}

impl KitBehavior for MaceKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        if self.preparing_smash {
            if !self.left_ground {
                if !ctx.bot.on_ground {
                    self.left_ground = true;
                }
                return;
            }
            if !ctx.bot.on_ground {
                return;
            }
            // Landed.
            self.preparing_smash = false;
            self.left_ground = false;
            if ctx.distance < SMASH_RANGE {
                let fall = self.fall_start_y - ctx.bot.position.y;
                let damage = smash_damage(fall, ctx.profile.damage_multiplier);
                ctx.actions.push(Action::SwingArm);
                ctx.actions.push(Action::Damage {
                    who: ActorId::Target,
                    amount: damage,
                    kind: DamageKind::Smash,
                });
                let dir = knockback_dir(ctx.bot.position, ctx.target.position);
                let mut delta = dir * SMASH_KNOCKBACK;
                delta.y = SMASH_LIFT;
                ctx.actions.push(Action::AddVelocity {
                    who: ActorId::Target,
                    delta,
                });
                ctx.actions.push(Action::Particles {
                    cue: ParticleCue::Impact,
                    at: ctx.bot.position,
                    count: 20,
                });
                ctx.log.damage(ctx.label, damage, DamageKind::Smash.label());
                ctx.tactics.hits_landed += 1;
            }
            return;
        }

        if ctx.bot.on_ground
            && (LAUNCH_MIN..LAUNCH_MAX).contains(&ctx.distance)
            && ctx.cooldowns.ready(Cooldown::KitSpecial)
        {
            let dir = knockback_dir(ctx.bot.position, ctx.target.position);
            let velocity = Vec3::new(
                dir.x * LAUNCH_FORWARD,
                ctx.profile.launch_power,
                dir.z * LAUNCH_FORWARD,
            );
            ctx.actions.push(Action::SetVelocity(velocity));
            ctx.actions.push(Action::Sound {
                cue: SoundCue::WindBurst,
                at: ctx.bot.position,
            });
            ctx.log.kit_action(ctx.label, "launches for a smash");
            self.preparing_smash = true;
            self.left_ground = false;
            // Peak of the launch arc, used as the fall reference.
            self.fall_start_y = ctx.bot.position.y + 5.0;
            ctx.cooldowns
                .set(Cooldown::KitSpecial, ctx.profile.launch_cooldown);
            return;
        }

        if ctx.distance < MELEE_RANGE && ctx.cooldowns.ready(Cooldown::Attack) {
            perform_melee_attack(ctx, MELEE_DAMAGE);
            ctx.cooldowns.set(Cooldown::Attack, MELEE_COOLDOWN);
        }
    }
}
