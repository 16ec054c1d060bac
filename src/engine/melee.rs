//! Shared melee helpers used by most kit routines

use glam::Vec3;

use crate::constants::{CRIT_MULTIPLIER, FALLING_CRIT_THRESHOLD};
use crate::engine::actions::{Action, ActorId, DamageKind, ParticleCue, SoundCue};
use crate::engine::context::KitContext;
use crate::engine::horizontal;

/// Swing at the current target for `base_damage`, applying the difficulty
/// multiplier and the falling-crit bonus. Emits the swing, the damage, and
/// the presentation cues; the caller owns range checks and cooldowns.
pub fn perform_melee_attack(ctx: &mut KitContext<'_>, base_damage: f32) {
    ctx.actions.push(Action::SwingArm);
    let mut damage = base_damage * ctx.profile.damage_multiplier;
    if ctx.bot.velocity.y < FALLING_CRIT_THRESHOLD {
        damage *= CRIT_MULTIPLIER;
        ctx.actions.push(Action::Particles {
            cue: ParticleCue::Crit,
            at: ctx.target.eye_position(),
            count: 6,
        });
    }
    ctx.actions.push(Action::Damage {
        who: ActorId::Target,
        amount: damage,
        kind: DamageKind::Melee,
    });
    ctx.actions.push(Action::Sound {
        cue: SoundCue::MeleeHit,
        at: ctx.target.position,
    });
    ctx.log.damage(ctx.label, damage, DamageKind::Melee.label());
    ctx.tactics.combo += 1;
    ctx.tactics.ticks_since_hit = 0;
}

/// Horizontal unit vector from the bot toward the target, used to direct
/// knockback impulses.
pub fn knockback_dir(bot_pos: Vec3, target_pos: Vec3) -> Vec3 {
    horizontal(target_pos - bot_pos).normalize_or_zero()
}
