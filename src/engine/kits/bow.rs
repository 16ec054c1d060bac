//! Bow kit: kiting archer with a real draw cycle
//!
//! The bow draws over several ticks before releasing a predicted shot, and
//! keeps the retreat flag raised at close range so the movement layer
//! kites. Cornered, it gives up the draw and pokes with a weak melee.

use crate::constants::{ARROW_DAMAGE, PANIC_MELEE_RANGE};
use crate::engine::actions::{Action, SoundCue};
use crate::engine::aim::aim_projectile;
use crate::engine::context::KitContext;
use crate::engine::kits::KitBehavior;
use crate::engine::melee::perform_melee_attack;
use crate::engine::Cooldown;

const KITE_RANGE: f32 = 8.0;
const KITE_RELEASE_RANGE: f32 = 18.0;
const DRAW_MIN_RANGE: f32 = 6.0;
const DRAW_MAX_RANGE: f32 = 35.0;
const PANIC_DAMAGE: f32 = 3.0;
const PANIC_COOLDOWN: u32 = 15;
/// Ticks of draw progress lost per tick spent out of the firing window.
const DRAW_DECAY: u32 = 2;

#[derive(Default)]
pub struct BowKit {
    draw_ticks: u32,
    drawing: bool,
}

impl KitBehavior for BowKit {
    fn tick(&mut self, ctx: &mut KitContext<'_>) {
        // Kite: keep backing off whenever the target closes in.
        if ctx.distance < KITE_RANGE {
            ctx.tactics.retreating = true;
        } else if ctx.distance > KITE_RELEASE_RANGE {
            ctx.tactics.retreating = false;
        }

        let in_window = (DRAW_MIN_RANGE..DRAW_MAX_RANGE).contains(&ctx.distance)
            && ctx.cooldowns.ready(Cooldown::Special);
        if in_window {
            self.drawing = true;
            self.draw_ticks += 1;
            if self.draw_ticks >= ctx.profile.draw_ticks {
                let origin = ctx.bot.eye_position();
                let velocity = aim_projectile(
                    origin,
                    ctx.target,
                    ctx.tactics.target_velocity,
                    ctx.profile,
                    ctx.rng,
                );
                ctx.actions.push(Action::SpawnProjectile {
                    origin,
                    velocity,
                    damage: ARROW_DAMAGE * ctx.profile.damage_multiplier,
                });
                ctx.actions.push(Action::Sound {
                    cue: SoundCue::BowRelease,
                    at: origin,
                });
                ctx.log.kit_action(ctx.label, "releases an arrow");
                self.draw_ticks = 0;
                self.drawing = false;
                ctx.cooldowns
                    .set(Cooldown::Special, ctx.profile.shot_cooldown);
            }
            return;
        }

        // Out of the window: let the draw slip instead of holding forever.
        if self.drawing {
            self.draw_ticks = self.draw_ticks.saturating_sub(DRAW_DECAY);
            if self.draw_ticks == 0 {
                self.drawing = false;
            }
        }

        if ctx.distance < PANIC_MELEE_RANGE && ctx.cooldowns.ready(Cooldown::Attack) {
            perform_melee_attack(ctx, PANIC_DAMAGE);
            ctx.cooldowns.set(Cooldown::Attack, PANIC_COOLDOWN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::actions::DamageKind;
    use crate::engine::testing::TestBed;

    #[test]
    fn releases_after_full_draw() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(15.0);
        let draw = bed.profile.draw_ticks;
        let mut kit = BowKit::default();
        for _ in 0..draw - 1 {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert!(bed.actions.is_empty(), "no arrow before the draw completes");
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let shot = bed
            .actions
            .as_slice()
            .iter()
            .any(|a| matches!(a, Action::SpawnProjectile { .. }));
        assert!(shot);
        assert!(!bed.cooldowns.ready(Cooldown::Special));
    }

    #[test]
    fn close_range_raises_the_kite_flag() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(5.0);
        let mut kit = BowKit::default();
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert!(bed.tactics.retreating);
        // Far enough away, the flag drops again.
        bed.set_distance(25.0);
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert!(!bed.tactics.retreating);
    }

    #[test]
    fn draw_decays_outside_the_window() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(15.0);
        let mut kit = BowKit::default();
        for _ in 0..5 {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert_eq!(kit.draw_ticks, 5);
        bed.set_distance(40.0);
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        assert_eq!(kit.draw_ticks, 3);
    }

    #[test]
    fn cornered_bow_pokes_with_melee() {
        let mut bed = TestBed::hard_no_chances();
        bed.set_distance(2.0);
        let mut kit = BowKit::default();
        {
            let mut ctx = bed.ctx();
            kit.tick(&mut ctx);
        }
        let hit = bed.actions.as_slice().iter().find_map(|a| match a {
            Action::Damage { amount, kind: DamageKind::Melee, .. } => Some(*amount),
            _ => None,
        });
        assert_eq!(hit, Some(PANIC_DAMAGE));
    }
}
