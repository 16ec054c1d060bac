//! The per-tick decision engine
//!
//! A [`BotController`] consumes actor snapshots and produces a batch of
//! [`actions::Action`] values each tick. Nothing in here touches a world
//! directly; hosts stay in full control of physics and damage rules.

pub mod actions;
pub mod aim;
pub mod context;
pub mod controller;
pub mod cooldowns;
pub mod kits;
pub mod melee;
pub mod movement;

pub use actions::{Action, ActionBuffer, ActorId, DamageKind, EffectKind, StatusEffect};
pub use context::{ActorState, KitContext, TacticalState};
pub use controller::BotController;
pub use cooldowns::{Cooldown, CooldownRegistry};
pub use kits::{behavior_for, KitBehavior};

use glam::Vec3;

/// Project a vector onto the horizontal plane.
pub(crate) fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared scaffolding for kit unit tests.

    use glam::Vec3;

    use crate::combat::CombatLog;
    use crate::difficulty::{Difficulty, DifficultyProfile};
    use crate::kit::Kit;
    use crate::rng::BotRng;

    use super::actions::ActionBuffer;
    use super::context::{ActorState, KitContext, TacticalState};
    use super::cooldowns::CooldownRegistry;

    /// Owns every piece of state a [`KitContext`] borrows, so kit tests
    /// can tick a behavior against a hand-built situation.
    pub struct TestBed {
        pub kit: Kit,
        pub bot: ActorState,
        pub target: ActorState,
        pub profile: DifficultyProfile,
        pub cooldowns: CooldownRegistry,
        pub tactics: TacticalState,
        pub rng: BotRng,
        pub log: CombatLog,
        pub actions: ActionBuffer,
    }

    impl TestBed {
        pub fn hard() -> Self {
            Self {
                kit: Kit::Sword,
                bot: ActorState::default(),
                target: ActorState::default(),
                profile: Difficulty::Hard.profile(),
                cooldowns: CooldownRegistry::new(),
                tactics: TacticalState::default(),
                rng: BotRng::from_seed(1234),
                log: CombatLog::default(),
                actions: ActionBuffer::new(),
            }
        }

        /// Hard profile with every probabilistic field pinned to zero, so
        /// a test exercises exactly the deterministic path.
        pub fn hard_no_chances() -> Self {
            let mut bed = Self::hard();
            bed.profile.jump_crit_chance = 0.0;
            bed.profile.heavy_crit_chance = 0.0;
            bed.profile.combo_burst_chance = 0.0;
            bed.profile.dodge_chance = 0.0;
            bed.profile.block_chance = 0.0;
            bed.profile.debuff_chance = 0.0;
            bed.profile.reaction_fail_pct = 0;
            bed
        }

        /// Place the target `distance` units away along +x.
        pub fn set_distance(&mut self, distance: f32) {
            self.target.position = self.bot.position + Vec3::new(distance, 0.0, 0.0);
        }

        /// Borrow everything as a [`KitContext`] for one behavior tick.
        pub fn ctx(&mut self) -> KitContext<'_> {
            let distance = self.bot.position.distance(self.target.position);
            KitContext {
                kit: self.kit,
                label: "Bot",
                bot: &self.bot,
                target: &self.target,
                distance,
                profile: &self.profile,
                cooldowns: &mut self.cooldowns,
                tactics: &mut self.tactics,
                rng: &mut self.rng,
                log: &mut self.log,
                actions: &mut self.actions,
            }
        }
    }
}
