//! Kit-specific combat routines
//!
//! Each kit implements [`KitBehavior`] and is dispatched once per tick
//! after the shared reactive layer (dodge, heal, retreat) has run. Kit
//! routines own their stateful quirks (bow draw, smash arming) privately.

use crate::engine::context::KitContext;
use crate::kit::Kit;

mod axe;
mod bow;
mod crystal;
mod mace;
mod potion;
mod rod;
mod shield;
mod sword;

pub use axe::AxeKit;
pub use bow::BowKit;
pub use crystal::CrystalKit;
pub use mace::MaceKit;
pub use potion::PotionKit;
pub use rod::RodKit;
pub use shield::ShieldKit;
pub use sword::SwordKit;

/// One kit's per-tick combat decision.
pub trait KitBehavior: Send {
    fn tick(&mut self, ctx: &mut KitContext<'_>);
}

/// Build the behavior object for a kit.
pub fn behavior_for(kit: Kit) -> Box<dyn KitBehavior> {
    match kit {
        Kit::Sword => Box::new(SwordKit),
        Kit::Axe => Box::new(AxeKit),
        Kit::Mace => Box::new(MaceKit::default()),
        Kit::Bow => Box::new(BowKit::default()),
        Kit::Crystal => Box::new(CrystalKit),
        Kit::Rod => Box::new(RodKit),
        Kit::Potion => Box::new(PotionKit),
        Kit::Shield => Box::new(ShieldKit),
    }
}
