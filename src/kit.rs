//! Weapon/tactic kits
//!
//! A kit is the fixed loadout assigned to a bot at spawn. It selects which
//! behavior routine drives the bot every tick; the routine itself lives in
//! [`crate::engine::kits`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of weapon/tactic loadouts a bot can fight with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kit {
    /// Melee combo fighter: fast strikes, jump crits, combo knockback bursts.
    Sword,
    /// Heavy hitter: slower swings, high crit rate, punishes blocking.
    Axe,
    /// Jump-smash fighter: launches at the target and lands fall-scaled hits.
    Mace,
    /// Kiting archer: keeps distance and releases predicted shots.
    Bow,
    /// Area-damage fighter: point-blank blasts that also hurt the bot.
    Crystal,
    /// Control fighter: yanks the target in, then brawls.
    Rod,
    /// Debuff thrower: buffs itself and lobs predicted toxins.
    Potion,
    /// Block/counter fighter: reads swings, blocks, then counter-strikes.
    Shield,
}

impl Kit {
    pub const ALL: [Kit; 8] = [
        Kit::Sword,
        Kit::Axe,
        Kit::Mace,
        Kit::Bow,
        Kit::Crystal,
        Kit::Rod,
        Kit::Potion,
        Kit::Shield,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kit::Sword => "Sword",
            Kit::Axe => "Axe",
            Kit::Mace => "Mace",
            Kit::Bow => "Bow",
            Kit::Crystal => "Crystal",
            Kit::Rod => "Rod",
            Kit::Potion => "Potion",
            Kit::Shield => "Shield",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Kit::Sword => "Melee combos with jump crits and knockback bursts",
            Kit::Axe => "Heavy crits and shield-break punishes",
            Kit::Mace => "Aerial launches into fall-scaled smash attacks",
            Kit::Bow => "Kiting archery with predictive shots",
            Kit::Crystal => "Close-range blasts at a self-damage cost",
            Kit::Rod => "Pulls the target in, then fights up close",
            Kit::Potion => "Self-buffs plus thrown damage and slows",
            Kit::Shield => "Swing-reading blocks and counter-strikes",
        }
    }
}

impl fmt::Display for Kit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
