//! Cooldown registry
//!
//! Fixed slots, one per recurring bot action. All timers count down once
//! per engine tick; an action is allowed only while its slot reads zero.

/// Every cooldown slot the engine tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cooldown {
    /// Primary attack (melee swing, potion throw).
    Attack,
    /// Crit hops and rod-kit jumps.
    Jump,
    /// Kit signature action (bow shot, blast, pull, self-buff).
    Special,
    /// Sprint-reset rhythm between combo hits.
    SprintReset,
    Block,
    /// Rate limit on re-entering retreat.
    Retreat,
    Heal,
    Dodge,
    /// Secondary kit action (smash launch, shield bash).
    KitSpecial,
}

impl Cooldown {
    pub const ALL: [Cooldown; 9] = [
        Cooldown::Attack,
        Cooldown::Jump,
        Cooldown::Special,
        Cooldown::SprintReset,
        Cooldown::Block,
        Cooldown::Retreat,
        Cooldown::Heal,
        Cooldown::Dodge,
        Cooldown::KitSpecial,
    ];
}

/// Remaining ticks for each [`Cooldown`] slot.
#[derive(Clone, Debug, Default)]
pub struct CooldownRegistry {
    timers: [u32; Cooldown::ALL.len()],
}

impl CooldownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all timers by one tick.
    pub fn tick_down(&mut self) {
        for timer in &mut self.timers {
            *timer = timer.saturating_sub(1);
        }
    }

    pub fn ready(&self, slot: Cooldown) -> bool {
        self.timers[slot as usize] == 0
    }

    /// Start (or restart) a timer.
    pub fn set(&mut self, slot: Cooldown, ticks: u32) {
        self.timers[slot as usize] = ticks;
    }

    pub fn remaining(&self, slot: Cooldown) -> u32 {
        self.timers[slot as usize]
    }
}
