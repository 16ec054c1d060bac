//! Headless duel loop

use glam::Vec3;
use thiserror::Error;
use tracing::{info, warn};

use crate::combat::{CombatLog, CombatLogEventType};
use crate::combat::log::{DuelMetadata, FighterMetadata};
use crate::engine::{ActionBuffer, BotController};
use crate::headless::config::HeadlessDuelConfig;
use crate::sim::{Side, SimActor, SimWorld};
use crate::tuning::{BotTuning, TuningError};

/// Spawn offset from the origin along x; fighters start two offsets apart.
const SPAWN_OFFSET: f32 = 5.0;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("tuning error: {0}")]
    Tuning(#[from] TuningError),
}

/// One fighter's final numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct FighterResult {
    pub label: String,
    pub final_health: f32,
    pub hits_landed: u32,
    pub hits_taken: u32,
    pub damage_dealt: f32,
    pub damage_taken: f32,
}

/// Outcome of a headless duel.
#[derive(Clone, Debug, PartialEq)]
pub struct DuelResult {
    /// `None` means the tick limit expired with both fighters alive.
    pub winner: Option<Side>,
    pub ticks: u32,
    pub seed: Option<u64>,
    pub fighters: [FighterResult; 2],
}

/// Run one duel to completion (death or tick limit).
pub fn run_headless_duel(config: &HeadlessDuelConfig) -> Result<DuelResult, HeadlessError> {
    let tuning = match &config.tuning_path {
        Some(path) => BotTuning::load(path)?,
        None => BotTuning::default(),
    };

    let specs = [config.fighter_a, config.fighter_b];
    let seeds = config
        .random_seed
        .map(|s| [s, s.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1)]);

    let mut controllers: Vec<BotController> = Vec::with_capacity(2);
    for (i, spec) in specs.iter().enumerate() {
        let profile = tuning.profile(spec.difficulty).clone();
        let seed = seeds.map(|s| s[i]);
        let mut controller = BotController::new(spec.kit, profile, seed);
        controller.set_label(format!("Fighter {} ({})", i + 1, spec.kit.name()));
        controllers.push(controller);
    }

    let mut world = SimWorld::new(
        SimActor::new(
            Vec3::new(-SPAWN_OFFSET, 0.0, 0.0),
            controllers[0].profile().max_health,
        ),
        SimActor::new(
            Vec3::new(SPAWN_OFFSET, 0.0, 0.0),
            controllers[1].profile().max_health,
        ),
    );

    let mut log = CombatLog::default();
    log.log(
        CombatLogEventType::MatchEvent,
        format!(
            "duel start: {} ({}) vs {} ({})",
            controllers[0].label(),
            specs[0].difficulty.name(),
            controllers[1].label(),
            specs[1].difficulty.name()
        ),
    );

    info!(
        fighter_a = %controllers[0].label(),
        fighter_b = %controllers[1].label(),
        max_ticks = config.max_ticks,
        "starting headless duel"
    );

    let mut ticks = 0;
    let mut winner = None;
    for tick in 1..=config.max_ticks {
        ticks = tick;
        log.set_tick(tick);

        let snapshots = [world.actor(Side::A).state(), world.actor(Side::B).state()];
        let mut report = crate::sim::TickReport::default();
        for (i, side) in [Side::A, Side::B].into_iter().enumerate() {
            let mut actions = ActionBuffer::new();
            controllers[i].tick(&snapshots[i], &snapshots[1 - i], &mut log, &mut actions);
            report.merge(world.apply(side, actions.drain()));
            // The engine owns the block decision; mirror it into the world
            // so the opponent sees it next tick.
            world.actor_mut(side).blocking = controllers[i].is_blocking();
        }
        report.merge(world.step());

        for (i, side) in [Side::A, Side::B].into_iter().enumerate() {
            if report.damage_to[side.index()] > 0.0 {
                controllers[i].notify_hurt();
            }
            for _ in 0..report.projectile_hits[side.index()] {
                log.log(
                    CombatLogEventType::Damage,
                    format!("{} is struck by an arrow", controllers[i].label()),
                );
            }
        }

        let dead: Vec<Side> = [Side::A, Side::B]
            .into_iter()
            .filter(|s| !world.actor(*s).is_alive())
            .collect();
        if !dead.is_empty() {
            // Simultaneous deaths count as a draw.
            if dead.len() == 1 {
                winner = Some(dead[0].other());
            }
            for side in dead {
                log.log(
                    CombatLogEventType::Death,
                    format!("{} is defeated", controllers[side.index()].label()),
                );
            }
            break;
        }
    }

    let end_message = match winner {
        Some(side) => format!("{} wins after {ticks} ticks", controllers[side.index()].label()),
        None => format!("draw after {ticks} ticks"),
    };
    log.log(CombatLogEventType::MatchEvent, end_message);

    let fighters = [Side::A, Side::B].map(|side| {
        let actor = world.actor(side);
        let controller = &controllers[side.index()];
        FighterResult {
            label: controller.label().to_string(),
            final_health: actor.health,
            hits_landed: controller.hits_landed(),
            hits_taken: controller.hits_taken(),
            damage_dealt: actor.damage_dealt,
            damage_taken: actor.damage_taken,
        }
    });

    let metadata = DuelMetadata {
        winner: winner.map(|side| controllers[side.index()].label().to_string()),
        ticks,
        random_seed: config.random_seed,
        fighters: [Side::A, Side::B]
            .into_iter()
            .map(|side| {
                let actor = world.actor(side);
                let controller = &controllers[side.index()];
                FighterMetadata {
                    label: controller.label().to_string(),
                    kit: controller.kit().name().to_string(),
                    difficulty: specs[side.index()].difficulty.name().to_string(),
                    max_health: actor.max_health,
                    final_health: actor.health,
                    hits_landed: controller.hits_landed(),
                    hits_taken: controller.hits_taken(),
                    damage_dealt: actor.damage_dealt,
                    damage_taken: actor.damage_taken,
                    final_position: actor.position.into(),
                }
            })
            .collect(),
    };
    match log.save_to_file(&metadata, config.output_path.as_deref()) {
        Ok(path) => info!("combat log written to {}", path.display()),
        Err(err) => warn!("could not save combat log: {err}"),
    }

    Ok(DuelResult {
        winner,
        ticks,
        seed: config.random_seed,
        fighters,
    })
}
