//! End-to-end headless duel tests

use std::env;
use std::path::PathBuf;

use duelbot::difficulty::Difficulty;
use duelbot::headless::{run_headless_duel, FighterSpec, HeadlessDuelConfig};
use duelbot::kit::Kit;
use duelbot::sim::Side;

fn config(kit_a: Kit, kit_b: Kit, seed: u64, tag: &str) -> HeadlessDuelConfig {
    HeadlessDuelConfig {
        fighter_a: FighterSpec {
            kit: kit_a,
            difficulty: Difficulty::Hard,
        },
        fighter_b: FighterSpec {
            kit: kit_b,
            difficulty: Difficulty::Hard,
        },
        max_ticks: 2400,
        random_seed: Some(seed),
        output_path: Some(env::temp_dir().join(format!("duelbot_{tag}_{seed}.json"))),
        tuning_path: None,
    }
}

#[test]
fn duels_complete_within_the_tick_limit() {
    let cfg = config(Kit::Sword, Kit::Axe, 100, "complete");
    let result = run_headless_duel(&cfg).unwrap();
    assert!(result.ticks >= 1);
    assert!(result.ticks <= cfg.max_ticks);
}

#[test]
fn same_seed_reproduces_the_same_duel() {
    let a = run_headless_duel(&config(Kit::Sword, Kit::Bow, 7, "det_a")).unwrap();
    let b = run_headless_duel(&config(Kit::Sword, Kit::Bow, 7, "det_b")).unwrap();
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.ticks, b.ticks);
    assert_eq!(a.fighters, b.fighters);
}

#[test]
fn a_winner_implies_a_dead_loser() {
    for seed in [1u64, 2, 3] {
        let result = run_headless_duel(&config(Kit::Crystal, Kit::Shield, seed, "winner")).unwrap();
        if let Some(winner) = result.winner {
            let loser = match winner {
                Side::A => Side::B,
                Side::B => Side::A,
            };
            assert_eq!(result.fighters[loser.index()].final_health, 0.0);
            assert!(result.fighters[winner.index()].final_health > 0.0);
        }
    }
}

#[test]
fn every_kit_pairing_with_itself_runs_clean() {
    for kit in Kit::ALL {
        let result = run_headless_duel(&config(kit, kit, 9, "mirror")).unwrap();
        assert!(result.ticks >= 1, "{kit} mirror never ran");
    }
}

#[test]
fn config_loads_from_a_json_file() {
    let path: PathBuf = env::temp_dir().join("duelbot_config_load.json");
    std::fs::write(
        &path,
        r#"{
            "fighter_a": { "kit": "Rod", "difficulty": "Medium" },
            "fighter_b": { "kit": "Potion", "difficulty": "Hard" },
            "max_ticks": 500,
            "random_seed": 11
        }"#,
    )
    .unwrap();
    let mut config = HeadlessDuelConfig::load_from_file(&path).unwrap();
    assert_eq!(config.max_ticks, 500);
    assert_eq!(config.random_seed, Some(11));
    config.output_path = Some(env::temp_dir().join("duelbot_config_load_out.json"));
    let result = run_headless_duel(&config).unwrap();
    assert!(result.ticks <= 500);
}

#[test]
fn missing_config_file_is_an_error() {
    let err = HeadlessDuelConfig::load_from_file(
        &env::temp_dir().join("duelbot_definitely_missing.json"),
    );
    assert!(err.is_err());
}
