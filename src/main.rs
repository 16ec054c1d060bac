use clap::Parser;
use tracing_subscriber::EnvFilter;

use duelbot::cli::Args;
use duelbot::headless::{run_headless_duel, HeadlessDuelConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = HeadlessDuelConfig::load_from_file(&args.config)?;
    if let Some(output) = args.output {
        config.output_path = Some(output);
    }
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }
    config.validate()?;

    let result = run_headless_duel(&config)?;

    match result.winner {
        Some(side) => println!(
            "winner: {} after {} ticks",
            result.fighters[side.index()].label, result.ticks
        ),
        None => println!("draw after {} ticks", result.ticks),
    }
    for fighter in &result.fighters {
        println!(
            "  {}: {:.1} hp, {} hits landed, {:.1} damage dealt",
            fighter.label, fighter.final_health, fighter.hits_landed, fighter.damage_dealt
        );
    }
    Ok(())
}
