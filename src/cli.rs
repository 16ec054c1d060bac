//! Command-line arguments for the headless duel runner

use std::path::PathBuf;

use clap::Parser;

/// Run a bot-versus-bot duel without a user interface.
#[derive(Parser, Debug)]
#[command(name = "duelbot", version, about)]
pub struct Args {
    /// Path to the duel config JSON file.
    pub config: PathBuf,

    /// Override the config's combat log output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the config's random seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the config's tick limit.
    #[arg(long)]
    pub max_ticks: Option<u32>,
}
