//! Headless duel running
//!
//! Pits two bots against each other inside the built-in simulation with no
//! interface, driven by a JSON config file. Useful for automated balance
//! sweeps and regression runs.

pub mod config;
pub mod runner;

pub use config::{ConfigError, FighterSpec, HeadlessDuelConfig};
pub use runner::{run_headless_duel, DuelResult, FighterResult, HeadlessError};
