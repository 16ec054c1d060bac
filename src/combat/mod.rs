//! Combat recording

pub mod log;

pub use log::{CombatLog, CombatLogEntry, CombatLogEventType};
