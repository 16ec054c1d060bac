//! Combat logging
//!
//! Records tick-stamped combat events for post-duel analysis. Kit routines
//! and the shared combat helpers write entries as they act; the headless
//! runner saves the log as JSON next to duel metadata.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

/// A single entry in the combat log.
#[derive(Debug, Clone, Serialize)]
pub struct CombatLogEntry {
    /// Simulation tick at which the event happened.
    pub tick: u32,
    /// The type of event.
    pub event_type: CombatLogEventType,
    /// Human-readable description of the event.
    pub message: String,
}

/// Types of combat log events for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatLogEventType {
    /// Damage dealt
    Damage,
    /// Healing done
    Healing,
    /// A kit routine fired its signature action
    KitAction,
    /// Status effect applied
    Effect,
    /// A fighter died
    Death,
    /// Duel event (start, end, timeout)
    MatchEvent,
}

/// The combat log storing all events of one duel.
#[derive(Debug, Default)]
pub struct CombatLog {
    /// All log entries in chronological order.
    pub entries: Vec<CombatLogEntry>,
    /// Current simulation tick, stamped onto new entries.
    pub tick: u32,
}

/// Per-fighter summary written alongside the log.
#[derive(Debug, Clone, Serialize)]
pub struct FighterMetadata {
    pub label: String,
    pub kit: String,
    pub difficulty: String,
    pub max_health: f32,
    pub final_health: f32,
    pub hits_landed: u32,
    pub hits_taken: u32,
    pub damage_dealt: f32,
    pub damage_taken: f32,
    pub final_position: (f32, f32, f32),
}

/// Duel summary written alongside the log.
#[derive(Debug, Clone, Serialize)]
pub struct DuelMetadata {
    /// Label of the winning fighter, or `None` for a draw/timeout.
    pub winner: Option<String>,
    pub ticks: u32,
    pub random_seed: Option<u64>,
    pub fighters: Vec<FighterMetadata>,
}

#[derive(Serialize)]
struct DuelLogFile<'a> {
    metadata: &'a DuelMetadata,
    entries: &'a [CombatLogEntry],
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write combat log: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize combat log: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CombatLog {
    /// Clear the log for a new duel.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.tick = 0;
    }

    /// Advance the tick stamp used for new entries.
    pub fn set_tick(&mut self, tick: u32) {
        self.tick = tick;
    }

    /// Add a new entry to the log.
    pub fn log(&mut self, event_type: CombatLogEventType, message: String) {
        self.entries.push(CombatLogEntry {
            tick: self.tick,
            event_type,
            message,
        });
    }

    /// Log a damage event. `kind` names the delivery (melee, smash, ...).
    pub fn damage(&mut self, attacker: &str, amount: f32, kind: &str) {
        self.log(
            CombatLogEventType::Damage,
            format!("{attacker} hits for {amount:.1} ({kind})"),
        );
    }

    /// Log a healing event.
    pub fn healing(&mut self, actor: &str, amount: f32) {
        self.log(
            CombatLogEventType::Healing,
            format!("{actor} recovers {amount:.1} health"),
        );
    }

    /// Log a kit routine's signature action.
    pub fn kit_action(&mut self, actor: &str, action: &str) {
        self.log(CombatLogEventType::KitAction, format!("{actor} {action}"));
    }

    /// Get entries filtered by event type.
    pub fn filter_by_type(&self, event_type: CombatLogEventType) -> Vec<&CombatLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Get the last N entries.
    pub fn recent(&self, count: usize) -> Vec<&CombatLogEntry> {
        self.entries.iter().rev().take(count).rev().collect()
    }

    /// Save the log and duel metadata as pretty JSON.
    ///
    /// Returns the path written. When `path` is `None` a timestamped file
    /// name in the working directory is used.
    pub fn save_to_file(
        &self,
        metadata: &DuelMetadata,
        path: Option<&Path>,
    ) -> Result<PathBuf, LogError> {
        let file = DuelLogFile {
            metadata,
            entries: &self.entries,
        };
        let json = serde_json::to_string_pretty(&file)?;
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let stamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                PathBuf::from(format!("duel_log_{stamp}.json"))
            }
        };
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
