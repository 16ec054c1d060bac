//! duelbot: a host-agnostic PvP bot decision engine
//!
//! Each bot is a [`engine::BotController`] built from a [`kit::Kit`] and a
//! [`difficulty::DifficultyProfile`]. Every tick the host hands it fresh
//! [`engine::ActorState`] snapshots of the bot and its target; the
//! controller answers with a batch of [`engine::Action`] values the host
//! applies however its world works. A small built-in [`sim`] host and a
//! [`headless`] runner make the engine usable standalone.

pub mod cli;
pub mod combat;
pub mod constants;
pub mod difficulty;
pub mod engine;
pub mod headless;
pub mod kit;
pub mod rng;
pub mod sim;
pub mod tuning;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use engine::{Action, ActionBuffer, ActorState, BotController};
pub use kit::Kit;
