#![warn(clippy::all, missing_docs)]

//! Core selection logic for the WC2 mission launcher.
//!
//! This crate hosts the compiled-in mission catalog, the four-phase
//! selection wizard, and the batch-command emitter used by the terminal
//! UI. It has no terminal dependencies of its own.

pub mod catalog;
pub mod launch;
pub mod select;

pub use catalog::{mission_letter, GameId, GameInfo, MissionType, SystemInfo};
pub use launch::{BatchWriter, LaunchCommand, LaunchError, WrittenBatch, BATCH_FILE_NAME};
pub use select::{Command, Effect, Phase, Selector};
