#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Movement, navigation and validation core for the sandworm arcade game.
//! Each game tick the engine computes the next position of every body
//! segment of the worm, detects boundary collisions, refuses an instant
//! 180 degree reversal onto the neck, and escapes to a randomized
//! perpendicular heading when the default path runs off the board.
//! Rendering, input wiring and score presentation live outside this crate
//! and consume the per-tick [engine::GameState] snapshots.
//!
//! The usual entry point is a [config::GameConfig] (a device class plus
//! the starting layout), from which [config::GameConfig::build_state]
//! assembles the starting [engine::GameState]; the UI layer then drives
//! [engine::GameState::tick] on its frame interval, handing in the latest
//! pending input direction, if any.

use config::GameConfig;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod movement;
pub mod navigation;
pub mod types;

/// Loads a game configuration from a JSON fixture string
pub fn config_fixture(fixture: &str) -> GameConfig {
    let c: Result<GameConfig, _> = serde_json::from_str(fixture);
    c.expect("the json literal is valid")
}
