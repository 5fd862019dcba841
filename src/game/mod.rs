//! Core game logic module for Snake
//!
//! Everything here is free of I/O and rendering. The [`GameLoop`] owns the
//! state and is advanced one [`GameLoop::tick`] at a time by whoever drives it.

pub mod action;
pub mod config;
pub mod engine;
pub mod inbox;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameLoop, TickOutcome, place_food};
pub use inbox::DirectionInbox;
pub use state::{GameOverReason, GameState, Position, Snake};
