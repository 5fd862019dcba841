//! Grid Snake - a tick-driven Snake game for the terminal
//!
//! This library provides:
//! - Core game logic with a fixed-tick [`game::GameLoop`] (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive scheduler that drives ticks (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
