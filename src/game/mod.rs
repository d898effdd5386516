//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies, so it can be driven and tested without a terminal.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, GameConfig};
pub use engine::{SimulationState, TickOutcome};
pub use state::{CollisionType, Position, Snake};
