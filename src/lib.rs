//! Grid Snake - the classic arcade snake for the terminal
//!
//! This library provides:
//! - Core game rules with no I/O (game module)
//! - The cadence-gated frame loop (modes module)
//! - Keyboard, drawing and sound collaborators (input, render, audio modules)

pub mod audio;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
