//! Sokoban puzzle engine.
//! - Level parsing (glyph or digit form) with up-front validation
//! - Movement/push rules as a single `step` transition
//! - Glyph rendering for display

pub mod console_interface;
pub mod core;
pub mod models;

#[cfg(test)]
mod test;

pub use crate::core::{
    Cell, Direction, GameState, LoadError, ParseMode, StepOutcome, UserAction, Vec2,
    load_level_file, parse_level, render, step,
};
