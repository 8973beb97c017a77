//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management. It has zero
//! dependencies on UI, timing sources, or I/O, which keeps it deterministic
//! and directly testable.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game::{GameState, Piece};
pub use pieces::{get_template, spawn_x, CellOffset, ShapeMatrix};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_score, line_clear_score};
