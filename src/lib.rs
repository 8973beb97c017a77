//! Terminal falling-block puzzle.
//!
//! `core` is the deterministic game engine; `term` renders engine state into
//! a terminal framebuffer; `input` maps key events to engine actions. The
//! binary in `main.rs` wires the three together around a frame loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
