//! Terminal rendering module.
//!
//! Renders the game into a simple styled-character framebuffer and flushes it
//! to the terminal with diffing. The view itself (`GameView`) is pure so it
//! can be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
