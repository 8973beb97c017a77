//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame cadence (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity timing (milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_STEP_PER_LEVEL_MS: u32 = 100;
pub const DROP_INTERVAL_FLOOR_MS: u32 = 100;

/// Scoring constants
pub const POINTS_PER_LINE: u32 = 100;
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Falling-piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order (the spawn draw indexes into this)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
