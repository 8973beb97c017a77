//! Game state module - the falling-block engine
//!
//! Ties together board, pieces, RNG, and scoring. Every operation is total:
//! invalid moves and rotations are rejected with a `bool`, never an error.
//! The only terminal condition is game over, and it is a normal end state
//! recoverable through an explicit reset.

use crate::core::{
    drop_interval_ms, get_template, level_for_score, line_clear_score, spawn_x, Board, ShapeMatrix,
    SimpleRng,
};
use crate::types::{GameAction, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    /// Current shape matrix. Rotation rewrites it, so it lives on the piece.
    pub shape: ShapeMatrix,
    /// Board column of the shape matrix's top-left cell
    pub x: i8,
    /// Board row of the shape matrix's top-left cell
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    /// Host timestamp (ms) of the last automatic gravity step
    last_drop_ms: u64,
}

impl GameState {
    /// Create a new game with the given RNG seed. The first piece is spawned
    /// immediately; there is always exactly one active piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(draw_kind(&mut rng));

        Self {
            board: Board::new(),
            active,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            last_drop_ms: 0,
        }
    }

    /// Start over: empty board, zeroed score, level 1, a fresh piece, and the
    /// gravity timer re-armed at `now_ms`. The RNG state carries forward so a
    /// restarted game sees a new piece sequence.
    pub fn reset(&mut self, now_ms: u64) {
        *self = Self::new(self.rng.state());
        self.last_drop_ms = now_ms;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Pure fit predicate: every occupied cell of `piece`, shifted by
    /// (dx, dy), must land on an open board position. Rows above the top are
    /// open; walls, floor, and settled cells are not.
    pub fn piece_fits(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece
            .shape
            .cells()
            .iter()
            .all(|&(cx, cy)| self.board.is_open(piece.x + cx + dx, piece.y + cy + dy))
    }

    /// Try to translate the active piece. This is the sole movement primitive
    /// for left, right, and soft drop.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.piece_fits(&self.active, dx, dy) {
            self.active.x += dx;
            self.active.y += dy;
            return true;
        }
        false
    }

    /// Rotate the active shape clockwise if the rotated matrix fits at the
    /// current anchor. No wall kicks: near walls or the stack this may simply
    /// fail, and the shape is left untouched.
    pub fn rotate(&mut self) -> bool {
        let rotated = Piece {
            shape: self.active.shape.rotated_cw(),
            ..self.active
        };

        if self.piece_fits(&rotated, 0, 0) {
            self.active = rotated;
            return true;
        }
        false
    }

    /// Drop the active piece as far as it goes and merge it immediately
    pub fn hard_drop(&mut self) {
        while self.try_move(0, 1) {}
        self.merge_piece();
    }

    /// Commit the active piece into the board, settle full lines and scoring,
    /// then spawn the next piece. Cells still above the top row vanish.
    pub fn merge_piece(&mut self) {
        for (dx, dy) in self.active.shape.cells() {
            let y = self.active.y + dy;
            if y >= 0 {
                self.board.set(self.active.x + dx, y, Some(self.active.kind));
            }
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.lines += cleared;
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared, self.level));
            self.level = level_for_score(self.score);
        }

        self.spawn_piece();
    }

    /// Replace the active piece with a uniformly drawn fresh one. A spawn
    /// that cannot fit ends the game.
    pub fn spawn_piece(&mut self) {
        self.active = Piece::spawn(draw_kind(&mut self.rng));
        if !self.piece_fits(&self.active, 0, 0) {
            self.game_over = true;
        }
    }

    /// Gravity interval at the current level (milliseconds)
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Automatic gravity step, called once per host frame with the current
    /// host time. At most one row per call; skipped frames are not caught up.
    /// Returns whether a gravity step (move or merge) happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }

        let interval = self.drop_interval_ms() as u64;
        if now_ms.saturating_sub(self.last_drop_ms) > interval {
            if !self.try_move(0, 1) {
                // Landed: commit and move on to the next piece.
                self.merge_piece();
            }
            self.last_drop_ms = now_ms;
            return true;
        }

        false
    }

    /// Apply a game action. While game over, everything except `Restart` is
    /// ignored; while playing, `Restart` is ignored instead.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        if self.game_over {
            return match action {
                GameAction::Restart => {
                    self.reset(now_ms);
                    true
                }
                _ => false,
            };
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Restart => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Uniform draw from the 7-entry catalog
fn draw_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}
