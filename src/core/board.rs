//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that settled there. Uses a flat array for cache locality and
//! zero-allocation. Coordinates: (x, y) with x in 0..9 left to right and
//! y in 0..19 top to bottom. Negative y is "above the board" and is legal for
//! an active piece that is still entering the visible area.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a piece cell may occupy (x, y).
    ///
    /// Open means: inside the side walls, above the floor, and not overlapping
    /// a settled cell. Rows above the visible board (y < 0) are open - a fresh
    /// piece may still be entering from the top.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: rows above it shift down one and a fresh empty row
    /// appears at the top. Rows below `y` are untouched.
    pub fn remove_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // Note: copy_within handles overlapping ranges safely.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the SAME index is re-examined
    /// before the scan advances: the row that shifted into the slot may itself
    /// be full. A plain decrementing pass would skip it.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared: u32 = 0;
        let mut y = BOARD_HEIGHT as usize - 1;

        loop {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }

        cleared
    }

    /// Count of settled (non-empty) cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill an entire row with one kind (test scaffolding)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, kind: crate::types::PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                let end = start + width;
                self.cells[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_open_above_board() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceKind::T));

        // Rows above the visible area are open even over occupied columns.
        assert!(board.is_open(4, -1));
        assert!(board.is_open(0, -3));

        // But the walls still apply above the board.
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(BOARD_WIDTH as i8, -1));
    }

    #[test]
    fn test_is_open_walls_floor_and_occupancy() {
        let mut board = Board::new();
        assert!(board.is_open(0, 0));
        assert!(board.is_open(9, 19));
        assert!(!board.is_open(-1, 5));
        assert!(!board.is_open(10, 5));
        assert!(!board.is_open(5, 20));

        board.set(5, 10, Some(PieceKind::S));
        assert!(!board.is_open(5, 10));
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(1, 1, Some(PieceKind::O));
        board.set(2, 3, Some(PieceKind::T));

        board.remove_row(2);

        // Rows 0 and 1 moved down one; row 3 stayed.
        assert_eq!(board.get(0, 1), Some(Some(PieceKind::I)));
        assert_eq!(board.get(1, 2), Some(Some(PieceKind::O)));
        assert_eq!(board.get(2, 3), Some(Some(PieceKind::T)));
        // Top row is fresh.
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, 0), Some(None));
        }
    }

    #[test]
    fn test_clear_full_rows_rescans_shifted_row() {
        let mut board = Board::new();
        // Two adjacent full rows: after removing row 19 the old row 18 shifts
        // into slot 19 and must be caught by re-examining the same index.
        board.fill_row(18, PieceKind::L);
        board.fill_row(19, PieceKind::J);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_keeps_partial_rows() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::I);
        board.set(3, 18, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 1);

        // The partial row moved down into the freed slot.
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.occupied_count(), 1);
    }
}
