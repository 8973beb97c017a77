//! Pieces module - the 7-shape catalog and matrix rotation
//!
//! Shapes are small boolean matrices anchored at their top-left cell. Unlike
//! rotation-system tables, the matrix itself is what rotates: a piece carries
//! its current matrix and rotation rewrites it in place.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Maximum matrix extent on either axis (the I piece spans 4)
pub const SHAPE_MAX: usize = 4;

/// Offset of an occupied cell relative to the matrix's top-left corner
pub type CellOffset = (i8, i8);

/// A piece shape: boolean occupancy matrix with its current dimensions.
///
/// `width`/`height` track the live extent; the backing array stays 4x4 so the
/// type is `Copy` and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    width: u8,
    height: u8,
}

impl ShapeMatrix {
    /// Build from pattern rows ('#' or any non-'.' marks a cell).
    ///
    /// Rows must be non-empty and of equal length; only the catalog and tests
    /// construct shapes, so malformed patterns are a programming error.
    fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = ch != '.';
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is occupied
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Occupied cells as (dx, dy) offsets from the anchor, row-major.
    ///
    /// Every catalog shape has exactly four cells, in any rotation.
    pub fn cells(&self) -> ArrayVec<CellOffset, 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y as usize][x as usize] {
                    let _ = out.try_push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Clockwise 90 degree rotation: transpose + reverse rows
    /// (new[col][rows-1-row] = old[row][col]). Width and height swap.
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            cells: [[false; SHAPE_MAX]; SHAPE_MAX],
            width: self.height,
            height: self.width,
        };

        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                out.cells[x][self.height as usize - 1 - y] = self.cells[y][x];
            }
        }

        out
    }
}

/// Get the canonical spawn shape for a piece kind
pub fn get_template(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&["####"]),
        PieceKind::O => ShapeMatrix::from_rows(&["##", "##"]),
        PieceKind::T => ShapeMatrix::from_rows(&["###", ".#."]),
        PieceKind::L => ShapeMatrix::from_rows(&["###", "#.."]),
        PieceKind::J => ShapeMatrix::from_rows(&["###", "..#"]),
        PieceKind::S => ShapeMatrix::from_rows(&["##.", ".##"]),
        PieceKind::Z => ShapeMatrix::from_rows(&[".##", "##."]),
    }
}

/// Spawn column for a shape: horizontally centered on the board
pub fn spawn_x(shape: &ShapeMatrix) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width / 2) as i8
}
