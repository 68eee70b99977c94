//! Board module - manages the playfield grid
//!
//! The board is a `Grid2D` where each cell is either empty or holds the color
//! of the piece that filled it. Default size is 10x10.
//! Coordinates: (x, y) with x left to right, y top to bottom. A piece placed at
//! (x, y) has its top-left shape corner on that cell.

use crate::grid::{Coord, Grid2D};
use crate::pieces::PieceData;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// A board cell: `None` when empty, otherwise the color of the placed piece
pub type Cell = Option<&'static str>;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid2D<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Grid2D::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x, y).copied()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        self.cells.set(x, y, cell)
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `shape` can be placed with its origin at (x, y).
    ///
    /// Every filled shape cell must land inside the board on an empty cell.
    /// Empty shape cells may hang over the edge.
    pub fn fits(&self, shape: &Grid2D<bool>, x: usize, y: usize) -> bool {
        shape.all_cells(|&filled, dx, dy, _| {
            !filled || offset((x, y), (dx, dy)).is_some_and(|(cx, cy)| self.is_free(cx, cy))
        })
    }

    /// Check whether `shape` fits at any origin on the board
    pub fn fits_anywhere(&self, shape: &Grid2D<bool>) -> bool {
        self.cells.any_cell(|_, x, y, _| self.fits(shape, x, y))
    }

    /// Place a piece with its origin at (x, y).
    /// Returns true if successful, false if any filled cell is out of bounds
    /// or occupied. Nothing is written on failure.
    pub fn place(&mut self, piece: &PieceData, x: usize, y: usize) -> bool {
        if !self.fits(&piece.format, x, y) {
            return false;
        }

        for delta in piece.occupied() {
            if let Some((cx, cy)) = offset((x, y), delta) {
                self.cells.set(cx, cy, Some(piece.color));
            }
        }

        true
    }

    /// Empty the half-open rectangle `[start, end)`; clamped to the board
    pub fn clear_region(&mut self, start: Coord, end: Coord) {
        self.cells.fill_in(None, start, end);
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.all_cells(|cell, _, _, _| cell.is_none())
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the underlying grid
    pub fn cells(&self) -> &Grid2D<Cell> {
        &self.cells
    }

    /// Occupancy mask of the board (`true` = filled)
    pub fn occupancy(&self) -> Grid2D<bool> {
        self.cells.map(|cell, _, _, _| cell.is_some())
    }
}

/// `origin + delta`, or `None` when either axis overflows
fn offset(origin: Coord, delta: Coord) -> Option<Coord> {
    Some((origin.0.checked_add(delta.0)?, origin.1.checked_add(delta.1)?))
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
