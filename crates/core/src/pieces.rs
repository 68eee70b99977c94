//! Pieces module - the fixed piece catalog
//!
//! Every piece pairs an opaque display color with a boolean occupancy grid
//! (`true` = filled cell, relative to the piece's top-left corner). The
//! shapes are written as nested literal rows and converted through
//! [`Grid2D::from_nested`] once, on first access. A malformed row in the
//! table is a startup failure, never something discovered mid-game.
//!
//! Order matters: hands are drawn by catalog index.

use std::sync::OnceLock;

use crate::grid::{Coord, Grid2D, ShapeError};

/// Literal piece shape: rows of occupancy flags
pub type ShapeRows = &'static [&'static [bool]];

/// A single piece definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceData {
    /// Display color (`#RRGGBB`), passed through to rendering
    pub color: &'static str,
    /// Occupancy grid of the shape
    pub format: Grid2D<bool>,
}

impl PieceData {
    pub fn width(&self) -> usize {
        self.format.width()
    }

    pub fn height(&self) -> usize {
        self.format.height()
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.format.values().filter(|&&filled| filled).count()
    }

    /// Offsets of the filled cells, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.format
            .entries()
            .filter(|&(_, _, &filled)| filled)
            .map(|(x, y, _)| (x, y))
    }
}

const T: bool = true;
const F: bool = false;

/// The piece table in declaration order: `(color, rows)`
pub const PIECE_TABLE: &[(&str, ShapeRows)] = &[
    // 2x2 square
    ("#99DD55", &[&[T, T], &[T, T]]),
    // Lines of 5
    ("#DB6355", &[&[T], &[T], &[T], &[T], &[T]]),
    ("#DB6355", &[&[T, T, T, T, T]]),
    // Lines of 4
    ("#E76A82", &[&[T, T, T, T]]),
    ("#E76A82", &[&[T], &[T], &[T], &[T]]),
    // Lines of 3
    ("#EF9548", &[&[T, T, T]]),
    ("#EF9548", &[&[T], &[T], &[T]]),
    // Lines of 2
    ("#FFC73D", &[&[T, T]]),
    ("#FFC73D", &[&[T], &[T]]),
    // Single cell
    ("#7889C3", &[&[T]]),
    // 3x3 square and the four big corners
    ("#4CD5AE", &[&[T, T, T], &[T, T, T], &[T, T, T]]),
    ("#4CD5AE", &[&[T, T, T], &[T, F, F], &[T, F, F]]),
    ("#4CD5AE", &[&[T, T, T], &[F, F, T], &[F, F, T]]),
    ("#4CD5AE", &[&[T, F, F], &[T, F, F], &[T, T, T]]),
    ("#4CD5AE", &[&[F, F, T], &[F, F, T], &[T, T, T]]),
];

static CATALOG: OnceLock<Vec<PieceData>> = OnceLock::new();

/// Process-wide, read-only list of pieces
pub struct PieceCatalog;

impl PieceCatalog {
    /// Convert a literal table into piece definitions.
    ///
    /// Fails on the first shape that is empty, zero-width or ragged.
    pub fn build(table: &[(&'static str, ShapeRows)]) -> Result<Vec<PieceData>, ShapeError> {
        table
            .iter()
            .map(|&(color, rows)| {
                let format = Grid2D::from_nested(rows)?;
                if format.width() == 0 {
                    return Err(ShapeError::Empty);
                }
                Ok(PieceData { color, format })
            })
            .collect()
    }

    /// All pieces in declaration order.
    ///
    /// Built from [`PIECE_TABLE`] on first call; panics if the table is
    /// malformed.
    pub fn get_all() -> &'static [PieceData] {
        CATALOG.get_or_init(|| match Self::build(PIECE_TABLE) {
            Ok(pieces) => pieces,
            Err(e) => panic!("invalid piece table: {}", e),
        })
    }

    pub fn get(index: usize) -> Option<&'static PieceData> {
        Self::get_all().get(index)
    }

    pub fn len() -> usize {
        Self::get_all().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_ragged_shape() {
        let table: &[(&str, ShapeRows)] = &[
            ("#000000", &[&[T]]),
            ("#FFFFFF", &[&[T, T], &[T]]),
        ];
        assert_eq!(
            PieceCatalog::build(table),
            Err(ShapeError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_build_rejects_empty_shapes() {
        let no_rows: &[(&str, ShapeRows)] = &[("#000000", &[])];
        assert_eq!(PieceCatalog::build(no_rows), Err(ShapeError::Empty));

        let no_columns: &[(&str, ShapeRows)] = &[("#000000", &[&[]])];
        assert_eq!(PieceCatalog::build(no_columns), Err(ShapeError::Empty));
    }

    #[test]
    fn test_static_table_builds() {
        let pieces = PieceCatalog::build(PIECE_TABLE).unwrap();
        assert_eq!(pieces.len(), PIECE_TABLE.len());
        assert_eq!(pieces.as_slice(), PieceCatalog::get_all());
    }

    #[test]
    fn test_occupied_offsets() {
        let corner = PieceCatalog::get(11).unwrap();
        let cells: Vec<_> = corner.occupied().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)]);
        assert_eq!(corner.cell_count(), 5);
    }
}
