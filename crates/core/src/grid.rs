//! Grid module - dense, generic 2D container
//!
//! `Grid2D<T>` stores `width * height` cells in a single flat vector in
//! row-major order (`y * width + x`), the same layout the board has always
//! used, but generic over the cell type so it can hold piece shapes
//! (`Grid2D<bool>`), the board (`Grid2D<Option<&str>>`) and terminal
//! framebuffers alike.
//!
//! Coordinates are `(x, y)`: x ranges over columns (left to right), y over
//! rows (top to bottom). Every traversal is row-major: y ascending in the
//! outer loop, x ascending in the inner loop.
//!
//! Rectangular sub-ranges are half-open `[start, end)`. `end` is clamped to
//! the grid size and an inverted or out-of-range rectangle simply visits
//! nothing, so region helpers never fail.
//!
//! Indexing with `grid[(x, y)]` panics when the coordinate is out of bounds.
//! Use [`Grid2D::get`], [`Grid2D::get_mut`] or [`Grid2D::set`] for checked
//! access.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A cell coordinate `(x, y)`
pub type Coord = (usize, usize);

/// Iterator over cell values in row-major order
pub type Values<'a, T> = std::slice::Iter<'a, T>;

/// Mutable iterator over cell values in row-major order
pub type ValuesMut<'a, T> = std::slice::IterMut<'a, T>;

/// Error returned when nested rows do not describe a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows at all (or, for piece shapes, no columns)
    Empty,
    /// A row whose length differs from the first row
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => f.write_str("shape must have at least one row and one column"),
            ShapeError::RaggedRow { row, len, expected } => {
                write!(f, "row at index {} has size {}, not {}", row, len, expected)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Fixed-size 2D grid with row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    /// Flat cells, row-major order (y * width + x)
    cells: Vec<T>,
}

/// Number of cells in a `width x height` grid; panics on overflow
fn cell_count(width: usize, height: usize) -> usize {
    match width.checked_mul(height) {
        Some(len) => len,
        None => panic!("grid size {}x{} overflows usize", width, height),
    }
}

impl<T> Grid2D<T> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// Zero dimensions are allowed and produce an empty grid. Panics if
    /// `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        let len = cell_count(width, height);
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, T::default);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; cell_count(width, height)],
        }
    }

    /// Build a grid from nested rows, copying `rows[y][x]` into cell `(x, y)`.
    ///
    /// The first row's length is the authoritative width. Fails with
    /// [`ShapeError::Empty`] when there are no rows and with
    /// [`ShapeError::RaggedRow`] when any row has a different length. No grid
    /// is produced on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::grid::{Grid2D, ShapeError};
    ///
    /// let grid = Grid2D::from_nested(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (2, 2));
    /// assert_eq!(grid[(1, 0)], 2);
    /// assert_eq!(grid[(0, 1)], 3);
    ///
    /// let ragged = vec![vec![1, 2], vec![3]];
    /// assert_eq!(
    ///     Grid2D::from_nested(&ragged),
    ///     Err(ShapeError::RaggedRow { row: 1, len: 1, expected: 2 })
    /// );
    /// ```
    pub fn from_nested<R>(rows: &[R]) -> Result<Self, ShapeError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let (width, height) = nested_shape(rows.iter().map(|row| row.as_ref().len()))?;

        let mut cells = Vec::with_capacity(cell_count(width, height));
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Owning variant of [`Grid2D::from_nested`]; moves cells instead of cloning.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let (width, height) = nested_shape(rows.iter().map(Vec::len))?;

        let mut cells = Vec::with_capacity(cell_count(width, height));
        for row in rows {
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if `(x, y)` addresses a cell of this grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index_of(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        match self.index_of(x, y) {
            Some(idx) => Some(&mut self.cells[idx]),
            None => None,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow row `y` as a slice of exactly `width` cells
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// The flat row-major backing store
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Copy the grid back out into nested rows
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Lazy sequence of cell values in row-major order
    pub fn values(&self) -> Values<'_, T> {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Lazy sequence of `(x, y, value)` in row-major order.
    ///
    /// Yields exactly `width * height` entries; each call starts over.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            width: self.width,
            next: 0,
            inner: self.cells.iter(),
        }
    }

    /// Visit every cell as `f(value, x, y, grid)` in row-major order
    pub fn for_each_cell<F>(&self, f: F)
    where
        F: FnMut(&T, usize, usize, &Self),
    {
        self.for_each_cell_in((0, 0), (self.width, self.height), f);
    }

    /// Visit the cells of the half-open rectangle `[start, end)`.
    ///
    /// `end` is clamped to the grid; an empty or inverted rectangle visits
    /// nothing.
    pub fn for_each_cell_in<F>(&self, start: Coord, end: Coord, mut f: F)
    where
        F: FnMut(&T, usize, usize, &Self),
    {
        for (x, y) in self.region(start, end) {
            f(&self.cells[y * self.width + x], x, y, self);
        }
    }

    /// Build a new grid of the same size where cell `(x, y)` is
    /// `f(value, x, y, result)`.
    ///
    /// The last argument is the result grid being built, not `self`: cells
    /// already produced earlier in row-major order are visible through it,
    /// the rest still hold `U::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::grid::Grid2D;
    ///
    /// // Running count along each row, read back from the partial result.
    /// let ones = Grid2D::filled(3, 1, 1u32);
    /// let sums = ones.map(|v, x, y, out| if x == 0 { *v } else { out[(x - 1, y)] + v });
    /// assert_eq!(sums.to_nested(), vec![vec![1, 2, 3]]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Grid2D<U>
    where
        U: Default,
        F: FnMut(&T, usize, usize, &Grid2D<U>) -> U,
    {
        let mut result = Grid2D::new(self.width, self.height);
        for (idx, value) in self.cells.iter().enumerate() {
            let (x, y) = (idx % self.width, idx / self.width);
            let mapped = f(value, x, y, &result);
            result.cells[idx] = mapped;
        }
        result
    }

    /// Overwrite every cell with `value`; returns `self` for chaining
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.cells.fill(value);
        self
    }

    /// Overwrite the half-open rectangle `[start, end)` with `value`.
    ///
    /// Clamped like [`Grid2D::for_each_cell_in`].
    pub fn fill_in(&mut self, value: T, start: Coord, end: Coord) -> &mut Self
    where
        T: Clone,
    {
        let (x0, y0) = start;
        let x1 = end.0.min(self.width);
        let y1 = end.1.min(self.height);
        if x0 >= x1 {
            return self;
        }
        for y in y0..y1 {
            let row = y * self.width;
            self.cells[row + x0..row + x1].fill(value.clone());
        }
        self
    }

    /// True if `pred` holds for every cell; stops at the first failure.
    ///
    /// Vacuously true for an empty grid.
    pub fn all_cells<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&T, usize, usize, &Self) -> bool,
    {
        self.entries().all(|(x, y, value)| pred(value, x, y, self))
    }

    /// True if `pred` holds for at least one cell; stops at the first hit.
    pub fn any_cell<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&T, usize, usize, &Self) -> bool,
    {
        self.entries().any(|(x, y, value)| pred(value, x, y, self))
    }

    /// [`Grid2D::all_cells`] restricted to `[start, end)`
    pub fn all_cells_in<P>(&self, start: Coord, end: Coord, mut pred: P) -> bool
    where
        P: FnMut(&T, usize, usize, &Self) -> bool,
    {
        self.region(start, end)
            .all(|(x, y)| pred(&self.cells[y * self.width + x], x, y, self))
    }

    /// [`Grid2D::any_cell`] restricted to `[start, end)`
    pub fn any_cell_in<P>(&self, start: Coord, end: Coord, mut pred: P) -> bool
    where
        P: FnMut(&T, usize, usize, &Self) -> bool,
    {
        self.region(start, end)
            .any(|(x, y)| pred(&self.cells[y * self.width + x], x, y, self))
    }

    /// Row-major coordinates of `[start, end)` with `end` clamped
    fn region(&self, start: Coord, end: Coord) -> impl Iterator<Item = Coord> {
        let (x0, y0) = start;
        let x1 = end.0.min(self.width);
        let y1 = end.1.min(self.height);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

/// Width/height of nested rows given their lengths in order
fn nested_shape(mut lens: impl Iterator<Item = usize>) -> Result<(usize, usize), ShapeError> {
    let width = lens.next().ok_or(ShapeError::Empty)?;
    let mut height = 1;
    for len in lens {
        if len != width {
            return Err(ShapeError::RaggedRow {
                row: height,
                len,
                expected: width,
            });
        }
        height += 1;
    }
    Ok((width, height))
}

impl<T> Index<Coord> for Grid2D<T> {
    type Output = T;

    fn index(&self, (x, y): Coord) -> &T {
        match self.index_of(x, y) {
            Some(idx) => &self.cells[idx],
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<Coord> for Grid2D<T> {
    fn index_mut(&mut self, (x, y): Coord) -> &mut T {
        match self.index_of(x, y) {
            Some(idx) => &mut self.cells[idx],
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

/// Iterator returned by [`Grid2D::entries`]
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    width: usize,
    next: usize,
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.next()?;
        let idx = self.next;
        self.next += 1;
        Some((idx % self.width, idx / self.width, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

// Serialized as nested rows, e.g. `[[true,true],[true,false]]`.
impl<T: Serialize> Serialize for Grid2D<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid2D<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid2D::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
