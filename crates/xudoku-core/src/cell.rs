//! Board positions as small integer indices.
//!
//! The traditional coordinate system names cells by row letter and column
//! digit (`A1` through `I9`). Internally a cell is a single index 0-80 in
//! row-major order, so unit and peer relationships can be precomputed into
//! plain index arrays and candidate lookups are a single array access.

use std::fmt::{self, Display};

/// One of the 81 positions of the 9x9 grid, stored as a row-major index.
///
/// Cell identity is immutable; the ordering derived from the index (`A1`,
/// `A2`, .., `I9`) is the canonical order used as the deterministic
/// tie-break during search.
///
/// # Examples
///
/// ```
/// use xudoku_core::Cell;
///
/// let cell = Cell::from_row_col(4, 4);
/// assert_eq!(cell.index(), 40);
/// assert_eq!(cell.to_string(), "E5");
/// assert_eq!(cell.box_index(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// The number of cells on the board.
    pub const COUNT: usize = 81;

    /// Creates a cell from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cells in canonical (row-major) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use xudoku_core::Cell;
    ///
    /// assert_eq!(Cell::all().count(), 81);
    /// assert_eq!(Cell::all().next().map(|c| c.to_string()), Some("A1".into()));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self)
    }
}

impl Display for Cell {
    /// Formats the cell in the traditional `A1`..`I9` naming.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = self.col() + 1;
        write!(f, "{row}{col}")
    }
}
