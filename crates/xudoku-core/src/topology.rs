//! Static unit and peer topology.
//!
//! A *unit* is an ordered group of 9 cells that must collectively contain
//! each digit exactly once: the 9 rows, 9 columns and 9 boxes, plus the two
//! main diagonals when the Sudoku-X variant is enabled. A cell's *peers*
//! are all other cells sharing at least one unit with it.
//!
//! The topology is a pure function of the grid dimensions and the diagonal
//! flag. It is derived once, stored as plain index arrays, and read-only
//! for the rest of the process; propagators and the search borrow it
//! immutably.

use tinyvec::ArrayVec;

use crate::cell::Cell;

/// An ordered group of 9 cells constrained to contain each digit 1-9
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    cells: [Cell; 9],
}

impl Unit {
    fn new(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cells of this unit in order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns an iterator over the cells of this unit.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        self.cells.into_iter()
    }

    /// Returns `true` if the unit contains the cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl IntoIterator for &Unit {
    type Item = Cell;
    type IntoIter = std::array::IntoIter<Cell, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Unit ids containing one cell: row, column, box, and up to two diagonals.
type UnitIds = ArrayVec<[u8; 5]>;

/// Peer list of one cell: at most 32 entries (the center cell of a
/// diagonal-variant board).
type PeerList = ArrayVec<[Cell; 32]>;

/// The static structure of cells, units and peer relationships.
///
/// Built once at startup by [`Topology::standard`] or
/// [`Topology::with_diagonals`]; well-formed by construction, with no
/// failure modes.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Cell, Topology};
///
/// let plain = Topology::standard();
/// assert_eq!(plain.units().len(), 27);
/// assert_eq!(plain.peers(Cell::from_row_col(4, 4)).len(), 20);
///
/// // Sudoku-X adds the two main diagonals; the center cell sits on both.
/// let x = Topology::with_diagonals();
/// assert_eq!(x.units().len(), 28);
/// assert_eq!(x.peers(Cell::from_row_col(4, 4)).len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    units: Vec<Unit>,
    cell_units: Vec<UnitIds>,
    peers: Vec<PeerList>,
}

impl Topology {
    /// Builds the classic topology: 9 rows, 9 columns, 9 boxes.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(false)
    }

    /// Builds the Sudoku-X topology: rows, columns, boxes, and the two
    /// main diagonals (28 units total).
    #[must_use]
    pub fn with_diagonals() -> Self {
        Self::build(true)
    }

    fn build(diagonals: bool) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let unit_from = |cell_at: &dyn Fn(u8) -> Cell| {
            Unit::new(std::array::from_fn(|i| cell_at(i as u8)))
        };

        let mut units = Vec::with_capacity(28);
        for row in 0..9 {
            units.push(unit_from(&|i| Cell::from_row_col(row, i)));
        }
        for col in 0..9 {
            units.push(unit_from(&|i| Cell::from_row_col(i, col)));
        }
        for box_index in 0..9 {
            units.push(unit_from(&|i| {
                Cell::from_row_col((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
            }));
        }
        if diagonals {
            units.push(unit_from(&|i| Cell::from_row_col(i, i)));
            units.push(unit_from(&|i| Cell::from_row_col(i, 8 - i)));
        }

        let mut cell_units = vec![UnitIds::new(); Cell::COUNT];
        for (id, unit) in units.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let id = id as u8;
            for cell in unit {
                cell_units[cell.index()].push(id);
            }
        }

        let mut peers = vec![PeerList::new(); Cell::COUNT];
        for cell in Cell::all() {
            let mut seen = [false; Cell::COUNT];
            seen[cell.index()] = true;
            for &id in &cell_units[cell.index()] {
                for other in &units[id as usize] {
                    if !seen[other.index()] {
                        seen[other.index()] = true;
                        peers[cell.index()].push(other);
                    }
                }
            }
        }

        Self {
            units,
            cell_units,
            peers,
        }
    }

    /// Returns all units in row, column, box, diagonal order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the units containing a cell (3 for the classic topology;
    /// up to 5 with diagonals).
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.cell_units[cell.index()]
            .iter()
            .map(|&id| &self.units[id as usize])
    }

    /// Returns all other cells sharing at least one unit with `cell`.
    ///
    /// The order is deterministic: cells are listed in the order the
    /// containing units were derived.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }

    /// Returns `true` if this topology includes the two diagonal units.
    #[must_use]
    pub fn has_diagonals(&self) -> bool {
        self.units.len() == 28
    }
}
