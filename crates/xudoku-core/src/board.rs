//! The mutable per-cell candidate store.
//!
//! A [`Board`] maps every cell to the set of digits still possible there.
//! It is the value threaded through the propagators and the search: each
//! propagation step mutates a board in place, and each search branch clones
//! the board before a speculative assignment so sibling branches never
//! observe each other's mutations. The store is a flat array of 81 bitsets,
//! so that clone is a small memcpy.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{
    cell::Cell, digit::Digit, digit_set::DigitSet, topology::Topology, trace::TraceSink,
};

/// Error returned when a serialized grid is not 81 characters over the
/// alphabet `1-9` and `.`.
///
/// Raised by parsing and surfaced immediately to the caller; no solving
/// work starts on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MalformedGridError {
    /// The input does not have exactly 81 characters.
    #[display("grid text must be exactly 81 characters, got {len}")]
    BadLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character outside `1-9` and `.`.
    #[display("invalid character {ch:?} at offset {index}")]
    BadChar {
        /// Offset of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

/// Candidate store: one [`DigitSet`] per cell.
///
/// A cell is *solved* when its set has exactly one element. A consistent
/// board never holds an empty set; an empty set signals that the current
/// search branch is unsatisfiable (see [`Board::has_contradiction`]).
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, Cell, Digit};
///
/// let board: Board =
///     "9.1....8.8.5.7..4.2.4....6...7......5..............83.3..6......9................"
///         .parse()?;
/// assert_eq!(board.solved_count(), 17);
/// assert_eq!(
///     board.solved_digit(Cell::from_row_col(0, 0)),
///     Some(Digit::D9)
/// );
/// // Unknown cells start with all nine candidates.
/// assert_eq!(board.candidates(Cell::from_row_col(0, 1)).len(), 9);
/// # Ok::<(), xudoku_core::MalformedGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; Cell::COUNT],
}

impl Board {
    /// Creates a board where every cell admits all nine digits.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            cells: [DigitSet::FULL; Cell::COUNT],
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Sets a cell's candidate set.
    ///
    /// Returns `false` without touching the trace when the new set equals
    /// the current one, so repeated propagator passes do not produce
    /// spurious trace entries. When the new set is a singleton (the cell
    /// just became solved) a snapshot of the whole board is recorded to
    /// `trace`.
    pub fn assign(&mut self, cell: Cell, candidates: DigitSet, trace: &mut dyn TraceSink) -> bool {
        if self.cells[cell.index()] == candidates {
            return false;
        }
        self.cells[cell.index()] = candidates;
        if candidates.len() == 1 {
            trace.record(self);
        }
        true
    }

    /// Forces a cell to a single digit without notifying any trace sink.
    ///
    /// This is the speculative-assignment primitive used when the search
    /// branches on a guess; the snapshots for the branch come from the
    /// reduction that follows.
    pub const fn force(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = DigitSet::from_elem(digit);
    }

    /// Returns `true` if every cell's candidate set has exactly one element.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Returns `true` if any cell's candidate set is empty.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns the digit of a solved cell, or `None` if the cell is still
    /// undecided (or contradictory).
    #[must_use]
    pub fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).as_single()
    }

    /// Returns `true` if the board is fully solved and every unit of the
    /// topology contains each digit exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use xudoku_core::{Board, Topology};
    ///
    /// let solved: Board =
    ///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
    ///         .parse()?;
    /// assert!(solved.is_valid_solution(&Topology::standard()));
    /// // The same grid does not satisfy the diagonal constraints.
    /// assert!(!solved.is_valid_solution(&Topology::with_diagonals()));
    /// # Ok::<(), xudoku_core::MalformedGridError>(())
    /// ```
    #[must_use]
    pub fn is_valid_solution(&self, topology: &Topology) -> bool {
        if !self.is_solved() {
            return false;
        }
        topology.units().iter().all(|unit| {
            let mut seen = DigitSet::EMPTY;
            for cell in unit {
                seen |= self.candidates(cell);
            }
            seen == DigitSet::FULL
        })
    }

    /// Serializes the board back to the 81-character grid format, writing
    /// `.` for every unsolved cell.
    ///
    /// For solved boards this is the inverse of parsing.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or('.', Digit::to_char))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl FromStr for Board {
    type Err = MalformedGridError;

    /// Parses the 81-character row-major grid format: digits `1-9` are
    /// givens, `.` marks an unknown cell (full candidate set).
    fn from_str(s: &str) -> Result<Self, MalformedGridError> {
        let len = s.chars().count();
        if len != Cell::COUNT {
            return Err(MalformedGridError::BadLength { len });
        }
        let mut cells = [DigitSet::FULL; Cell::COUNT];
        for (index, ch) in s.chars().enumerate() {
            cells[index] = match ch {
                '.' => DigitSet::FULL,
                _ => match Digit::from_char(ch) {
                    Some(digit) => DigitSet::from_elem(digit),
                    None => return Err(MalformedGridError::BadChar { index, ch }),
                },
            };
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    /// Renders the board as a 9x9 grid with box separators. Each cell shows
    /// its remaining candidates; the column width adapts to the widest
    /// candidate set, so partially reduced boards stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(|set| set.len()).max().unwrap_or(1);
        let segment = "-".repeat(width * 3);
        let line = format!("{segment}+{segment}+{segment}");
        for row in 0..9 {
            for col in 0..9 {
                let set = self.candidates(Cell::from_row_col(row, col));
                write!(f, "{:^width$}", set.to_string())?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::trace::NullTrace;

    const EASY_GRID: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const SOLVED_GRID: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_parse_givens_and_unknowns() {
        let grid = EASY_GRID.replace('0', ".");
        let board: Board = grid.parse().unwrap();

        assert_eq!(board.solved_digit(Cell::from_row_col(0, 2)), Some(Digit::D3));
        assert_eq!(board.candidates(Cell::from_row_col(0, 0)), DigitSet::FULL);
        assert_eq!(board.solved_count(), grid.chars().filter(|c| *c != '.').count());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(MalformedGridError::BadLength { len: 3 })
        );
        let long = ".".repeat(82);
        assert_eq!(
            long.parse::<Board>(),
            Err(MalformedGridError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        // '0' is not part of the alphabet; unknowns are '.'.
        let grid = EASY_GRID;
        assert_eq!(
            grid.parse::<Board>(),
            Err(MalformedGridError::BadChar { index: 0, ch: '0' })
        );

        let mut grid = ".".repeat(81);
        grid.replace_range(40..41, "x");
        assert_eq!(
            grid.parse::<Board>(),
            Err(MalformedGridError::BadChar { index: 40, ch: 'x' })
        );
    }

    #[test]
    fn test_assign_no_op_detection() {
        let mut board = Board::unconstrained();
        let cell = Cell::new(0);
        let set = DigitSet::from_iter([Digit::D1, Digit::D2]);

        assert!(board.assign(cell, set, &mut NullTrace));
        assert!(!board.assign(cell, set, &mut NullTrace));
        assert_eq!(board.candidates(cell), set);
    }

    #[test]
    fn test_solved_and_contradiction_queries() {
        let solved: Board = SOLVED_GRID.parse().unwrap();
        assert!(solved.is_solved());
        assert!(!solved.has_contradiction());
        assert_eq!(solved.solved_count(), 81);

        let mut board = Board::unconstrained();
        assert!(!board.is_solved());
        assert!(!board.has_contradiction());

        board.assign(Cell::new(40), DigitSet::EMPTY, &mut NullTrace);
        assert!(board.has_contradiction());
        assert!(!board.is_solved());
    }

    #[test]
    fn test_to_line_round_trip() {
        let grid = EASY_GRID.replace('0', ".");
        let board: Board = grid.parse().unwrap();
        assert_eq!(board.to_line(), grid);

        let solved: Board = SOLVED_GRID.parse().unwrap();
        assert_eq!(solved.to_line(), SOLVED_GRID);
    }

    #[test]
    fn test_valid_solution_checks_units() {
        let solved: Board = SOLVED_GRID.parse().unwrap();
        assert!(solved.is_valid_solution(&Topology::standard()));

        // Swapping two cells in a row breaks the column units.
        let mut bytes = SOLVED_GRID.as_bytes().to_vec();
        bytes.swap(0, 1);
        let broken: Board = String::from_utf8(bytes).unwrap().parse().unwrap();
        assert!(!broken.is_valid_solution(&Topology::standard()));
    }

    #[test]
    fn test_display_solved_board() {
        let solved: Board = SOLVED_GRID.parse().unwrap();
        let rendered = solved.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        // 9 cell rows plus 2 separator rows; width is 2 for a solved board.
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].trim_end(), "5 3 4 |6 7 8 |9 1 2");
        assert!(lines[3].starts_with("------"));
        assert!(lines[3].contains('+'));
    }

    proptest! {
        #[test]
        fn prop_parse_accepts_valid_alphabet(grid in "[1-9.]{81}") {
            let board: Board = grid.parse().unwrap();
            prop_assert_eq!(board.to_line(), grid);
        }

        #[test]
        fn prop_parse_rejects_wrong_length(grid in "[1-9.]{0,80}") {
            prop_assert!(
                matches!(
                    grid.parse::<Board>(),
                    Err(MalformedGridError::BadLength { .. })
                ),
                "expected Err(MalformedGridError::BadLength)"
            );
        }
    }
}
