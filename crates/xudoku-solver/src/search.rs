use xudoku_core::{Board, Cell, NullTrace, Topology, TraceSink};

use crate::{Reducer, SolveError};

/// Depth-first backtracking solver over a fixed topology.
///
/// Each invocation of the search has one of three outcomes: the reduction
/// detects a contradiction (*failed*), the reduced board is complete
/// (*solved*), or the reduction stalls (*branch*). On a branch the solver
/// picks the unsolved cell with the fewest candidates and tries each of
/// its digits in increasing order, recursing on an independent clone of
/// the board per guess. Sibling branches never share mutable state, which
/// is the invariant that would let branches be explored concurrently.
///
/// # Examples
///
/// ```
/// use xudoku_core::Topology;
/// use xudoku_solver::{SolveError, Solver};
///
/// let solver = Solver::new(Topology::standard());
/// let board = solver.solve(
///     "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......",
/// )?;
/// assert!(board.is_valid_solution(solver.topology()));
///
/// // Two 5s in the first row cannot be satisfied.
/// let mut grid = ".".repeat(81);
/// grid.replace_range(0..2, "55");
/// assert_eq!(solver.solve(&grid), Err(SolveError::Unsolvable));
/// # Ok::<(), SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
    reducer: Reducer,
}

impl Solver {
    /// Creates a solver with the default [`Reducer`].
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self::with_reducer(topology, Reducer::new())
    }

    /// Creates a solver with an explicitly configured reducer.
    #[must_use]
    pub const fn with_reducer(topology: Topology, reducer: Reducer) -> Self {
        Self { topology, reducer }
    }

    /// Returns the topology this solver works against.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves a serialized grid, discarding the assignment trace.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Malformed`] for input that is not a valid
    /// 81-character grid, and [`SolveError::Unsolvable`] when every search
    /// branch ends in contradiction.
    pub fn solve(&self, grid: &str) -> Result<Board, SolveError> {
        self.solve_traced(grid, &mut NullTrace)
    }

    /// Solves a serialized grid, reporting every newly solved cell to the
    /// caller-supplied trace sink.
    ///
    /// The trace is write-only from the solver's point of view; it exists
    /// for visualization and has no influence on the result.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_traced(
        &self,
        grid: &str,
        trace: &mut dyn TraceSink,
    ) -> Result<Board, SolveError> {
        let board: Board = grid.parse()?;
        self.search(board, trace).ok_or(SolveError::Unsolvable)
    }

    /// Runs reduction plus branching search on an already-parsed board.
    ///
    /// Returns `None` when every branch below `board` is contradictory.
    #[must_use]
    pub fn search(&self, mut board: Board, trace: &mut dyn TraceSink) -> Option<Board> {
        if self
            .reducer
            .reduce(&self.topology, &mut board, trace)
            .is_err()
        {
            return None;
        }
        if board.is_solved() {
            return Some(board);
        }

        let cell = branch_cell(&board)?;
        for digit in board.candidates(cell) {
            let mut guess = board.clone();
            guess.force(cell, digit);
            if let Some(solved) = self.search(guess, trace) {
                return Some(solved);
            }
        }
        None
    }
}

/// Picks the unsolved cell with the fewest candidates, breaking ties by
/// the canonical (row-major) cell order so traces are reproducible.
fn branch_cell(board: &Board) -> Option<Cell> {
    let mut best: Option<(usize, Cell)> = None;
    for cell in Cell::all() {
        let len = board.candidates(cell).len();
        if len > 1 && best.is_none_or(|(min, _)| len < min) {
            best = Some((len, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

/// Convenience entry point: solves `grid` against `topology` with the
/// default reducer configuration.
///
/// # Errors
///
/// See [`Solver::solve`].
pub fn solve(topology: &Topology, grid: &str) -> Result<Board, SolveError> {
    Solver::with_reducer(topology.clone(), Reducer::new()).solve(grid)
}
