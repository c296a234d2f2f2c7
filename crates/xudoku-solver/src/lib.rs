//! Constraint-propagation Sudoku solver with backtracking search.
//!
//! The solving pipeline has three layers:
//!
//! 1. [`propagator`]: independent reduction rules ([`Eliminate`],
//!    [`OnlyChoice`], [`NakedTwins`]), each refining a candidate board.
//! 2. [`Reducer`]: iterates the propagators to a fixed point, detecting
//!    stalls and contradictions.
//! 3. [`Solver`]: depth-first backtracking search that guesses a digit for
//!    a minimal-choice cell whenever reduction stalls.
//!
//! [`Eliminate`]: propagator::Eliminate
//! [`OnlyChoice`]: propagator::OnlyChoice
//! [`NakedTwins`]: propagator::NakedTwins
//!
//! # Examples
//!
//! ```
//! use xudoku_core::Topology;
//! use xudoku_solver::Solver;
//!
//! let solver = Solver::new(Topology::with_diagonals());
//! let board = solver.solve(
//!     "9.1....8.8.5.7..4.2.4....6...7......5..............83.3..6......9................",
//! )?;
//! assert!(board.is_valid_solution(solver.topology()));
//! # Ok::<(), xudoku_solver::SolveError>(())
//! ```

pub use self::{error::*, reducer::*, search::*};

mod error;
pub mod propagator;
mod reducer;
mod search;

#[cfg(test)]
mod testing;
