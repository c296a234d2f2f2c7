use derive_more::{Display, Error, From};
use xudoku_core::MalformedGridError;

/// Signal that a candidate set became empty during reduction.
///
/// This marks the current search branch as unsatisfiable. It propagates as
/// a distinguished `Err` value through the reducer and search, never a
/// panic, and is recovered locally by backtracking: only when the root
/// call exhausts all branches does it surface as
/// [`SolveError::Unsolvable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("a cell ran out of candidates")]
pub struct Contradiction;

/// Error returned by the solver entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The grid text was rejected before any solving work started.
    #[display("malformed grid: {_0}")]
    Malformed(MalformedGridError),
    /// Every search branch ended in contradiction; the puzzle has no
    /// solution.
    #[display("puzzle has no solution")]
    Unsolvable,
}
