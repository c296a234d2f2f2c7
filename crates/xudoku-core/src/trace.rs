//! Opt-in recording of solving progress.
//!
//! Every time a cell becomes solved through [`Board::assign`], the board
//! notifies a caller-supplied [`TraceSink`] with a snapshot of the whole
//! store. The trace is an append-only log intended for visualization and
//! debugging; solving logic never reads it back, and collection is opt-in:
//! pass [`NullTrace`] to solve without any bookkeeping.
//!
//! [`Board::assign`]: crate::Board::assign

use crate::board::Board;

/// Receiver for board snapshots taken as cells become solved.
pub trait TraceSink {
    /// Records a snapshot of the board right after a cell became solved.
    fn record(&mut self, board: &Board);
}

/// A sink that discards every snapshot.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, Cell, Digit, DigitSet, NullTrace};
///
/// let mut board = Board::unconstrained();
/// let changed = board.assign(
///     Cell::from_row_col(0, 0),
///     DigitSet::from_elem(Digit::D5),
///     &mut NullTrace,
/// );
/// assert!(changed);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _board: &Board) {}
}

/// A sink that collects every snapshot in order.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    snapshots: Vec<Board>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the log and returns the snapshots.
    #[must_use]
    pub fn into_snapshots(self) -> Vec<Board> {
        self.snapshots
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }
}
