use xudoku_core::{Board, Topology, TraceSink};

use crate::{
    Contradiction,
    propagator::{Eliminate, NakedTwins, OnlyChoice, Propagator as _},
};

/// Iterates the propagation rules to a fixed point.
///
/// Each pass applies [`Eliminate`] then [`OnlyChoice`] (and, when enabled,
/// [`NakedTwins`]) and compares the number of solved cells before and
/// after. The loop stops when a pass solves no new cell (*stalled*) or
/// when a contradiction appears. A stalled board is a local fixed point of
/// the rules, not necessarily a full solution; finishing it off is the
/// job of the [`Solver`](crate::Solver).
///
/// The naked-twins rule is fully implemented but disabled by default;
/// enable it with [`Reducer::naked_twins`].
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, NullTrace, Topology};
/// use xudoku_solver::Reducer;
///
/// let topology = Topology::standard();
/// let mut board: Board =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
///         .parse()?;
///
/// // This easy grid reduces to a full solution without any search.
/// Reducer::new().reduce(&topology, &mut board, &mut NullTrace)?;
/// assert!(board.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer {
    enable_naked_twins: bool,
}

impl Reducer {
    /// Creates a reducer with the default rule set (elimination and
    /// only-choice).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enable_naked_twins: false,
        }
    }

    /// Enables or disables the naked-twins rule in the reduction loop.
    #[must_use]
    pub const fn naked_twins(mut self, enabled: bool) -> Self {
        self.enable_naked_twins = enabled;
        self
    }

    /// Returns `true` if the naked-twins rule is part of the loop.
    #[must_use]
    pub const fn naked_twins_enabled(&self) -> bool {
        self.enable_naked_twins
    }

    /// Reduces the board in place until the rules stall.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any cell's candidate set becomes
    /// empty, meaning the board (in its current branch) is unsatisfiable.
    pub fn reduce(
        &self,
        topology: &Topology,
        board: &mut Board,
        trace: &mut dyn TraceSink,
    ) -> Result<(), Contradiction> {
        loop {
            let solved_before = board.solved_count();

            Eliminate::new().apply(topology, board, trace);
            OnlyChoice::new().apply(topology, board, trace);
            if self.enable_naked_twins {
                NakedTwins::new().apply(topology, board, trace);
            }

            if board.has_contradiction() {
                return Err(Contradiction);
            }
            if board.solved_count() == solved_before {
                return Ok(());
            }
        }
    }
}
