use xudoku_core::{Board, Topology, TraceSink};

use crate::propagator::Propagator;

const NAME: &str = "naked twins";

/// Prunes candidates using pairs of cells with identical two-digit sets.
///
/// When two cells of a unit share the same two-element candidate set,
/// those two digits must occupy exactly those two cells, so neither digit
/// can appear anywhere else in the unit. Units are handled independently:
/// a cell may act as a twin in its row, column, box and diagonal at the
/// same time, and each unit prunes separately.
///
/// A third cell carrying the same pair makes the unit unsatisfiable; the
/// rule then empties that cell's set and the reducer reports the
/// contradiction.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins;

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        NakedTwins
    }
}

impl Propagator for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, topology: &Topology, board: &mut Board, trace: &mut dyn TraceSink) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for (i, &first) in unit.cells().iter().enumerate() {
                let pair = board.candidates(first);
                if pair.len() != 2 {
                    continue;
                }
                for &second in &unit.cells()[i + 1..] {
                    if board.candidates(second) != pair {
                        continue;
                    }
                    for &other in unit.cells() {
                        if other == first || other == second {
                            continue;
                        }
                        let remaining = board.candidates(other) - pair;
                        changed |= board.assign(other, remaining, trace);
                    }
                }
            }
        }
        changed
    }
}
