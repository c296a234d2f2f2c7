use xudoku_core::{Board, Digit, DigitSet, Topology, TraceSink};

use crate::propagator::Propagator;

const NAME: &str = "only choice";

/// Assigns a digit wherever it has exactly one admitting cell in a unit.
///
/// This is the converse of [`Eliminate`](crate::propagator::Eliminate): it
/// forces assignments rather than removing candidates. When a unit has
/// exactly one cell still admitting some digit, that cell must hold the
/// digit, and its candidate set collapses to the singleton.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice;

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        OnlyChoice
    }
}

impl Propagator for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, topology: &Topology, board: &mut Board, trace: &mut dyn TraceSink) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut admitting = unit
                    .iter()
                    .filter(|&cell| board.candidates(cell).contains(digit));
                if let Some(cell) = admitting.next()
                    && admitting.next().is_none()
                {
                    changed |= board.assign(cell, DigitSet::from_elem(digit), trace);
                }
            }
        }
        changed
    }
}
