use xudoku_core::{Board, Cell, DigitSet, Topology, TraceSink};

use crate::propagator::Propagator;

const NAME: &str = "eliminate";

/// Removes each solved cell's value from the candidate sets of its peers.
///
/// A pass works from a snapshot of the cells that are solved when it
/// starts. Eliminations may solve further cells; those propagate on the
/// next pass, driven by the reducer's iteration rather than by this rule
/// recursing. The order in which solved cells are processed does not
/// affect the fixed point reached by repeated application.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate;

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Eliminate
    }
}

impl Propagator for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, topology: &Topology, board: &mut Board, trace: &mut dyn TraceSink) -> bool {
        let solved: Vec<_> = Cell::all()
            .filter_map(|cell| board.solved_digit(cell).map(|digit| (cell, digit)))
            .collect();

        let mut changed = false;
        for (cell, digit) in solved {
            for &peer in topology.peers(cell) {
                let remaining = board.candidates(peer) - DigitSet::from_elem(digit);
                changed |= board.assign(peer, remaining, trace);
            }
        }
        changed
    }
}
