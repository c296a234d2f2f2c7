//! Constraint-propagation rules.
//!
//! Each propagator is an independent reduction rule mapping a candidate
//! board to a refined board: candidate sets only ever shrink. Propagators
//! do not iterate themselves to a fixed point; the
//! [`Reducer`](crate::Reducer) re-applies them until no further cell gets
//! solved. They also cannot fail: an empty candidate set they may produce
//! is detected by the reducer, not by the rule.

use std::fmt::Debug;

use xudoku_core::{Board, Topology, TraceSink};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod eliminate;
mod naked_twins;
mod only_choice;

/// A single constraint-propagation rule.
///
/// Implementations are deterministic and monotone: no application ever
/// grows a candidate set.
pub trait Propagator: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Applies the rule once over the whole board.
    ///
    /// Returns `true` if any candidate set changed. Newly solved cells are
    /// reported to `trace`; propagating their consequences is left to the
    /// next application.
    fn apply(&self, topology: &Topology, board: &mut Board, trace: &mut dyn TraceSink) -> bool;
}
