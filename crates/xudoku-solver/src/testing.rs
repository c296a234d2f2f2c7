//! Test harness for propagation rules.
//!
//! [`PropagatorTester`] tracks the initial and current state of a board,
//! letting tests apply a rule and assert the changes it produced. All
//! methods return `self` for fluent chaining, and all assertions panic
//! with detailed messages, using `#[track_caller]` to report the caller's
//! source location.

use xudoku_core::{Board, Cell, Digit, DigitSet, NullTrace, Topology};

use crate::propagator::Propagator;

#[derive(Debug)]
pub struct PropagatorTester {
    topology: Topology,
    initial: Board,
    current: Board,
}

impl PropagatorTester {
    /// Creates a tester from an initial board state.
    pub fn new(topology: Topology, initial: Board) -> Self {
        let current = initial.clone();
        Self {
            topology,
            initial,
            current,
        }
    }

    /// Creates a tester from an 81-character grid line.
    ///
    /// # Panics
    ///
    /// Panics if the line cannot be parsed as a grid.
    #[track_caller]
    pub fn from_line(topology: Topology, line: &str) -> Self {
        let board: Board = line.parse().unwrap();
        Self::new(topology, board)
    }

    /// Narrows a cell to the given candidates in both the initial and
    /// current state, so later assertions measure only what the rule under
    /// test changed.
    #[must_use]
    pub fn with_candidates(mut self, cell: Cell, candidates: DigitSet) -> Self {
        self.initial.assign(cell, candidates, &mut NullTrace);
        self.current.assign(cell, candidates, &mut NullTrace);
        self
    }

    /// Applies the rule once and returns self for chaining.
    #[must_use]
    pub fn apply_once<P>(mut self, rule: &P) -> Self
    where
        P: Propagator,
    {
        rule.apply(&self.topology, &mut self.current, &mut NullTrace);
        self
    }

    /// Applies the rule once and asserts that it neither reported a change
    /// nor altered the board.
    #[track_caller]
    pub fn apply_once_expecting_no_change<P>(mut self, rule: &P)
    where
        P: Propagator,
    {
        let changed = rule.apply(&self.topology, &mut self.current, &mut NullTrace);
        assert!(
            !changed,
            "Expected {} to report no change, but it reported one",
            rule.name()
        );
        assert_eq!(
            self.current, self.initial,
            "Expected {} to leave the board untouched",
            rule.name()
        );
    }

    /// Asserts that all given digits were removed from a cell's candidates.
    ///
    /// The digits must have been present initially; other candidates may
    /// have been removed as well.
    #[track_caller]
    pub fn assert_removed<C>(self, cell: Cell, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert!(
            digits.is_subset(initial),
            "Expected initial candidates at {cell} to include {digits}, but they are {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits} to be removed from {cell}, but {current} remains"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial, current,
            "Expected no change at {cell}, but candidates went from {initial} to {current}"
        );
        self
    }

    /// Asserts that a previously undecided cell is now solved with the
    /// given digit.
    #[track_caller]
    pub fn assert_solved_as(self, cell: Cell, digit: Digit) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert!(
            initial.len() > 1,
            "Expected initial cell at {cell} to be undecided, but candidates are {initial}"
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "Expected {cell} to be solved as {digit}, but candidates are {current}"
        );
        self
    }

    /// Asserts that a digit is still among a cell's candidates.
    #[track_caller]
    pub fn assert_contains(self, cell: Cell, digit: Digit) -> Self {
        let current = self.current.candidates(cell);
        assert!(
            current.contains(digit),
            "Expected {cell} to still admit {digit}, but candidates are {current}"
        );
        self
    }

    /// Consumes the tester, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rule that pins A1 to 9 and reports a change while any other digit
    /// remains there.
    #[derive(Debug)]
    struct PinA1;

    impl Propagator for PinA1 {
        fn name(&self) -> &'static str {
            "pin a1"
        }

        fn apply(
            &self,
            _topology: &Topology,
            board: &mut Board,
            trace: &mut dyn xudoku_core::TraceSink,
        ) -> bool {
            board.assign(Cell::new(0), DigitSet::from_elem(Digit::D9), trace)
        }
    }

    #[derive(Debug)]
    struct NoOp;

    impl Propagator for NoOp {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn apply(
            &self,
            _topology: &Topology,
            _board: &mut Board,
            _trace: &mut dyn xudoku_core::TraceSink,
        ) -> bool {
            false
        }
    }

    #[test]
    fn test_apply_and_assert_chain() {
        PropagatorTester::new(Topology::standard(), Board::unconstrained())
            .apply_once(&PinA1)
            .assert_solved_as(Cell::new(0), Digit::D9)
            .assert_removed(Cell::new(0), [Digit::D1, Digit::D2])
            .assert_contains(Cell::new(0), Digit::D9)
            .assert_no_change(Cell::new(80));
    }

    #[test]
    fn test_with_candidates_updates_both_states() {
        let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
        PropagatorTester::new(Topology::standard(), Board::unconstrained())
            .with_candidates(Cell::new(40), pair)
            .apply_once(&NoOp)
            .assert_no_change(Cell::new(40));
    }

    #[test]
    fn test_no_change_expectation_passes_for_no_op() {
        PropagatorTester::new(Topology::standard(), Board::unconstrained())
            .apply_once_expecting_no_change(&NoOp);
    }

    #[test]
    #[should_panic(expected = "Expected pin a1 to report no change")]
    fn test_no_change_expectation_fails_for_mutating_rule() {
        PropagatorTester::new(Topology::standard(), Board::unconstrained())
            .apply_once_expecting_no_change(&PinA1);
    }

    #[test]
    #[should_panic(expected = "Expected no change at A1")]
    fn test_assert_no_change_detects_mutation() {
        PropagatorTester::new(Topology::standard(), Board::unconstrained())
            .apply_once(&PinA1)
            .assert_no_change(Cell::new(0));
    }
}
