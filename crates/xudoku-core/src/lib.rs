//! Core data structures for the Xudoku solver.
//!
//! This crate provides the data model shared by the solving and front-end
//! crates: the static board topology and the mutable candidate store.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of the digits 1-9
//! - [`digit_set`]: bitset of candidate digits for a single cell
//! - [`cell`]: board positions as small integer indices (0-80)
//! - [`topology`]: units (rows, columns, boxes, optional diagonals) and
//!   peer relationships, derived once and immutable thereafter
//! - [`board`]: the per-cell candidate store, grid parsing and display
//! - [`trace`]: opt-in collection of board snapshots as cells get solved
//!
//! # Examples
//!
//! ```
//! use xudoku_core::{Board, Cell, Digit, Topology};
//!
//! let topology = Topology::standard();
//! let board: Board = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!     .parse()?;
//!
//! // The given at A1 is a solved cell with the single candidate 5.
//! let a1 = Cell::from_row_col(0, 0);
//! assert_eq!(board.candidates(a1).as_single(), Some(Digit::D5));
//! assert_eq!(topology.peers(a1).len(), 20);
//! # Ok::<(), xudoku_core::MalformedGridError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod topology;
pub mod trace;

// Re-export commonly used types
pub use self::{
    board::{Board, MalformedGridError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    topology::{Topology, Unit},
    trace::{NullTrace, TraceLog, TraceSink},
};
