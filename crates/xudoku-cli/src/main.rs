//! Command-line Sudoku and Sudoku-X solver.
//!
//! Reads a puzzle as an 81-character line (digits for givens, `.` for
//! empty cells) and prints the solved board. Without an argument it
//! solves a built-in Sudoku-X demo puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin xudoku -- "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"
//! ```
//!
//! Add the diagonal constraints of Sudoku-X:
//!
//! ```sh
//! cargo run --bin xudoku -- --diagonal "9.1....8.8.5.7..4.2.4....6...7......5..............83.3..6......9................"
//! ```
//!
//! Replay every intermediate deduction step:
//!
//! ```sh
//! cargo run --bin xudoku -- --trace
//! ```

use std::process;

use clap::Parser;
use xudoku_core::{Topology, TraceLog};
use xudoku_solver::{Reducer, SolveError, Solver};

/// Demo Sudoku-X puzzle, solvable only with the diagonal constraints.
const DEMO_GRID: &str =
    "9.1....8.8.5.7..4.2.4....6...7......5..............83.3..6......9................";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as an 81-character line; digits are givens, `.` is empty.
    /// Defaults to a built-in Sudoku-X demo puzzle.
    grid: Option<String>,

    /// Add the two main diagonals as constraint units (Sudoku-X rules).
    #[arg(long)]
    diagonal: bool,

    /// Enable the naked-twins rule in the reduction loop.
    #[arg(long)]
    naked_twins: bool,

    /// Print every intermediate board as cells get solved.
    #[arg(long)]
    trace: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // The demo puzzle needs the diagonal rules to have a unique solution.
    let diagonal = args.diagonal || args.grid.is_none();
    let grid = args.grid.as_deref().unwrap_or(DEMO_GRID);

    let topology = if diagonal {
        Topology::with_diagonals()
    } else {
        Topology::standard()
    };
    let reducer = Reducer::new().naked_twins(args.naked_twins);
    let solver = Solver::with_reducer(topology, reducer);
    log::info!(
        "solving with diagonal={diagonal} naked_twins={}",
        args.naked_twins
    );

    let mut trace = TraceLog::new();
    match solver.solve_traced(grid, &mut trace) {
        Ok(board) => {
            if args.trace {
                log::info!("captured {} trace snapshots", trace.len());
                for snapshot in trace.snapshots() {
                    println!("{snapshot}");
                    println!();
                }
            }
            println!("{board}");
        }
        Err(SolveError::Malformed(err)) => {
            eprintln!("Invalid grid: {err}");
            process::exit(2);
        }
        Err(SolveError::Unsolvable) => {
            eprintln!("No solution exists for this puzzle.");
            process::exit(1);
        }
    }
}
