//! A constraint-propagation Sudoku engine.
//!
//! [`Board`] is the raw 9x9 grid. [`solver::Solver`] maintains the
//! candidate-set, possible-location, and size-bucket indices built on top of
//! a board and uses them to drive human-style propagation and randomized
//! backtracking. [`generator::Generator`] produces graded-difficulty puzzles
//! by generating a full board, blanking cells, forcing a unique solution,
//! and classifying the result.

pub mod board;
pub mod error;
mod format;
pub mod generator;
pub mod solver;

pub use board::Board;
pub use error::SudokuError;
pub use generator::{Generator, Level};
pub use solver::{Mode, Move, Solver, Strategy};
