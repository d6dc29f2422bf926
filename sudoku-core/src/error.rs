//! Error types for the sudoku engine.

use thiserror::Error;

/// Errors surfaced at the boundary between callers and the core.
///
/// "No solution" is never represented here — it is a normal `Option`/`Vec`
/// result threaded through the solver, not an exceptional condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SudokuError {
    /// `Board::from_lines` was given fewer than 9 lines.
    #[error("expected at least 9 lines, got {0}")]
    TooFewLines(usize),
    /// A line passed to `Board::from_lines` did not split into exactly 9 fields.
    #[error("line {line} must contain 9 comma-separated fields, got {found}: {content:?}")]
    MalformedLine {
        line: usize,
        found: usize,
        content: String,
    },
    /// A field was not a single character in `'1'..='9'` or a blank placeholder.
    #[error("field {0:?} is not a digit '1'-'9' or a blank")]
    InvalidField(String),
    /// A boundary string (CLI argument, benchmark fixture) was not 81 characters long.
    #[error("input string must be exactly 81 characters long, got {0}")]
    InvalidInputLength(usize),
    /// A boundary string contained a byte that isn't a digit or blank placeholder.
    #[error("input string must contain only digits '0'-'9', '.', '_', or a space")]
    InvalidInputCharacter,
    /// An unrecognized difficulty level name was requested from the generator.
    #[error("unknown difficulty level {0:?}; valid levels are EASY, MEDIUM, HARD, CHALLENGER")]
    UnknownLevel(String),
    /// The generator could not produce any puzzle after exhausting its retry budget.
    #[error("puzzle generation exhausted its retry budget without producing a puzzle")]
    GenerationExhausted,
}
