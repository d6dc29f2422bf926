//! Human-readable formatting for the board and generator levels.

use std::fmt;

use crate::board::Board;
use crate::generator::Level;

/// Formats the board as a 9x9 grid with box separators, followed by the
/// single-line form.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", format_grid(self).join("\n"))?;
        write!(f, "Line format: {}", format_line(self))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
            Level::Challenger => "CHALLENGER",
        };
        write!(f, "{name}")
    }
}

/// Renders `board` as a vector of grid lines, top separator to bottom separator.
pub(crate) fn format_grid(board: &Board) -> Vec<String> {
    let mut grid = Vec::new();
    let horizontal_line = "+-------+-------+-------+";

    grid.push(horizontal_line.to_string());

    for r in 0..9 {
        let mut line = String::from("|");
        for c in 0..9 {
            match board.get(r, c) {
                0 => line.push_str(" ."),
                n => line.push_str(&format!(" {n}")),
            }
            if (c + 1) % 3 == 0 {
                line.push_str(" |");
            }
        }
        grid.push(line);

        if (r + 1) % 3 == 0 {
            grid.push(horizontal_line.to_string());
        }
    }

    grid
}

/// Renders `board` as a single 81-character line, blanks as `.`.
pub(crate) fn format_line(board: &Board) -> String {
    Board::iter_cells()
        .map(|(r, c)| match board.get(r, c) {
            0 => '.',
            n => (n + b'0') as char,
        })
        .collect()
}
