//! Loader for the puzzle data file format described in the crate's docs:
//! 9 comma-separated board lines, a move count (or -1 for no solution), then
//! that many "row,col,value" lines.

use std::fs;
use std::path::Path;

use sudoku_core::Board;

pub struct DataFile {
    pub board: Board,
    /// `None` means the puzzle has no solution.
    pub expected_moves: Option<Vec<String>>,
}

pub fn read_data_file(path: &Path) -> DataFile {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
    let lines: Vec<&str> = content.lines().collect();
    let board = Board::from_lines(&lines[..9]).unwrap_or_else(|e| panic!("failed to parse board in {path:?}: {e}"));

    let nr_solutions: i64 = lines[9].trim().parse().unwrap_or_else(|e| panic!("bad move count in {path:?}: {e}"));
    let expected_moves = if nr_solutions < 0 {
        None
    } else {
        Some(lines[10..10 + nr_solutions as usize].iter().map(|s| s.to_string()).collect())
    };

    DataFile { board, expected_moves }
}

pub fn sorted_moves(moves: &[(usize, usize, u8)]) -> Vec<String> {
    let mut rendered: Vec<String> = moves.iter().map(|(r, c, v)| format!("{r},{c},{v}")).collect();
    rendered.sort();
    rendered
}
