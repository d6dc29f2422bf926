use std::io::Write;

use sudoku_core::solver::{Mode, Solver, Strategy};
use sudoku_core::{Board, SudokuError};

/// Processes a CSV file of Sudoku puzzles, one per row's first column, and
/// solves each with the full solver.
pub fn solve_csv_file(
    file_path: &str,
    output_path: Option<String>,
    stats_only: bool,
) -> Result<(), SudokuError> {
    let file = std::fs::File::open(file_path).map_err(|e| {
        eprintln!("❌ Failed to open file '{file_path}': {e}");
        SudokuError::GenerationExhausted
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut total = 0u32;
    let mut solved = 0u32;
    let mut unsolvable = 0u32;
    let mut results: Vec<(String, String, &'static str)> = Vec::new();

    let headers = reader
        .headers()
        .map_err(|e| {
            eprintln!("❌ Failed to read CSV headers: {e}");
            SudokuError::GenerationExhausted
        })?
        .clone();
    let has_solutions = headers.iter().any(|h| h.eq_ignore_ascii_case("solutions"));

    for result in reader.records() {
        let record = result.map_err(|e| {
            eprintln!("❌ Failed to read CSV record at line {}: {e}", total + 2);
            SudokuError::GenerationExhausted
        })?;
        total += 1;

        let puzzle = record.get(0).unwrap_or("").trim();
        if puzzle.is_empty() {
            continue;
        }

        match Board::try_from(puzzle).ok().and_then(|board| Solver::solve(&board, Mode::Random, Strategy::Full)) {
            Some(moves) => {
                solved += 1;
                if !stats_only {
                    let mut board = Board::try_from(puzzle).unwrap();
                    for (r, c, v) in moves {
                        board.set(r, c, v);
                    }
                    let mut solution_str = String::with_capacity(81);
                    for r in 0..9 {
                        for c in 0..9 {
                            solution_str.push_str(&board.get(r, c).to_string());
                        }
                    }

                    if has_solutions && record.len() > 1 {
                        let expected = record.get(1).unwrap_or("").trim();
                        let matches = solution_str == expected;
                        results.push((puzzle.to_string(), solution_str, if matches { "✓" } else { "✗" }));
                    } else {
                        results.push((puzzle.to_string(), solution_str, ""));
                    }
                }
            }
            None => {
                unsolvable += 1;
                if !stats_only {
                    results.push((puzzle.to_string(), "UNSOLVABLE".to_string(), "✗"));
                }
            }
        }

        if total.is_multiple_of(10000) {
            eprintln!("📊 Processed {total} puzzles... ({solved} solved, {unsolvable} unsolvable)");
        }
    }

    write_results(&results, output_path.as_deref(), has_solutions, stats_only)?;

    let unsolvable_pct = if total > 0 { (unsolvable as f64 / total as f64) * 100.0 } else { 0.0 };
    println!("\n📈 Statistics:");
    println!("  Total puzzles: {total}");
    println!("  ✅ Solved: {solved}");
    println!("  ❌ Unsolvable: {unsolvable} ({unsolvable_pct:.2}%)");

    Ok(())
}

fn write_results(
    results: &[(String, String, &'static str)],
    output_path: Option<&str>,
    has_solutions: bool,
    stats_only: bool,
) -> Result<(), SudokuError> {
    let io_err = |e: std::io::Error| {
        eprintln!("❌ Failed to write results: {e}");
        SudokuError::GenerationExhausted
    };

    if let Some(out_path) = output_path {
        let mut out_file = std::fs::File::create(out_path).map_err(io_err)?;
        if has_solutions {
            writeln!(out_file, "quizzes,solutions,match").map_err(io_err)?;
            for (puzzle, solution, matches) in results {
                writeln!(out_file, "{puzzle},{solution},{matches}").map_err(io_err)?;
            }
        } else {
            writeln!(out_file, "quizzes,solutions").map_err(io_err)?;
            for (puzzle, solution, _) in results {
                writeln!(out_file, "{puzzle},{solution}").map_err(io_err)?;
            }
        }
        println!("✅ Results written to {out_path}");
    } else if !stats_only {
        if has_solutions {
            println!("quizzes,solutions,match");
            for (puzzle, solution, matches) in results {
                println!("{puzzle},{solution},{matches}");
            }
        } else {
            println!("quizzes,solutions");
            for (puzzle, solution, _) in results {
                println!("{puzzle},{solution}");
            }
        }
    }

    Ok(())
}
