mod csv;

use clap::{ColorChoice, Parser, Subcommand};
use sudoku_core::solver::{Mode, Solver, Strategy};
use sudoku_core::{Board, Generator, Level, SudokuError};

/// Root of the Sudoku CLI.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "🧩 Sudoku: solver and graded puzzle generator 🧩",
    long_about = "🧩 Sudoku solves puzzles via constraint propagation and randomized backtracking, and generates puzzles at a requested difficulty grade",
    color = ColorChoice::Always,
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Commands for the Sudoku CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🎲 Generates a new puzzle at the requested difficulty level
    Generate {
        /// EASY, MEDIUM, HARD, or CHALLENGER (case-insensitive)
        #[arg(short, long, default_value = "EASY")]
        level: String,
    },
    /// 🧩 Solves a given Sudoku puzzle
    Solve {
        #[command(subcommand)]
        solve_command: SolveCommands,
    },
    /// ✅ Checks if a given Sudoku puzzle is solved correctly
    Check {
        /// The Sudoku puzzle string (81 characters: `0-9` or `.` or `_`)
        puzzle: String,
    },
    /// 🎨 Shows the Sudoku puzzle in grid form
    Show {
        /// The Sudoku puzzle string (81 characters: `0-9` or `.` or `_`)
        puzzle: String,
    },
    /// 📋 Solves every puzzle in a CSV file's first column
    SolveCsv {
        /// Path to the input CSV file; its first column holds puzzle strings
        file: String,
        /// Path to write results to; defaults to stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Only print aggregate statistics, skipping per-puzzle output
        #[arg(long)]
        stats_only: bool,
    },
}

/// Subcommands for solving Sudoku puzzles.
#[derive(Subcommand, Debug)]
pub enum SolveCommands {
    /// 🎯 Propagation plus randomized backtracking, the full solver
    Any { puzzle: String },
    /// 🔎 One round of naked- and hidden-single deductions, no guessing
    Partial { puzzle: String },
    /// 🔍 The independent backtracking oracle, ignoring the solver's indices
    Simple { puzzle: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { level } => run_generate(&level),
        Commands::Solve { solve_command } => run_solve(solve_command),
        Commands::Check { puzzle } => run_check(&puzzle),
        Commands::Show { puzzle } => run_show(&puzzle),
        Commands::SolveCsv { file, output, stats_only } => {
            csv::solve_csv_file(&file, output, stats_only)
        }
    };

    if let Err(e) = result {
        eprintln!("💥 Error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(level: &str) -> Result<(), SudokuError> {
    let level: Level = level.parse()?;
    let mut generator = Generator::new();
    match generator.get_puzzle(level) {
        Some(board) => {
            println!("🎲 Generated {level} puzzle:");
            println!("{board}");
            Ok(())
        }
        None => Err(SudokuError::GenerationExhausted),
    }
}

fn run_solve(command: SolveCommands) -> Result<(), SudokuError> {
    let (puzzle, strategy, label) = match &command {
        SolveCommands::Any { puzzle } => (puzzle, Strategy::Full, "🎯 Solution"),
        SolveCommands::Partial { puzzle } => (puzzle, Strategy::Partial, "🔎 Partial solve"),
        SolveCommands::Simple { puzzle } => (puzzle, Strategy::Simple, "🔍 Solution"),
    };

    let board = Board::try_from(puzzle.as_str())?;
    match Solver::solve(&board, Mode::Random, strategy) {
        None => println!("🚫 No solution found"),
        Some(moves) => {
            let mut solved = board;
            for (r, c, v) in moves {
                solved.set(r, c, v);
            }
            println!("{label} found:");
            println!("{solved}");
        }
    }
    Ok(())
}

fn run_check(puzzle: &str) -> Result<(), SudokuError> {
    let board = Board::try_from(puzzle)?;
    if board.is_solved() {
        println!("✅ Puzzle is solved correctly!");
    } else {
        println!("❌ Puzzle is not solved correctly");
    }
    Ok(())
}

fn run_show(puzzle: &str) -> Result<(), SudokuError> {
    let board = Board::try_from(puzzle)?;
    println!("🎨 Show puzzle:");
    println!("{board}");
    Ok(())
}
