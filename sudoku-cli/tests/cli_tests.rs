use assert_cmd::prelude::*;
use std::process::Command;
use sudoku_core::SudokuError;

fn sudoku_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sudoku"))
}

#[test]
fn test_version_command() {
    sudoku_bin()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("sudoku-cli "));
}

#[test]
fn test_generate_default_level() {
    let output = sudoku_bin().arg("generate").assert().success().get_output().stdout.clone();

    let output_str = String::from_utf8(output).unwrap();
    let puzzle = output_str
        .lines()
        .find(|line| line.starts_with("Line format:"))
        .expect("line representation is missing")
        .trim_start_matches("Line format: ");
    assert_eq!(puzzle.len(), 81);
}

#[test]
fn test_generate_custom_level() {
    sudoku_bin().arg("generate").arg("--level").arg("hard").assert().success();
}

#[test]
fn test_generate_unknown_level() {
    sudoku_bin()
        .arg("generate")
        .arg("--level")
        .arg("nonsense")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown difficulty level"));
}

#[test]
fn test_solve_any_some_solution() {
    sudoku_bin()
        .arg("solve")
        .arg("any")
        .arg("530070000600195000098000060800060003400803001700020006060000280000419005000080079")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        ));
}

#[test]
fn test_solve_any_no_solution() {
    sudoku_bin()
        .arg("solve")
        .arg("any")
        .arg("078002609030008020002000083000000040043090000007300090200001036001840902050003007")
        .assert()
        .success()
        .stdout(predicates::str::contains("No solution found"));
}

#[test]
fn test_solve_any_invalid_length() {
    sudoku_bin()
        .arg("solve")
        .arg("any")
        .arg("short")
        .assert()
        .failure()
        .stderr(predicates::str::contains(SudokuError::InvalidInputLength(5).to_string()));
}

#[test]
fn test_solve_partial_reports_partial_solve() {
    sudoku_bin()
        .arg("solve")
        .arg("partial")
        .arg("530070000600195000098000060800060003400803001700020006060000280000419005000080079")
        .assert()
        .success()
        .stdout(predicates::str::contains("Partial solve found:"));
}

#[test]
fn test_solve_simple_agrees_with_any() {
    sudoku_bin()
        .arg("solve")
        .arg("simple")
        .arg("530070000600195000098000060800060003400803001700020006060000280000419005000080079")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        ));
}

#[test]
fn test_check_correct_solution() {
    sudoku_bin()
        .arg("check")
        .arg("534678912672195348198342567859761423426853791713924856961537284287419635345286179")
        .assert()
        .success()
        .stdout(predicates::str::contains("Puzzle is solved correctly"));
}

#[test]
fn test_check_incorrect_solution() {
    sudoku_bin()
        .arg("check")
        .arg("534678912672195348198342567859761423426853791713924856961537284287419635345286170")
        .assert()
        .success()
        .stdout(predicates::str::contains("Puzzle is not solved correctly"));
}

#[test]
fn test_show_puzzle() {
    sudoku_bin()
        .arg("show")
        .arg("900507400007080000830401006402000300090000065000050080200908000080074000700210803")
        .assert()
        .success()
        .stdout(predicates::str::contains("Line format:"));
}
