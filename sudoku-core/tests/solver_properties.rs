//! Property tests for the universal invariants of the solver and board.

use proptest::prelude::*;
use sudoku_core::solver::{simple_solve, Mode, Solver, Strategy};
use sudoku_core::Board;

/// Builds a random solved board from `seed`, then blanks `blanks` of its
/// cells chosen uniformly without replacement.
fn blanked_board(seed: u64, blanks: usize) -> Board {
    let mut solver = Solver::seeded(Board::empty(), Mode::Random, seed);
    let moves = solver.full_solve().expect("full_solve on a blank board always succeeds");
    let mut board = Board::empty();
    for (r, c, v) in moves {
        board.set(r, c, v);
    }

    let mut order: Vec<(usize, usize)> = Board::iter_cells().collect();
    // A cheap seeded shuffle good enough for test input generation, not the solver.
    let mut state = seed.wrapping_add(1);
    for i in (1..order.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = (state >> 33) as usize % (i + 1);
        order.swap(i, j);
    }
    for &(r, c) in order.iter().take(blanks.min(81)) {
        board.set(r, c, 0);
    }
    board
}

proptest! {
    #[test]
    fn simple_and_full_solve_agree_on_success(seed in any::<u64>(), blanks in 0usize..=60) {
        let board = blanked_board(seed, blanks);

        let simple = simple_solve(&board);
        let full = Solver::solve(&board, Mode::Random, Strategy::Full);

        prop_assert_eq!(simple.is_some(), full.is_some());

        if let (Some(simple_moves), Some(full_moves)) = (simple, full) {
            let mut simple_board = board;
            for (r, c, v) in simple_moves {
                simple_board.set(r, c, v);
            }
            let mut full_board = board;
            for (r, c, v) in full_moves {
                full_board.set(r, c, v);
            }
            prop_assert!(simple_board.is_solved());
            prop_assert!(full_board.is_solved());
        }
    }

    #[test]
    fn full_solve_moves_reproduce_the_solved_board(seed in any::<u64>(), blanks in 0usize..=60) {
        let board = blanked_board(seed, blanks);
        let mut solver = Solver::seeded(board, Mode::Random, seed);

        if let Some(moves) = solver.full_solve() {
            let mut replayed = board;
            for (r, c, v) in moves {
                replayed.set(r, c, v);
            }
            prop_assert_eq!(replayed, *solver.board());
        }
    }

    #[test]
    fn is_valid_value_matches_placing_into_a_blanked_copy(seed in any::<u64>(), blanks in 0usize..=40) {
        let board = blanked_board(seed, blanks);
        for (r, c) in Board::iter_cells() {
            for v in 1..=9u8 {
                let mut probe = board;
                probe.set(r, c, 0);
                probe.set(r, c, v);
                prop_assert_eq!(board.is_valid_value(r, c, v), probe.is_valid());
            }
        }
    }
}
