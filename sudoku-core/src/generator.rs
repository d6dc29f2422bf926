//! Graded-difficulty puzzle generation: blank a solved board, force
//! uniqueness, classify, and cache the result.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::error::SudokuError;
use crate::solver::{Mode, Solver};

const CACHE_CAP: usize = 100;
const BLANK_TARGET: usize = 56;
const MAX_GENERATION_ATTEMPTS: usize = 100;
const MAX_UNIQUENESS_ATTEMPTS: usize = 80;
const MAX_PARTIAL_ROUNDS: usize = 80;

/// One of the four difficulty grades a puzzle can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    Challenger,
}

impl Level {
    const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Challenger];

    fn index(self) -> usize {
        match self {
            Level::Easy => 0,
            Level::Medium => 1,
            Level::Hard => 2,
            Level::Challenger => 3,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = SudokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EASY" => Ok(Level::Easy),
            "MEDIUM" => Ok(Level::Medium),
            "HARD" => Ok(Level::Hard),
            "CHALLENGER" => Ok(Level::Challenger),
            other => Err(SudokuError::UnknownLevel(other.to_string())),
        }
    }
}

/// Produces graded puzzles by generating a random full solution, blanking
/// cells, forcing the result back to a unique solution, classifying it, and
/// caching it under the classified level.
pub struct Generator {
    rng: rand::rngs::StdRng,
    caches: [VecDeque<Board>; 4],
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator seeded from OS randomness.
    pub fn new() -> Self {
        Self::with_rng(rand::rngs::StdRng::from_os_rng())
    }

    /// A generator with a deterministic seed, for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(rand::rngs::StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: rand::rngs::StdRng) -> Self {
        Generator {
            rng,
            caches: Default::default(),
        }
    }

    /// Returns a puzzle at `level`, uppercased when parsed from a string by
    /// the caller. Pops from the level's cache if warm; otherwise generates
    /// until the cache is satisfied or attempts are exhausted, then
    /// opportunistically tops up one or two more puzzles across the four
    /// caches before returning.
    pub fn get_puzzle(&mut self, level: Level) -> Option<Board> {
        if self.caches[level.index()].is_empty() {
            info!("cache miss for level {level:?}, generating to fill it");
            self.fill_cache(level);
        }

        let puzzle = self.caches[level.index()].pop_back().or_else(|| {
            warn!("generator exhausted for level {level:?}, falling back to any cached puzzle");
            Level::ALL.iter().find_map(|&l| self.caches[l.index()].pop_back())
        });

        for _ in 0..self.rng.random_range(1..=2) {
            let topup_level = Level::ALL[self.rng.random_range(0..4)];
            if self.caches[topup_level.index()].len() < CACHE_CAP {
                self.fill_cache_once(topup_level);
            }
        }

        puzzle
    }

    /// Fills `level`'s cache by generating puzzles until it is non-empty or
    /// [`MAX_GENERATION_ATTEMPTS`] tries are spent.
    fn fill_cache(&mut self, level: Level) {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            self.fill_cache_once(level);
            if !self.caches[level.index()].is_empty() {
                return;
            }
        }
        info!("generation exhausted trying to fill cache for level {level:?}");
    }

    /// One round of puzzle production: the resulting puzzle may land in any
    /// level's cache, not necessarily `level`.
    fn fill_cache_once(&mut self, level: Level) {
        let _ = level;
        let Some(full) = self.random_full_board() else {
            return;
        };

        let mut board = full;
        self.blank_cells(&mut board, BLANK_TARGET);
        self.make_one_solution(&mut board, &full);

        let classified = classify(&board);
        let cache = &mut self.caches[classified.index()];
        if cache.len() < CACHE_CAP {
            cache.push_back(board);
        }
    }

    fn random_full_board(&mut self) -> Option<Board> {
        let mut solver = Solver::seeded(Board::empty(), Mode::Random, self.rng.random());
        let moves = solver.full_solve()?;
        let mut board = Board::empty();
        for (r, c, v) in moves {
            board.set(r, c, v);
        }
        Some(board)
    }

    /// Blanks `count` cells chosen uniformly at random, rejecting cells
    /// already blank.
    fn blank_cells(&mut self, board: &mut Board, count: usize) {
        let mut removed = 0;
        while removed < count {
            let r = self.rng.random_range(0..9);
            let c = self.rng.random_range(0..9);
            if !board.is_empty(r, c) {
                board.set(r, c, 0);
                removed += 1;
            }
        }
    }

    /// Restores cells from `full` into `board` until `Max`- and `Min`-mode
    /// solves of `board` agree everywhere, i.e. `board` has a unique
    /// solution. The scan for the first disagreeing cell starts at a random
    /// row-major offset each iteration, which is essential: without it the
    /// same cell gets re-patched forever.
    fn make_one_solution(&mut self, board: &mut Board, full: &Board) {
        for _ in 0..MAX_UNIQUENESS_ATTEMPTS {
            let max_board = solve_copy(board, Mode::Max, &mut self.rng);
            let min_board = solve_copy(board, Mode::Min, &mut self.rng);
            let (Some(max_board), Some(min_board)) = (max_board, min_board) else {
                // A blanked puzzle with no completion at all shouldn't occur
                // starting from a full board, but fail safe by restoring it whole.
                board.copy_from(full);
                return;
            };

            let offset = self.rng.random_range(0..81);
            let disagreement = (0..81).map(|i| (i + offset) % 81).map(|i| (i / 9, i % 9)).find(|&(r, c)| max_board.get(r, c) != min_board.get(r, c));

            match disagreement {
                Some((r, c)) => {
                    debug!("uniqueness forcing retried: patching ({r}, {c}) after max/min solve disagreement");
                    board.set(r, c, full.get(r, c));
                }
                None => return,
            }
        }
    }
}

fn solve_copy(board: &Board, mode: Mode, rng: &mut rand::rngs::StdRng) -> Option<Board> {
    let mut solver = Solver::seeded(*board, mode, rng.random());
    let moves = solver.full_solve()?;
    let mut copy = *board;
    for (r, c, v) in moves {
        copy.set(r, c, v);
    }
    Some(copy)
}

/// Classifies a (possibly blanked) board by blank count and whether pure
/// propagation alone solves it.
pub fn classify(board: &Board) -> Level {
    let nr_missing = board.count_missing();
    let propagation_solvable = is_partial_solvable(board);

    if !propagation_solvable || nr_missing > 52 {
        Level::Challenger
    } else if nr_missing <= 46 {
        Level::Easy
    } else if nr_missing <= 49 {
        Level::Medium
    } else {
        Level::Hard
    }
}

/// Whether `board` can be fully solved by repeated `partial_solve` rounds
/// alone, with no guessing.
fn is_partial_solvable(board: &Board) -> bool {
    let mut solver = Solver::seeded(*board, Mode::Random, 0);
    for _ in 0..MAX_PARTIAL_ROUNDS {
        match solver.partial_solve() {
            Some(moves) if moves.is_empty() => break,
            Some(_) => {}
            None => break,
        }
    }
    solver.board().is_solved()
}

/// Whether a copy of `board` solved with `Max` mode and a copy solved with
/// `Min` mode yield the identical filled board.
pub fn has_only_one_solution(board: &Board) -> bool {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    match (solve_copy(board, Mode::Max, &mut rng), solve_copy(board, Mode::Min, &mut rng)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
