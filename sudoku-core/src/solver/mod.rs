//! The constraint-propagation solver: derived indices, human-style
//! propagation, and randomized backtracking.

mod buckets;
mod candidates;
mod locations;
mod masks;
pub(crate) mod mode;
mod simple;
pub mod units;

use log::{debug, trace};

use buckets::Buckets;
use candidates::Candidates;
use locations::Locations;
use masks::Masks;
pub use mode::Mode;
pub use simple::{simple_solve, Move};
use crate::board::Board;

/// Which solving strategy [`Solver::solve`] should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Propagation followed by randomized backtracking (the default).
    #[default]
    Full,
    /// One round of naked- and hidden-single deductions, no guessing.
    Partial,
    /// The independent oracle in [`simple_solve`]; ignores the Solver's
    /// indices entirely.
    Simple,
}

/// Stateful engine bound to one [`Board`]. Maintains the candidate-set,
/// possible-locations, and bucket indices described in the crate's module
/// docs, and uses them to drive both propagation and backtracking.
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    masks: Masks,
    candidates: Candidates,
    locations: Locations,
    buckets: Buckets,
    mode: Mode,
    rng: rand::rngs::StdRng,
}

impl Solver {
    /// Builds a solver bound to `board`, with an OS-seeded RNG.
    pub fn new(board: Board, mode: Mode) -> Self {
        use rand::SeedableRng;
        Self::with_rng(board, mode, rand::rngs::StdRng::from_os_rng())
    }

    /// Builds a solver bound to `board`, seeded deterministically. Two
    /// solvers built with the same seed and run the same way produce
    /// bit-for-bit identical results.
    pub fn seeded(board: Board, mode: Mode, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::with_rng(board, mode, rand::rngs::StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mode: Mode, rng: rand::rngs::StdRng) -> Self {
        let mut solver = Solver {
            board,
            masks: Masks::new(),
            candidates: Candidates::new(),
            locations: Locations::new(),
            buckets: Buckets::new(),
            mode,
            rng,
        };
        solver.initialize();
        solver
    }

    /// Rebinds the solver to a different board and rebuilds all indices.
    pub fn attach(&mut self, board: Board) {
        self.board = board;
        self.initialize();
    }

    /// The board this solver is currently bound to.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rebuilds the candidate-set, possible-locations, and bucket indices
    /// from scratch against the current board state. Called on attach and
    /// after every abandoned backtracking branch.
    pub fn initialize(&mut self) {
        trace!("rebuilding solver indices from scratch, {} blanks", self.board.count_missing());
        self.masks = Masks::new();
        self.candidates = Candidates::new();
        self.locations = Locations::new();
        self.buckets = Buckets::new();

        for (r, c) in Board::iter_cells() {
            let v = self.board.get(r, c);
            if v != 0 {
                self.masks.add(r, c, v);
            }
        }

        for (r, c) in self.board.iter_empty_cells() {
            let mask = self.masks.candidates_for(r, c);
            self.candidates.set(r, c, mask);
            for digit in candidates::mask_digits(mask) {
                for (kind, idx) in units::regions_containing(r, c) {
                    self.locations.add(kind, idx, digit, r, c);
                }
            }
            self.buckets.insert(mask.count_ones() as usize, (r, c));
        }

        debug_assert!(self.invariants_hold(), "index invariant violated after initialize()");
    }

    /// Debug-only check that every blank cell's candidate set agrees with
    /// its membership in the bucket index, and that every filled cell
    /// carries no leftover candidates.
    fn invariants_hold(&self) -> bool {
        for (r, c) in self.board.iter_empty_cells() {
            let mask = self.candidates.get(r, c);
            let size = mask.count_ones() as usize;
            if !self.buckets.iter(size).any(|cell| cell == (r, c)) {
                return false;
            }
        }
        for (r, c) in Board::iter_cells() {
            if !self.board.is_empty(r, c) && self.candidates.get(r, c) != 0 {
                return false;
            }
        }
        true
    }

    /// Removes `digit` from `(r, c)`'s candidate set if present, keeping the
    /// bucket and possible-locations indices in sync. No-op if `digit` was
    /// already absent.
    fn remove_candidate(&mut self, r: usize, c: usize, digit: u8) {
        let before = self.candidates.get(r, c);
        if !self.candidates.remove(r, c, digit) {
            return;
        }
        let before_size = before.count_ones() as usize;
        self.buckets.move_cell((r, c), before_size, before_size - 1);
        for (kind, idx) in units::regions_containing(r, c) {
            self.locations.remove(kind, idx, digit, r, c);
        }
    }

    /// Commits `digit` at `(r, c)`: the board must already reflect the
    /// placement before this is called, so the shared-region scan below
    /// correctly filters on "still blank".
    fn place(&mut self, r: usize, c: usize, digit: u8) {
        let mask = self.candidates.get(r, c);
        // (r, c) is leaving the blank pool entirely, so its own bucket and
        // possible-location entries are torn down directly rather than
        // through `remove_candidate`, which assumes the cell stays blank.
        self.buckets.remove(mask.count_ones() as usize, (r, c));
        for other in candidates::mask_digits(mask) {
            for (kind, idx) in units::regions_containing(r, c) {
                self.locations.remove(kind, idx, other, r, c);
            }
        }
        self.candidates.set(r, c, 0);
        self.masks.add(r, c, digit);

        for (rr, cc) in shared_region_cells(r, c) {
            if self.board.is_empty(rr, cc) {
                self.remove_candidate(rr, cc, digit);
            }
        }

        for (kind, idx) in units::regions_containing(r, c) {
            self.locations.clear_key(kind, idx, digit);
        }
    }

    /// One round of naked- and hidden-single deductions. Returns the moves
    /// made, or `None` if the board is already contradictory or the round
    /// produces a contradiction (in which case nothing is left written).
    pub fn partial_solve(&mut self) -> Option<Vec<Move>> {
        if !self.buckets.is_empty(0) {
            return None;
        }

        let mut moves: Vec<Move> = Vec::new();
        let mut written: std::collections::HashMap<(usize, usize), u8> = std::collections::HashMap::new();
        let mut conflict = false;

        for (r, c) in self.buckets.iter(1).collect::<Vec<_>>() {
            let digit = candidates::mask_digits(self.candidates.get(r, c))[0];
            match written.get(&(r, c)) {
                Some(&existing) if existing != digit => {
                    conflict = true;
                }
                Some(_) => {}
                None => {
                    written.insert((r, c), digit);
                    self.board.set(r, c, digit);
                    moves.push((r, c, digit));
                }
            }
        }

        for (key, (r, c)) in self.locations.iter_unique().collect::<Vec<_>>() {
            let digit = key.2;
            match written.get(&(r, c)) {
                Some(&existing) if existing == digit => {}
                Some(_) => conflict = true,
                None => {
                    written.insert((r, c), digit);
                    self.board.set(r, c, digit);
                    moves.push((r, c, digit));
                }
            }
        }

        if conflict || !self.board.is_valid() {
            for &(r, c, _) in &moves {
                self.board.set(r, c, 0);
            }
            return None;
        }

        for &(r, c, digit) in &moves {
            self.place(r, c, digit);
        }
        Some(moves)
    }

    /// Propagation (up to 81 rounds) followed by MRV-branching randomized
    /// backtracking. Returns the full list of moves that solves the board,
    /// or `None` if no completion exists.
    pub fn full_solve(&mut self) -> Option<Vec<Move>> {
        let mut accumulated = Vec::new();
        for _ in 0..81 {
            match self.partial_solve() {
                None => {
                    self.revert(&accumulated);
                    return None;
                }
                Some(round) if round.is_empty() => break,
                Some(round) => accumulated.extend(round),
            }
        }

        if self.board.is_solved() {
            return Some(accumulated);
        }

        let Some((r, c)) = self.buckets.smallest_at_least(2) else {
            // No candidates anywhere but unsolved: contradiction.
            debug!("backtrack: no cell with >=2 candidates but board unsolved, rebuilding indices");
            self.revert(&accumulated);
            self.initialize();
            return None;
        };

        let digits = self.mode.order(candidates::mask_digits(self.candidates.get(r, c)), &mut self.rng);
        for digit in digits {
            self.board.set(r, c, digit);
            self.place(r, c, digit);
            if let Some(mut rest) = self.full_solve() {
                let mut moves = accumulated.clone();
                moves.push((r, c, digit));
                moves.append(&mut rest);
                return Some(moves);
            }
            debug!("backtrack: branch ({r}, {c}) = {digit} failed, rebuilding indices");
            self.board.set(r, c, 0);
            self.initialize();
        }

        debug!("backtrack: all candidates at ({r}, {c}) exhausted, rebuilding indices");
        self.revert(&accumulated);
        self.initialize();
        None
    }

    fn revert(&mut self, moves: &[Move]) {
        for &(r, c, _) in moves {
            self.board.set(r, c, 0);
        }
    }

    /// Dispatches to [`Strategy::Full`], [`Strategy::Partial`], or
    /// [`Strategy::Simple`] against `board`, the Solver API exposed to
    /// external callers.
    pub fn solve(board: &Board, mode: Mode, strategy: Strategy) -> Option<Vec<Move>> {
        match strategy {
            Strategy::Simple => simple_solve(board),
            Strategy::Partial => {
                let mut solver = Solver::new(*board, mode);
                solver.partial_solve()
            }
            Strategy::Full => {
                let mut solver = Solver::new(*board, mode);
                solver.full_solve()
            }
        }
    }
}

/// Coordinates sharing a row, column, or box with `(r, c)`, excluding `(r, c)` itself.
fn shared_region_cells(r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
    units::regions_containing(r, c)
        .into_iter()
        .flat_map(|(kind, idx)| units::region_cells(kind, idx))
        .filter(move |&(rr, cc)| (rr, cc) != (r, c))
}
