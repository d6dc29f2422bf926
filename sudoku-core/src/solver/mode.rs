//! Candidate ordering at branching points.

use rand::seq::SliceRandom;
use rand::rngs::StdRng;

/// Controls the order branching tries candidate digits in. `Max` and `Min`
/// exist so the generator can compare two deterministic solves of the same
/// board to detect multiple solutions; `Random` is what puzzle generation
/// itself uses to produce varied full boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fisher-Yates shuffle of the candidate list.
    #[default]
    Random,
    /// Candidates sorted descending.
    Max,
    /// Candidates sorted ascending.
    Min,
}

impl Mode {
    /// Orders `digits` according to this mode, using `rng` only in `Random` mode.
    pub(crate) fn order(self, mut digits: Vec<u8>, rng: &mut StdRng) -> Vec<u8> {
        match self {
            Mode::Random => {
                digits.shuffle(rng);
                digits
            }
            Mode::Max => {
                digits.sort_unstable_by(|a, b| b.cmp(a));
                digits
            }
            Mode::Min => {
                digits.sort_unstable();
                digits
            }
        }
    }
}
