use crossline_core::Direction;
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// The randomness the generator consumes.
///
/// Generation needs only two operations, so tests can substitute a scripted
/// source to force a particular word order or starting direction.
pub trait RandomSource {
    /// Permutes `items` in place with a swap-based (Fisher–Yates) shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Picks `Across` or `Down` with equal probability.
    fn choose_direction(&mut self) -> Direction;
}

/// A [`RandomSource`] backed by a PCG generator seeded from a [`PuzzleSeed`].
///
/// # Examples
///
/// ```
/// use crossline_generator::{PcgRandom, PuzzleSeed, RandomSource};
///
/// let seed = PuzzleSeed::from_phrase("demo");
/// let mut a = PcgRandom::from_seed(seed);
/// let mut b = PcgRandom::from_seed(seed);
///
/// let mut xs = [1, 2, 3, 4, 5];
/// let mut ys = xs;
/// a.shuffle(&mut xs);
/// b.shuffle(&mut ys);
/// assert_eq!(xs, ys);
/// ```
#[derive(Debug, Clone)]
pub struct PcgRandom {
    rng: Pcg64,
}

impl PcgRandom {
    /// Creates a source that replays the same sequence for the same seed.
    #[must_use]
    pub fn from_seed(seed: PuzzleSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
        }
    }
}

impl RandomSource for PcgRandom {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn choose_direction(&mut self) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::Down
        } else {
            Direction::Across
        }
    }
}
