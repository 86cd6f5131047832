use crossline_core::{Bounds, Clue, Entry, Point};
use log::{debug, trace};

use crate::{
    GenerateError, PcgRandom, PuzzleSeed, RandomSource,
    search::{Word, place_initial_entry, place_next_entry},
};

/// Tunables for [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many shuffled word orders to try before giving up.
    ///
    /// More attempts find more compact layouts and succeed on harder word
    /// lists, at a linear cost in time.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// Default for [`GeneratorConfig::max_attempts`].
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// Replaces the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A layout together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed the layout was generated from.
    pub seed: PuzzleSeed,
    /// Placed entries, sorted by `(number, direction)` and shifted so that
    /// the smallest coordinate on each axis is 0.
    pub entries: Vec<Entry>,
}

/// Builds crossword layouts from hint/answer lists.
///
/// Each attempt shuffles the words, anchors the first at the origin and
/// places every following word across one already placed (see
/// [`place_next_entry`]). Attempts that strand a word are discarded. Of the
/// successful attempts, the one with the smallest bounding box wins.
///
/// # Examples
///
/// ```
/// use crossline_core::Clue;
/// use crossline_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let clues = [
///     Clue::new("Feline", "cat"),
///     Clue::new("Automobile", "car"),
///     Clue::new("Sticky black stuff", "tar"),
/// ];
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(&clues, PuzzleSeed::from_phrase("doc"))?;
///
/// assert_eq!(puzzle.entries.len(), 3);
/// assert!(puzzle.entries.iter().all(|e| e.position().x >= 0 && e.position().y >= 0));
/// # Ok::<(), crossline_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a layout from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_rng`].
    pub fn generate(&self, clues: &[Clue]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(clues, PuzzleSeed::random())
    }

    /// Generates the layout determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_rng`].
    pub fn generate_with_seed(
        &self,
        clues: &[Clue],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = PcgRandom::from_seed(seed);
        let entries = self.generate_with_rng(clues, &mut rng)?;
        Ok(GeneratedPuzzle { seed, entries })
    }

    /// Generates a layout drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptyClueList`] if `clues` is empty.
    /// - [`GenerateError::InvalidAnswer`] if an answer has no letters or
    ///   contains anything but letters and whitespace.
    /// - [`GenerateError::Exhausted`] if no attempt placed every word.
    pub fn generate_with_rng<R>(
        &self,
        clues: &[Clue],
        rng: &mut R,
    ) -> Result<Vec<Entry>, GenerateError>
    where
        R: RandomSource + ?Sized,
    {
        let words = normalize(clues)?;
        let mut order: Vec<&Word> = words.iter().collect();

        let attempts = self.config.max_attempts;
        let mut successes = 0_usize;
        let mut best: Option<(i64, Vec<Entry>)> = None;

        for attempt in 0..attempts {
            rng.shuffle(&mut order);
            let Some(entries) = attempt_layout(&order, rng) else {
                trace!("attempt {attempt}: a word could not be placed");
                continue;
            };
            successes += 1;
            let score = Bounds::of(&entries).map_or(0, |bounds| bounds.area());
            trace!("attempt {attempt}: placed all words, score {score}");
            if best.as_ref().is_none_or(|(best_score, _)| score < *best_score) {
                best = Some((score, entries));
            }
        }

        let Some((score, mut entries)) = best else {
            debug!("no layout found for {} words in {attempts} attempts", words.len());
            return Err(GenerateError::Exhausted { attempts });
        };
        debug!(
            "best layout for {} words has score {score} ({successes}/{attempts} attempts succeeded)",
            words.len()
        );

        entries.sort_by_key(|entry| (entry.number(), entry.direction()));
        shift_to_origin(&mut entries);
        Ok(entries)
    }
}

/// Translates `entries` so the smallest coordinate on each axis is 0.
///
/// Applying it to an already shifted layout changes nothing.
pub fn shift_to_origin(entries: &mut [Entry]) {
    let Some(bounds) = Bounds::of(&*entries) else {
        return;
    };
    let offset = Point::ORIGIN - bounds.min;
    for entry in entries {
        entry.translate(offset);
    }
}

fn normalize(clues: &[Clue]) -> Result<Vec<Word>, GenerateError> {
    if clues.is_empty() {
        return Err(GenerateError::EmptyClueList);
    }
    clues
        .iter()
        .enumerate()
        .map(|(index, clue)| {
            Word::try_from(clue).map_err(|reason| GenerateError::InvalidAnswer {
                index,
                answer: clue.answer.clone(),
                reason,
            })
        })
        .collect()
}

fn attempt_layout<R>(order: &[&Word], rng: &mut R) -> Option<Vec<Entry>>
where
    R: RandomSource + ?Sized,
{
    let (first, rest) = order.split_first()?;
    let mut entries = Vec::with_capacity(order.len());
    entries.push(place_initial_entry(first, rng));
    for word in rest {
        let entry = place_next_entry(&entries, word).ok()?;
        entries.push(entry);
    }
    Some(entries)
}
