//! Placement of one word at a time against a partial layout.

use crossline_core::{Answer, AnswerError, Clue, Entry, Point};

use crate::{
    RandomSource,
    validator::{Placement, is_valid_placement},
};

/// A clue whose answer has been normalized and is ready to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Text shown to the player.
    pub hint: String,
    /// Normalized answer.
    pub answer: Answer,
}

impl Word {
    /// Creates a word.
    #[must_use]
    pub fn new(hint: impl Into<String>, answer: Answer) -> Self {
        Self {
            hint: hint.into(),
            answer,
        }
    }
}

impl TryFrom<&Clue> for Word {
    type Error = AnswerError;

    fn try_from(clue: &Clue) -> Result<Self, Self::Error> {
        Ok(Self::new(clue.hint.clone(), Answer::new(&clue.answer)?))
    }
}

/// No crossing of the word with the current layout validates.
///
/// This is an expected outcome of a layout attempt, not a failure of the
/// generator as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no valid placement found")]
pub struct NoPlacement;

/// Anchors the first word of a layout at the origin, numbered 1.
pub fn place_initial_entry<R>(word: &Word, rng: &mut R) -> Entry
where
    R: RandomSource + ?Sized,
{
    Entry::new(
        word.hint.clone(),
        word.answer.clone(),
        Point::ORIGIN,
        rng.choose_direction(),
        1,
    )
}

/// Finds the first legal crossing of `word` with the entries placed so far.
///
/// Entries are scanned in insertion order, then each of their letters, then
/// each letter of `word`. Every shared letter yields one candidate: `word`
/// runs perpendicular to the entry it crosses, anchored so that the shared
/// letters coincide. The first candidate accepted by
/// [`is_valid_placement`] wins.
///
/// # Errors
///
/// Returns [`NoPlacement`] when no candidate validates.
///
/// # Examples
///
/// ```
/// use crossline_core::{Answer, Direction, Entry, Point};
/// use crossline_generator::search::{Word, place_next_entry};
///
/// let existing = [Entry::new("", Answer::new("CAT")?, Point::ORIGIN, Direction::Across, 1)];
/// let word = Word::new("Automobile", Answer::new("CAR")?);
///
/// let entry = place_next_entry(&existing, &word).unwrap();
/// assert_eq!(entry.direction(), Direction::Down);
/// assert_eq!(entry.position(), Point::ORIGIN);
/// assert_eq!(entry.number(), 1); // shares its start cell with "CAT"
/// # Ok::<(), crossline_core::AnswerError>(())
/// ```
pub fn place_next_entry(existing: &[Entry], word: &Word) -> Result<Entry, NoPlacement> {
    for entry in existing {
        let direction = entry.direction().perpendicular();
        for (shared, letter) in entry.cells() {
            for (j, &ch) in (0..).zip(word.answer.letters()) {
                if ch != letter {
                    continue;
                }
                let anchor = shared - direction.unit_vector() * j;
                let placement = Placement::new(&word.answer, anchor, direction);
                if is_valid_placement(existing, placement) {
                    return Ok(Entry::new(
                        word.hint.clone(),
                        word.answer.clone(),
                        anchor,
                        direction,
                        clue_number(existing, anchor),
                    ));
                }
            }
        }
    }
    Err(NoPlacement)
}

/// The number for an entry starting at `anchor`: shared with an entry that
/// already starts there, otherwise one more than the largest number in use.
#[must_use]
pub fn clue_number(existing: &[Entry], anchor: Point) -> u32 {
    if let Some(entry) = existing.iter().find(|entry| entry.position() == anchor) {
        return entry.number();
    }
    existing.iter().map(Entry::number).max().map_or(1, |n| n + 1)
}
