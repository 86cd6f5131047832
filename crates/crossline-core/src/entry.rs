//! Clues, answers and placed entries.

use std::fmt::{self, Display, Write as _};

use crate::{Direction, Point};

/// A hint/answer pair as supplied by the puzzle author, before placement.
///
/// The answer is kept exactly as typed; it is normalized into an [`Answer`]
/// when a puzzle is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    /// Text shown to the player.
    pub hint: String,
    /// Raw answer text.
    pub answer: String,
}

impl Clue {
    /// Creates a clue.
    pub fn new(hint: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            answer: answer.into(),
        }
    }
}

/// Reasons an answer cannot be placed in a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnswerError {
    /// Nothing is left once whitespace is removed.
    #[display("answer is empty")]
    Empty,
    /// The answer contains something a player could not type into a cell.
    #[display("answer contains {ch:?}, only letters are allowed")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A normalized answer: uppercase letters only.
///
/// # Examples
///
/// ```
/// use crossline_core::Answer;
///
/// let answer = Answer::new("New York")?;
/// assert_eq!(answer.to_string(), "NEWYORK");
/// assert_eq!(answer.len(), 7);
/// assert_eq!(answer.letter(3), Some('Y'));
/// # Ok::<(), crossline_core::AnswerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer {
    letters: Box<[char]>,
}

impl Answer {
    /// Normalizes raw answer text.
    ///
    /// Whitespace is dropped and every letter is uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Empty`] if no letters remain and
    /// [`AnswerError::InvalidCharacter`] for any non-alphabetic character.
    pub fn new(raw: &str) -> Result<Self, AnswerError> {
        let mut letters = Vec::with_capacity(raw.len());
        for ch in raw.chars().filter(|ch| !ch.is_whitespace()) {
            if !ch.is_alphabetic() {
                return Err(AnswerError::InvalidCharacter { ch });
            }
            letters.extend(ch.to_uppercase());
        }
        if letters.is_empty() {
            return Err(AnswerError::Empty);
        }
        Ok(Self {
            letters: letters.into_boxed_slice(),
        })
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; construction rejects empty answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letter at `index`, if in range.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Length as a grid distance.
    #[must_use]
    pub fn span(&self) -> i32 {
        i32::try_from(self.letters.len()).unwrap_or(i32::MAX)
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|&ch| f.write_char(ch))
    }
}

/// A word placed on the grid.
///
/// Cell `i` of the entry is `position + direction.unit_vector() * i` and
/// holds `answer[i]`. Apart from [`Entry::translate`] (used while a layout
/// is normalized) only the solved flag ever changes, and only from `false`
/// to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    hint: String,
    answer: Answer,
    position: Point,
    direction: Direction,
    number: u32,
    solved: bool,
}

impl Entry {
    /// Creates an unsolved entry.
    #[must_use]
    pub fn new(
        hint: impl Into<String>,
        answer: Answer,
        position: Point,
        direction: Direction,
        number: u32,
    ) -> Self {
        Self {
            hint: hint.into(),
            answer,
            position,
            direction,
            number,
            solved: false,
        }
    }

    /// Text shown to the player.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// The normalized answer.
    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Cell of the first letter.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Travel direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Clue number shown to the player.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Whether the player has completed this entry.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Marks the entry as solved. There is no way back.
    pub fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Moves the entry by `offset`.
    pub fn translate(&mut self, offset: Point) {
        self.position = self.position + offset;
    }

    /// Number of cells covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    /// Always `false`; answers are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// The cell holding letter `index`. The index is not range checked.
    #[must_use]
    pub fn cell(&self, index: i32) -> Point {
        self.position + self.direction.unit_vector() * index
    }

    /// Iterates over every covered cell and the letter it holds.
    pub fn cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        (0..)
            .zip(self.answer.letters())
            .map(|(i, &ch)| (self.cell(i), ch))
    }

    /// Size of the entry along each axis: `(len, 1)` across, `(1, len)` down.
    #[must_use]
    pub fn extent(&self) -> Point {
        match self.direction {
            Direction::Across => Point::new(self.answer.span(), 1),
            Direction::Down => Point::new(1, self.answer.span()),
        }
    }

    /// The letter index at which this entry covers `point`, if it does.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        let delta = point - self.position;
        let (along, across) = match self.direction {
            Direction::Across => (delta.x, delta.y),
            Direction::Down => (delta.y, delta.x),
        };
        if across != 0 || along < 0 || along >= self.answer.span() {
            return None;
        }
        usize::try_from(along).ok()
    }

    /// Whether `point` is one of this entry's cells.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point).is_some()
    }

    /// The letter this entry places at `point`, if it covers it.
    #[must_use]
    pub fn letter_at(&self, point: Point) -> Option<char> {
        self.index_of(point).and_then(|i| self.answer.letter(i))
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({})",
            self.number,
            self.direction,
            self.hint,
            self.answer.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(answer: &str, position: Point, direction: Direction) -> Entry {
        Entry::new("hint", Answer::new(answer).unwrap(), position, direction, 1)
    }

    #[test]
    fn test_answer_normalization() {
        assert_eq!(Answer::new("paris").unwrap().to_string(), "PARIS");
        assert_eq!(Answer::new(" ice cream ").unwrap().to_string(), "ICECREAM");
        assert_eq!(Answer::new("   "), Err(AnswerError::Empty));
        assert_eq!(Answer::new(""), Err(AnswerError::Empty));
        assert_eq!(
            Answer::new("R2D2"),
            Err(AnswerError::InvalidCharacter { ch: '2' })
        );
    }

    #[test]
    fn test_cells_follow_direction() {
        let across = entry("CAT", Point::new(2, 5), Direction::Across);
        let cells: Vec<_> = across.cells().collect();
        assert_eq!(
            cells,
            [
                (Point::new(2, 5), 'C'),
                (Point::new(3, 5), 'A'),
                (Point::new(4, 5), 'T'),
            ]
        );

        let down = entry("DOG", Point::new(-1, -1), Direction::Down);
        let cells: Vec<_> = down.cells().map(|(p, _)| p).collect();
        assert_eq!(cells, [Point::new(-1, -1), Point::new(-1, 0), Point::new(-1, 1)]);
    }

    #[test]
    fn test_contains_and_letter_at() {
        let down = entry("DOG", Point::new(4, 1), Direction::Down);
        assert!(down.contains(Point::new(4, 1)));
        assert!(down.contains(Point::new(4, 3)));
        assert!(!down.contains(Point::new(4, 0)));
        assert!(!down.contains(Point::new(4, 4)));
        assert!(!down.contains(Point::new(5, 2)));
        assert_eq!(down.letter_at(Point::new(4, 2)), Some('O'));
        assert_eq!(down.letter_at(Point::new(3, 2)), None);
        assert_eq!(down.index_of(Point::new(4, 3)), Some(2));
    }

    #[test]
    fn test_extent() {
        assert_eq!(
            entry("HELLO", Point::ORIGIN, Direction::Across).extent(),
            Point::new(5, 1)
        );
        assert_eq!(
            entry("HELLO", Point::ORIGIN, Direction::Down).extent(),
            Point::new(1, 5)
        );
    }

    #[test]
    fn test_solved_flag_and_translate() {
        let mut e = entry("SUN", Point::new(-2, 3), Direction::Across);
        assert!(!e.is_solved());
        e.mark_solved();
        assert!(e.is_solved());

        e.translate(Point::new(2, -3));
        assert_eq!(e.position(), Point::ORIGIN);
        assert_eq!(e.letter_at(Point::new(2, 0)), Some('N'));
    }

    #[test]
    fn test_display() {
        let e = Entry::new(
            "Star of the day",
            Answer::new("sun").unwrap(),
            Point::ORIGIN,
            Direction::Down,
            7,
        );
        assert_eq!(e.to_string(), "7 down: Star of the day (3)");
    }
}
