use crossline_core::{Direction, Entry, LetterGrid, Point};
use log::{debug, trace, warn};

use crate::{ArrowKey, Cursor, GameError};

/// What a letter input or erase did to the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// Nothing changed.
    Ignored,
    /// The input was accepted.
    Applied {
        /// Indices into [`Game::entries`] of entries this input solved.
        newly_solved: Vec<usize>,
        /// `true` only for the input that solved the last open entry.
        completed: bool,
    },
}

impl InputOutcome {
    /// Whether this input finished the puzzle.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Applied { completed: true, .. })
    }
}

/// A crossword being solved.
///
/// Holds the entries of a normalized layout, the letters typed so far and
/// the cursor. Letters are written at the cursor; whenever an entry's cells
/// spell its answer the entry is marked solved, after which its letters can
/// no longer be changed.
///
/// # Example
///
/// ```
/// use crossline_core::{Answer, Direction, Entry, Point};
/// use crossline_game::Game;
///
/// let cat = Answer::new("cat")?;
/// let entries = vec![Entry::new("Feline", cat, Point::ORIGIN, Direction::Across, 1)];
/// let mut game = Game::new(entries);
///
/// game.select_cell(Point::ORIGIN);
/// game.input_letter('c');
/// game.input_letter('a');
/// let outcome = game.input_letter('t');
///
/// assert!(outcome.is_completion());
/// assert!(game.is_solved());
/// # Ok::<(), crossline_core::AnswerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    entries: Vec<Entry>,
    grid: LetterGrid,
    cursor: Option<Cursor>,
    hover: Option<Point>,
}

impl Game {
    /// Starts a game on a normalized layout with an empty grid.
    ///
    /// Entries already flagged as solved have their letters written in.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut grid = LetterGrid::for_entries(&entries);
        for entry in entries.iter().filter(|entry| entry.is_solved()) {
            for (point, ch) in entry.cells() {
                if let Err(e) = grid.set_at(point, Some(ch)) {
                    warn!("skipping letter of {entry}: {e}");
                }
            }
        }
        Self {
            entries,
            grid,
            cursor: None,
            hover: None,
        }
    }

    /// Resumes a game from saved entries and letters.
    ///
    /// Entries whose letters are all present are marked solved even if the
    /// saved flag says otherwise.
    ///
    /// # Errors
    ///
    /// - [`GameError::GridSizeMismatch`] if `grid` is not sized for `entries`
    /// - [`GameError::UnsolvedEntryMarkedSolved`] if an entry is flagged
    ///   solved but `grid` does not spell it
    pub fn restore(mut entries: Vec<Entry>, grid: LetterGrid) -> Result<Self, GameError> {
        let expected = LetterGrid::for_entries(&entries);
        if (expected.rows(), expected.cols()) != (grid.rows(), grid.cols()) {
            return Err(GameError::GridSizeMismatch {
                expected_rows: expected.rows(),
                expected_cols: expected.cols(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        for entry in &mut entries {
            let spelled = grid.matches_entry(entry);
            if entry.is_solved() && !spelled {
                return Err(GameError::UnsolvedEntryMarkedSolved {
                    number: entry.number(),
                    direction: entry.direction(),
                });
            }
            if spelled {
                entry.mark_solved();
            }
        }
        Ok(Self {
            entries,
            grid,
            cursor: None,
            hover: None,
        })
    }

    /// The entries, in clue order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The letters typed so far.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// The cursor, or `None` before the first cell is selected.
    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// The cell under the pointer, if any.
    #[must_use]
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Records the cell under the pointer. Uncovered cells clear the hover.
    pub fn set_hover(&mut self, point: Option<Point>) {
        self.hover = point.filter(|&p| self.is_covered(p));
    }

    /// Whether every entry is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.entries.iter().all(Entry::is_solved)
    }

    /// Whether some entry covers `point`.
    #[must_use]
    pub fn is_covered(&self, point: Point) -> bool {
        self.entries.iter().any(|entry| entry.contains(point))
    }

    /// The typed letter at `point`.
    #[must_use]
    pub fn letter_at(&self, point: Point) -> Option<char> {
        self.grid.get_at(point)
    }

    /// Entries covering `point`, with their indices.
    pub fn entries_at(&self, point: Point) -> impl Iterator<Item = (usize, &Entry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, entry)| entry.contains(point))
    }

    /// The entry running in `direction` through `point`.
    #[must_use]
    pub fn entry_at(&self, point: Point, direction: Direction) -> Option<(usize, &Entry)> {
        self.entries_at(point)
            .find(|(_, entry)| entry.direction() == direction)
    }

    /// The entry the cursor is typing into.
    #[must_use]
    pub fn current_entry(&self) -> Option<(usize, &Entry)> {
        let cursor = self.cursor?;
        self.entry_at(cursor.position, cursor.direction)
    }

    /// Moves the cursor to `point`.
    ///
    /// Selecting the cursor's own cell again flips its direction when an
    /// entry runs the other way. The direction is always one that an entry
    /// through `point` runs in. Returns `false` if `point` is not covered.
    pub fn select_cell(&mut self, point: Point) -> bool {
        let runs = |direction| self.entry_at(point, direction).is_some();
        if !runs(Direction::Across) && !runs(Direction::Down) {
            trace!("ignoring selection of uncovered cell {point}");
            return false;
        }

        let mut direction = self.cursor.map_or(Direction::Across, |c| c.direction);
        let reselected = self.cursor.is_some_and(|c| c.position == point);
        if (reselected && runs(!direction)) || !runs(direction) {
            direction = !direction;
        }
        self.cursor = Some(Cursor::new(point, direction));
        true
    }

    /// Flips the cursor direction if an entry runs the other way through it.
    pub fn toggle_direction(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        if self.entry_at(cursor.position, !cursor.direction).is_none() {
            return false;
        }
        self.cursor = Some(Cursor::new(cursor.position, !cursor.direction));
        true
    }

    /// Moves the cursor one cell, keeping its direction.
    ///
    /// Returns `false` if there is no cursor or the target is not covered.
    pub fn move_cursor(&mut self, key: ArrowKey) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let target = cursor.position + key.offset();
        if !self.is_covered(target) {
            return false;
        }
        self.cursor = Some(Cursor::new(target, cursor.direction));
        true
    }

    /// Types `letter` at the cursor.
    ///
    /// Lowercase letters are uppercased; non-letters are ignored. A cell
    /// belonging to a solved entry only accepts the letter it already holds.
    ///
    /// After writing, any covering entry whose cells now spell its answer is
    /// marked solved. If that happened the cursor jumps to the start of the
    /// first unsolved entry (or stays put when none is left); otherwise it
    /// advances one cell if that cell is covered.
    pub fn input_letter(&mut self, letter: char) -> InputOutcome {
        let Some(cursor) = self.cursor else {
            trace!("ignoring {letter:?}: no cell selected");
            return InputOutcome::Ignored;
        };
        let Some(letter) = normalize_letter(letter) else {
            trace!("ignoring non-letter input {letter:?}");
            return InputOutcome::Ignored;
        };
        let point = cursor.position;
        if self.is_locked(point) && self.grid.get_at(point) != Some(letter) {
            trace!("ignoring {letter:?} at {point}: cell belongs to a solved entry");
            return InputOutcome::Ignored;
        }
        if let Err(e) = self.grid.set_at(point, Some(letter)) {
            warn!("cursor outside the letter grid: {e}");
            return InputOutcome::Ignored;
        }

        let newly_solved = self.mark_spelled_entries(point);
        let completed = !newly_solved.is_empty() && self.is_solved();
        if completed {
            debug!("puzzle completed");
        }

        if newly_solved.is_empty() {
            let next = point + cursor.direction.unit_vector();
            if self.is_covered(next) {
                self.cursor = Some(Cursor::new(next, cursor.direction));
            }
        } else if let Some(entry) = self.entries.iter().find(|entry| !entry.is_solved()) {
            self.cursor = Some(Cursor::new(entry.position(), entry.direction()));
        }

        InputOutcome::Applied {
            newly_solved,
            completed,
        }
    }

    /// Erases like a backspace key.
    ///
    /// Clears the cursor cell, then steps the cursor one cell back if that
    /// cell is covered. Cells of solved entries are left alone and the cursor
    /// does not move.
    pub fn erase_letter(&mut self) -> InputOutcome {
        let Some(cursor) = self.cursor else {
            return InputOutcome::Ignored;
        };
        let point = cursor.position;
        if self.is_locked(point) {
            trace!("ignoring erase at {point}: cell belongs to a solved entry");
            return InputOutcome::Ignored;
        }
        if let Err(e) = self.grid.set_at(point, None) {
            warn!("cursor outside the letter grid: {e}");
            return InputOutcome::Ignored;
        }
        let previous = point - cursor.direction.unit_vector();
        if self.is_covered(previous) {
            self.cursor = Some(Cursor::new(previous, cursor.direction));
        }
        InputOutcome::Applied {
            newly_solved: Vec::new(),
            completed: false,
        }
    }

    fn is_locked(&self, point: Point) -> bool {
        self.entries_at(point).any(|(_, entry)| entry.is_solved())
    }

    fn mark_spelled_entries(&mut self, point: Point) -> Vec<usize> {
        let mut solved = Vec::new();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            if entry.contains(point) && !entry.is_solved() && self.grid.matches_entry(entry) {
                entry.mark_solved();
                debug!("solved {entry}");
                solved.push(i);
            }
        }
        solved
    }
}

fn normalize_letter(letter: char) -> Option<char> {
    if !letter.is_alphabetic() {
        return None;
    }
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
