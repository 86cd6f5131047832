//! Player input storage.

use std::collections::BTreeMap;

use crate::{Bounds, Entry, Point};

/// Errors raised when a [`LetterGrid`] is addressed or rebuilt incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterGridError {
    /// The point has no cell in this grid.
    #[display("{point} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The rejected point.
        point: Point,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
    /// A flattened letter array does not have `rows * cols` elements.
    #[display("expected {expected} letters, got {actual}")]
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    #[display("a {rows}x{cols} grid is too large")]
    TooLarge {
        /// Requested height.
        rows: usize,
        /// Requested width.
        cols: usize,
    },
}

/// The letters a player has typed, keyed by cell.
///
/// Storage is sparse: only filled cells are kept, keyed by the row-major
/// flattening `row * cols + col`. Writing `None` removes the key.
///
/// `(row, col)` accessors perform no bounds checking beyond debug
/// assertions; the [`Point`]-based accessors reject cells outside the grid.
///
/// # Examples
///
/// ```
/// use crossline_core::{LetterGrid, Point};
///
/// let mut grid = LetterGrid::new(3, 4);
/// grid.set(1, 2, Some('Q'));
/// assert_eq!(grid.get(1, 2), Some('Q'));
/// assert_eq!(grid.get_at(Point::new(2, 1)), Some('Q'));
/// assert_eq!(grid.filled_count(), 1);
///
/// grid.set(1, 2, None);
/// assert!(grid.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    letters: BTreeMap<usize, char>,
}

impl LetterGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            letters: BTreeMap::new(),
        }
    }

    /// Creates an empty grid just large enough for a normalized layout.
    ///
    /// Cells with negative coordinates are not representable, so the layout
    /// is expected to have been shifted to the origin first.
    #[must_use]
    pub fn for_entries(entries: &[Entry]) -> Self {
        let Some(bounds) = Bounds::of(entries) else {
            return Self::default();
        };
        let rows = usize::try_from(bounds.max.y).unwrap_or(0);
        let cols = usize::try_from(bounds.max.x).unwrap_or(0);
        Self::new(rows, cols)
    }

    /// Rebuilds a grid from a flattened row-major letter array.
    ///
    /// # Errors
    ///
    /// Returns [`LetterGridError::LengthMismatch`] if `letters` does not have
    /// exactly `rows * cols` elements, or [`LetterGridError::TooLarge`] if
    /// that product overflows.
    pub fn from_letters(
        rows: usize,
        cols: usize,
        letters: &[Option<char>],
    ) -> Result<Self, LetterGridError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(LetterGridError::TooLarge { rows, cols })?;
        if letters.len() != expected {
            return Err(LetterGridError::LengthMismatch {
                expected,
                actual: letters.len(),
            });
        }
        let letters = letters
            .iter()
            .enumerate()
            .filter_map(|(i, ch)| ch.map(|ch| (i, ch)))
            .collect();
        Ok(Self {
            rows,
            cols,
            letters,
        })
    }

    /// Flattens the grid into a row-major array with `None` for empty cells.
    #[must_use]
    pub fn to_letters(&self) -> Vec<Option<char>> {
        let mut letters = vec![None; self.rows * self.cols];
        for (&i, &ch) in &self.letters {
            if let Some(slot) = letters.get_mut(i) {
                *slot = Some(ch);
            }
        }
        letters
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flattens `(row, col)` into the storage key.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.cols, "column {col} out of range");
        row * self.cols + col
    }

    /// Inverse of [`LetterGrid::index`].
    ///
    /// # Panics
    ///
    /// Panics if the grid has no columns.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        assert!(self.cols > 0, "zero-width grid has no positions");
        (index / self.cols, index % self.cols)
    }

    /// The letter at `(row, col)`, if filled.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.letters.get(&self.index(row, col)).copied()
    }

    /// Writes or (with `None`) clears the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, letter: Option<char>) {
        let index = self.index(row, col);
        match letter {
            Some(ch) => {
                self.letters.insert(index, ch);
            }
            None => {
                self.letters.remove(&index);
            }
        }
    }

    /// Converts a point to `(row, col)`, if it lies inside the grid.
    #[must_use]
    pub fn cell_of(&self, point: Point) -> Option<(usize, usize)> {
        let row = usize::try_from(point.y).ok()?;
        let col = usize::try_from(point.x).ok()?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// The letter at `point`; `None` if empty or outside the grid.
    #[must_use]
    pub fn get_at(&self, point: Point) -> Option<char> {
        let (row, col) = self.cell_of(point)?;
        self.get(row, col)
    }

    /// Writes or clears the cell at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`LetterGridError::OutOfBounds`] if `point` is outside the grid.
    pub fn set_at(&mut self, point: Point, letter: Option<char>) -> Result<(), LetterGridError> {
        let (row, col) = self.cell_of(point).ok_or(LetterGridError::OutOfBounds {
            point,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.set(row, col, letter);
        Ok(())
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.letters.len()
    }

    /// Whether no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterates over filled cells as `(row, col, letter)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.letters.iter().map(|(&i, &ch)| {
            let (row, col) = self.position(i);
            (row, col, ch)
        })
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Whether the typed letters spell out `entry` completely.
    #[must_use]
    pub fn matches_entry(&self, entry: &Entry) -> bool {
        entry
            .cells()
            .all(|(point, ch)| self.get_at(point) == Some(ch))
    }
}
