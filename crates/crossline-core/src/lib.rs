//! Core data structures for crossword construction and solving.
//!
//! This crate provides the value types shared by the generator and the game
//! session. It has no notion of randomness or of player input events.
//!
//! # Overview
//!
//! 1. **Geometry** - [`Point`] and [`Direction`]
//! 2. **Words** - [`Clue`] (raw input), [`Answer`] (normalized letters) and
//!    [`Entry`] (a word placed on the grid)
//! 3. **Layout helpers** - [`Bounds`], the bounding box used for scoring and
//!    grid sizing
//! 4. **Player input** - [`LetterGrid`], a sparse cell-to-letter map
//!
//! # Examples
//!
//! ```
//! use crossline_core::{Answer, Direction, Entry, LetterGrid, Point};
//!
//! let entry = Entry::new("Feline", Answer::new("cat")?, Point::ORIGIN, Direction::Across, 1);
//! let mut grid = LetterGrid::for_entries(std::slice::from_ref(&entry));
//!
//! for (point, letter) in entry.cells() {
//!     grid.set_at(point, Some(letter))?;
//! }
//! assert!(grid.matches_entry(&entry));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bounds;
pub mod direction;
pub mod entry;
pub mod letter_grid;
pub mod point;

pub use self::{
    bounds::Bounds,
    direction::{Direction, ParseDirectionError},
    entry::{Answer, AnswerError, Clue, Entry},
    letter_grid::{LetterGrid, LetterGridError},
    point::Point,
};
