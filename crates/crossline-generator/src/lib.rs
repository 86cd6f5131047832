//! Crossword layout generation.
//!
//! Given a list of hint/answer pairs, [`PuzzleGenerator`] places every
//! answer on an integer grid so that crossing words share a letter and no
//! two words disagree about a cell, preferring the most compact layout found
//! within a bounded number of randomized attempts.
//!
//! # Overview
//!
//! - [`validator`]: whether a candidate word position is legal
//! - [`search`]: placing one word against a partial layout
//! - [`PuzzleGenerator`]: repeated shuffled attempts, scoring and
//!   normalization
//! - [`PuzzleSeed`] and [`RandomSource`]: reproducible randomness
//!
//! # Examples
//!
//! ```
//! use crossline_core::Clue;
//! use crossline_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let clues = vec![
//!     Clue::new("Capital of France", "Paris"),
//!     Clue::new("Capital of Italy", "Rome"),
//! ];
//! let generator = PuzzleGenerator::with_config(GeneratorConfig::default().with_max_attempts(200));
//! let seed = PuzzleSeed::from_phrase("capitals");
//!
//! let first = generator.generate_with_seed(&clues, seed)?;
//! let second = generator.generate_with_seed(&clues, seed)?;
//! assert_eq!(first, second);
//! # Ok::<(), crossline_generator::GenerateError>(())
//! ```

pub use self::{error::*, generator::*, random::*, seed::*};

mod error;
mod generator;
mod random;
pub mod search;
mod seed;
pub mod validator;
