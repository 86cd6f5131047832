//! Word directions.

use std::{ops::Not, str::FromStr};

use crate::Point;

/// The two directions a word can travel: left-to-right or top-to-bottom.
///
/// `Across` orders before `Down`, which is the order clue lists are shown in
/// for entries sharing a number.
///
/// # Examples
///
/// ```
/// use crossline_core::{Direction, Point};
///
/// assert_eq!(Direction::Across.perpendicular(), Direction::Down);
/// assert_eq!(!Direction::Down, Direction::Across);
/// assert_eq!(Direction::Down.unit_vector(), Point::new(0, 1));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display,
)]
pub enum Direction {
    /// Left to right.
    #[default]
    #[display("across")]
    Across,
    /// Top to bottom.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, `Across` first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the offset between two consecutive letters of a word
    /// travelling in this direction.
    #[must_use]
    pub const fn unit_vector(self) -> Point {
        match self {
            Self::Across => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
        }
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        self.perpendicular()
    }
}

/// Error returned when parsing a [`Direction`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {input:?} (expected \"across\" or \"down\")")]
pub struct ParseDirectionError {
    input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("across") || trimmed.eq_ignore_ascii_case("a") {
            Ok(Self::Across)
        } else if trimmed.eq_ignore_ascii_case("down") || trimmed.eq_ignore_ascii_case("d") {
            Ok(Self::Down)
        } else {
            Err(ParseDirectionError {
                input: s.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.perpendicular(), direction);
            assert_eq!(direction.perpendicular().perpendicular(), direction);
            assert_eq!(!direction, direction.perpendicular());
        }
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::Across.unit_vector(), Point::new(1, 0));
        assert_eq!(Direction::Down.unit_vector(), Point::new(0, 1));
    }

    #[test]
    fn test_ordering() {
        assert!(Direction::Across < Direction::Down);
    }

    #[test]
    fn test_parse() {
        assert_eq!("across".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!(" Down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("A".parse::<Direction>(), Ok(Direction::Across));
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::Down.to_string().parse(), Ok(Direction::Down));
    }
}
