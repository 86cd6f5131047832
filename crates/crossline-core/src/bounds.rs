//! Bounding boxes of layouts.

use crate::{Entry, Point};

/// The smallest axis-aligned box containing a set of entries.
///
/// `min` is inclusive and `max` is exclusive, so a single across entry of
/// length 5 at the origin has bounds `(0, 0)..(5, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top-left covered cell.
    pub min: Point,
    /// One past the bottom-right covered cell.
    pub max: Point,
}

impl Bounds {
    /// Computes the bounds of `entries`, or `None` when there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossline_core::{Answer, Bounds, Direction, Entry, Point};
    ///
    /// let entries = [
    ///     Entry::new("", Answer::new("CAT")?, Point::new(0, 0), Direction::Across, 1),
    ///     Entry::new("", Answer::new("CAR")?, Point::new(0, 0), Direction::Down, 1),
    /// ];
    /// let bounds = Bounds::of(&entries).unwrap();
    /// assert_eq!(bounds.width(), 3);
    /// assert_eq!(bounds.height(), 3);
    /// assert_eq!(bounds.area(), 9);
    /// # Ok::<(), crossline_core::AnswerError>(())
    /// ```
    pub fn of<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries.into_iter().fold(None, |bounds, entry| {
            let min = entry.position();
            let max = min + entry.extent();
            Some(match bounds {
                None => Self { min, max },
                Some(Self { min: lo, max: hi }) => Self {
                    min: Point::new(lo.x.min(min.x), lo.y.min(min.y)),
                    max: Point::new(hi.x.max(max.x), hi.y.max(max.y)),
                },
            })
        })
    }

    /// Number of columns spanned.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of rows spanned.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// `width * height`, the score a layout is ranked by (smaller is better).
    #[must_use]
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Whether `point` lies inside the box.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..self.max.x).contains(&point.x) && (self.min.y..self.max.y).contains(&point.y)
    }
}
