//! Legality checks for candidate word placements.

use crossline_core::{Answer, Direction, Entry, Point};

/// A word at a proposed position, not yet part of the layout.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Letters of the word.
    pub answer: &'a Answer,
    /// Cell of the first letter.
    pub position: Point,
    /// Travel direction.
    pub direction: Direction,
}

impl<'a> Placement<'a> {
    /// Creates a placement.
    #[must_use]
    pub fn new(answer: &'a Answer, position: Point, direction: Direction) -> Self {
        Self {
            answer,
            position,
            direction,
        }
    }

    /// Views an already placed entry as a placement.
    #[must_use]
    pub fn of(entry: &'a Entry) -> Self {
        Self::new(entry.answer(), entry.position(), entry.direction())
    }

    /// `(line, start)`: the coordinate perpendicular to travel and the
    /// coordinate of the first letter along travel.
    fn line_and_start(&self) -> (i32, i32) {
        match self.direction {
            Direction::Across => (self.position.y, self.position.x),
            Direction::Down => (self.position.x, self.position.y),
        }
    }

    fn letter(&self, offset: i32) -> Option<char> {
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.answer.letter(i))
    }

    fn letter_at(&self, point: Point) -> Option<char> {
        let delta = point - self.position;
        match self.direction {
            Direction::Across if delta.y == 0 => self.letter(delta.x),
            Direction::Down if delta.x == 0 => self.letter(delta.y),
            _ => None,
        }
    }
}

/// Decides whether `candidate` can join `existing` without breaking the layout.
///
/// The candidate is checked pairwise against every entry:
///
/// - **Parallel words on different lines** clash whenever the lines are
///   adjacent, wherever the runs lie along them. Lines further apart never
///   clash.
/// - **Parallel words on the same line** must agree on every cell both cover.
///   A run lying entirely inside the other (including an identical run) is
///   rejected even when every letter agrees.
/// - **Perpendicular words** can meet in at most one cell,
///   `(down.x, across.y)`; if both cover it, their letters there must match.
///
/// # Examples
///
/// ```
/// use crossline_core::{Answer, Direction, Entry, Point};
/// use crossline_generator::validator::{Placement, is_valid_placement};
///
/// let cat = Answer::new("CAT")?;
/// let existing = [Entry::new("", cat.clone(), Point::ORIGIN, Direction::Across, 1)];
///
/// let car = Answer::new("CAR")?;
/// assert!(is_valid_placement(&existing, Placement::new(&car, Point::ORIGIN, Direction::Down)));
///
/// let dog = Answer::new("DOG")?;
/// assert!(!is_valid_placement(&existing, Placement::new(&dog, Point::ORIGIN, Direction::Down)));
/// # Ok::<(), crossline_core::AnswerError>(())
/// ```
#[must_use]
pub fn is_valid_placement(existing: &[Entry], candidate: Placement<'_>) -> bool {
    existing
        .iter()
        .all(|entry| are_compatible(Placement::of(entry), candidate))
}

fn are_compatible(a: Placement<'_>, b: Placement<'_>) -> bool {
    match (a.direction, b.direction) {
        (Direction::Across, Direction::Across) | (Direction::Down, Direction::Down) => {
            parallel_compatible(a, b)
        }
        (Direction::Across, Direction::Down) => crossing_compatible(a, b),
        (Direction::Down, Direction::Across) => crossing_compatible(b, a),
    }
}

fn parallel_compatible(a: Placement<'_>, b: Placement<'_>) -> bool {
    let (a_line, a_start) = a.line_and_start();
    let (b_line, b_start) = b.line_and_start();
    let a_end = a_start + a.answer.span();
    let b_end = b_start + b.answer.span();
    let lo = a_start.max(b_start);
    let hi = a_end.min(b_end);
    let overlapping = lo < hi;

    if a_line != b_line {
        return a_line.abs_diff(b_line) != 1;
    }
    if !overlapping {
        return true;
    }
    if (lo, hi) == (a_start, a_end) || (lo, hi) == (b_start, b_end) {
        return false;
    }
    (lo..hi).all(|t| a.letter(t - a_start) == b.letter(t - b_start))
}

fn crossing_compatible(across: Placement<'_>, down: Placement<'_>) -> bool {
    debug_assert_eq!(across.direction, Direction::Across);
    debug_assert_eq!(down.direction, Direction::Down);

    let cell = Point::new(down.position.x, across.position.y);
    match (across.letter_at(cell), down.letter_at(cell)) {
        (Some(a), Some(d)) => a == d,
        _ => true,
    }
}
