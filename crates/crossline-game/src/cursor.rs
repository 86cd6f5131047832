use crossline_core::{Direction, Point};

/// Where the player is typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// The active cell.
    pub position: Point,
    /// The direction typing advances in.
    pub direction: Direction,
}

impl Cursor {
    /// Creates a cursor.
    #[must_use]
    pub const fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// A cursor movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl ArrowKey {
    /// All four keys.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The one-cell step this key moves the cursor by.
    #[must_use]
    pub const fn offset(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Direction::Down.unit_vector(),
            Self::Left => Point::new(-1, 0),
            Self::Right => Direction::Across.unit_vector(),
        }
    }
}
