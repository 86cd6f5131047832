//! Integer grid coordinates.

/// A cell coordinate on the (unbounded) layout plane.
///
/// `x` grows to the right and `y` grows downwards, so an across word advances
/// along `x` and a down word advances along `y`. Coordinates may be negative
/// while a layout is being built; generated puzzles are shifted so that every
/// coordinate is non-negative.
///
/// Points are plain values: the arithmetic operators return new points.
///
/// # Examples
///
/// ```
/// use crossline_core::Point;
///
/// let p = Point::new(2, 3) + Point::new(1, -1);
/// assert_eq!(p, Point::new(3, 2));
/// assert_eq!(Point::new(1, 0) * 4, Point::new(4, 0));
/// assert_eq!(p - p, Point::ORIGIN);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Mul,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point::new(3, -2);
        let b = Point::new(-1, 5);
        assert_eq!(a + b, Point::new(2, 3));
        assert_eq!(a - b, Point::new(4, -7));
        assert_eq!(b * 3, Point::new(-3, 15));
        assert_eq!(a * 0, Point::ORIGIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(4, -1).to_string(), "(4, -1)");
    }

    proptest! {
        #[test]
        fn test_add_then_sub_restores(
            ax in -1000..1000_i32,
            ay in -1000..1000_i32,
            bx in -1000..1000_i32,
            by in -1000..1000_i32,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a + b - b, a);
        }
    }
}
