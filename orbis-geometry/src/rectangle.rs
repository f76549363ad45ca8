use derive_more::Display;
use getset::{CopyGetters, Setters};

use crate::point2d::Point2D;

/// An axis-aligned 2-dimensional box holding the 4 extremity values.
///
/// The bounds may be stored unordered (left greater than right, top greater
/// than bottom); queries stay correct, and [`normalize`](Self::normalize)
/// reorders them in place. This is the one mutable type of the crate and
/// carries no internal synchronization.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, CopyGetters, Setters, Display,
)]
#[display("Rectangle(left={left}, top={top}, right={right}, bottom={bottom})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Left X value.
    #[getset(get_copy = "pub", set = "pub")]
    left: i32,
    /// Up Y value.
    #[getset(get_copy = "pub", set = "pub")]
    top: i32,
    /// Right X value.
    #[getset(get_copy = "pub", set = "pub")]
    right: i32,
    /// Down Y value.
    #[getset(get_copy = "pub", set = "pub")]
    bottom: i32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] from its 4 extremities.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Checks whether the given coordinates fall inside the rectangle,
    /// bounds included.
    ///
    /// Correct even when the bounds are stored unordered; the rectangle is
    /// not modified.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (x1, x2) = if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        };
        let (y1, y2) = if self.top <= self.bottom {
            (self.top, self.bottom)
        } else {
            (self.bottom, self.top)
        };
        x >= x1 as f32 && x <= x2 as f32 && y >= y1 as f32 && y <= y2 as f32
    }

    /// Checks whether the given point falls inside the rectangle.
    #[must_use]
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.contains(point.x, point.y)
    }

    /// The rectangle width, whatever the bounds ordering.
    #[must_use]
    pub const fn width(&self) -> i32 {
        (self.right - self.left).abs()
    }

    /// The rectangle height, whatever the bounds ordering.
    #[must_use]
    pub const fn height(&self) -> i32 {
        (self.bottom - self.top).abs()
    }

    /// Moves the rectangle by adding the given values to its bounds.
    pub fn translate(&mut self, x: i32, y: i32) {
        self.left += x;
        self.right += x;
        self.top += y;
        self.bottom += y;
    }

    /// Reorders the bounds in place so that left ≤ right and top ≤ bottom.
    pub fn normalize(&mut self) {
        if self.left > self.right {
            core::mem::swap(&mut self.left, &mut self.right);
        }
        if self.top > self.bottom {
            core::mem::swap(&mut self.top, &mut self.bottom);
        }
    }

    /// Sets all values to 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Updates the 4 values at once.
    pub fn set_values(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use super::*;

    #[rstest::rstest]
    #[case(true, Rectangle::new(0, 2, 10, 4), 5.0, 3.0)]
    #[case(true, Rectangle::new(0, 2, 10, 4), 0.0, 2.0)]
    #[case(true, Rectangle::new(0, 2, 10, 4), 10.0, 4.0)]
    #[case(false, Rectangle::new(0, 2, 10, 4), 10.5, 3.0)]
    #[case(false, Rectangle::new(0, 2, 10, 4), 5.0, 4.5)]
    #[case(false, Rectangle::new(0, 2, 10, 4), -0.5, 3.0)]
    #[case(true, Rectangle::new(15, 28, 5, 12), 7.0, 14.0)]
    #[case(false, Rectangle::new(15, 28, 5, 12), 4.0, 14.0)]
    fn contains(#[case] expected: bool, #[case] rectangle: Rectangle, #[case] x: f32, #[case] y: f32) {
        assert_eq!(expected, rectangle.contains(x, y));
    }

    #[test]
    fn contains_does_not_reorder_bounds() {
        let r = Rectangle::new(15, 28, 5, 12);
        assert!(r.contains(7.0, 14.0));
        assert_eq!(Rectangle::new(15, 28, 5, 12), r);
    }

    #[test]
    fn contains_point() {
        let r = Rectangle::new(0, 2, 10, 4);
        assert!(r.contains_point(Point2D::new(5.0, 3.0)));
        assert!(!r.contains_point(Point2D::new(5.0, 5.0)));
    }

    #[rstest::rstest]
    #[case(8, 2, Rectangle::new(2, 5, 10, 7))]
    #[case(8, 2, Rectangle::new(10, 7, 2, 5))]
    fn dimensions(#[case] width: i32, #[case] height: i32, #[case] rectangle: Rectangle) {
        assert_eq!(width, rectangle.width());
        assert_eq!(height, rectangle.height());
    }

    #[test]
    fn normalize() {
        let mut r = Rectangle::new(4, 41, 2, 2);
        r.normalize();
        assert_eq!(Rectangle::new(2, 2, 4, 41), r);
        assert!(r.left() < r.right());
        assert!(r.top() < r.bottom());
    }

    #[test]
    fn normalize_ordered_is_untouched() {
        let mut r = Rectangle::new(1, 2, 3, 4);
        r.normalize();
        assert_eq!(Rectangle::new(1, 2, 3, 4), r);
    }

    #[test]
    fn translate() {
        let mut r = Rectangle::new(1, 2, 3, 4);
        r.translate(10, -2);
        assert_eq!(Rectangle::new(11, 0, 13, 2), r);
    }

    #[test]
    fn reset() {
        let mut r = Rectangle::new(1, 2, 3, 4);
        r.reset();
        assert_eq!(Rectangle::default(), r);
        assert_eq!(0, r.left());
        assert_eq!(0, r.top());
        assert_eq!(0, r.right());
        assert_eq!(0, r.bottom());
    }

    #[test]
    fn set_values() {
        let mut r = Rectangle::default();
        r.set_values(1, 2, 3, 4);
        assert_eq!(Rectangle::new(1, 2, 3, 4), r);
    }

    #[test]
    fn setters() {
        let mut r = Rectangle::default();
        r.set_left(1);
        r.set_top(2);
        r.set_right(3);
        r.set_bottom(4);
        assert_eq!(Rectangle::new(1, 2, 3, 4), r);
    }

    #[rstest::rstest]
    #[case(false, Rectangle::new(0, 2, 3, 4))]
    #[case(false, Rectangle::new(1, 0, 3, 4))]
    #[case(false, Rectangle::new(1, 2, 0, 4))]
    #[case(false, Rectangle::new(1, 2, 3, 0))]
    #[case(true, Rectangle::new(1, 2, 3, 4))]
    fn equality(#[case] expected: bool, #[case] other: Rectangle) {
        assert_eq!(expected, Rectangle::new(1, 2, 3, 4) == other);
    }

    #[test]
    fn hash() {
        let s = RandomState::new();
        assert_eq!(
            s.hash_one(Rectangle::new(1, 2, 3, 4)),
            s.hash_one(Rectangle::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            "Rectangle(left=1, top=2, right=3, bottom=4)",
            Rectangle::new(1, 2, 3, 4).to_string()
        );
    }
}
