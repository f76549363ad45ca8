use derive_more::{Add, Display, Sub};

/// A 2-dimensional coordinate.
///
/// Immutable; every operation returns a new value and leaves its operands
/// untouched. Equality is exact componentwise comparison.
#[derive(Clone, Copy, Debug, PartialEq, Add, Sub, Display)]
#[display("{:?},{:?}", x, y)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    /// Value on the x axis.
    pub x: f32,
    /// Value on the y axis.
    pub y: f32,
}

impl Point2D {
    /// The 0,0 coordinate.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new [`Point2D`].
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Mul<f32> for Point2D {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
