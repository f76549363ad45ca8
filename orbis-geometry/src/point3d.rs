use core::hash::{Hash, Hasher};

use derive_more::{Add, Display, Sub};

use crate::axis::Axis;

const EPSILON: f32 = 0.00001;

/// A 3-dimensional coordinate.
///
/// Immutable; every operation returns a new value and leaves its operands
/// untouched.
///
/// Equality is bit-exact per component, with one carve-out: when both
/// operands' corresponding components lie strictly within (-ε, ε) with
/// ε = 0.00001, the components compare equal whatever their bit patterns.
/// Hashing uses the raw bit patterns, so two points equal through the
/// carve-out can still hash differently; keys holding near-zero components
/// must be brought to a canonical form first.
#[derive(Clone, Copy, Debug, Add, Sub, Display)]
#[display("{:?},{:?},{:?}", x, y, z)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    /// Value on the x axis.
    pub x: f32,
    /// Value on the y axis.
    pub y: f32,
    /// Value on the z axis.
    pub z: f32,
}

impl Point3D {
    /// All values at 0.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Unit point along +X.
    pub const X_POSITIVE: Self = Self::from_x(1.0);

    /// Unit point along -X.
    pub const X_NEGATIVE: Self = Self::from_x(-1.0);

    /// Unit point along +Y.
    pub const Y_POSITIVE: Self = Self::from_y(1.0);

    /// Unit point along -Y.
    pub const Y_NEGATIVE: Self = Self::from_y(-1.0);

    /// Unit point along +Z.
    pub const Z_POSITIVE: Self = Self::from_z(1.0);

    /// Unit point along -Z.
    pub const Z_NEGATIVE: Self = Self::from_z(-1.0);

    /// Initial direction of every built object, along -Z.
    pub const BASE_DIRECTION: Self = Self::Z_NEGATIVE;

    /// Creates a new [`Point3D`].
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a point with the same value on the three axes.
    #[must_use]
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a point on the x axis, y and z at 0.
    #[must_use]
    pub const fn from_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    /// Creates a point on the y axis, x and z at 0.
    #[must_use]
    pub const fn from_y(y: f32) -> Self {
        Self::new(0.0, y, 0.0)
    }

    /// Creates a point on the z axis, x and y at 0.
    #[must_use]
    pub const fn from_z(z: f32) -> Self {
        Self::new(0.0, 0.0, z)
    }

    /// Creates a point in the XY plane, z at 0.
    #[must_use]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a point in the XY plane with the same value on both axes.
    #[must_use]
    pub const fn uniform_xy(xy: f32) -> Self {
        Self::from_xy(xy, xy)
    }

    /// Creates a point in the XZ plane, y at 0.
    #[must_use]
    pub const fn from_xz(x: f32, z: f32) -> Self {
        Self::new(x, 0.0, z)
    }

    /// Creates a point in the XZ plane with the same value on both axes.
    #[must_use]
    pub const fn uniform_xz(xz: f32) -> Self {
        Self::from_xz(xz, xz)
    }

    /// Creates a point in the YZ plane, x at 0.
    #[must_use]
    pub const fn from_yz(y: f32, z: f32) -> Self {
        Self::new(0.0, y, z)
    }

    /// Creates a point in the YZ plane with the same value on both axes.
    #[must_use]
    pub const fn uniform_yz(yz: f32) -> Self {
        Self::from_yz(yz, yz)
    }

    /// Creates a point from the addition of other points.
    #[must_use]
    pub fn add_points(points: &[Self]) -> Self {
        points.iter().copied().sum()
    }

    /// Adds a value to the x component.
    #[must_use]
    pub const fn add_x(self, value: f32) -> Self {
        Self::new(self.x + value, self.y, self.z)
    }

    /// Adds a value to the y component.
    #[must_use]
    pub const fn add_y(self, value: f32) -> Self {
        Self::new(self.x, self.y + value, self.z)
    }

    /// Adds a value to the z component.
    #[must_use]
    pub const fn add_z(self, value: f32) -> Self {
        Self::new(self.x, self.y, self.z + value)
    }

    /// Normalizes the point.
    ///
    /// Equivalent to [`normalize_and_multiply`](Self::normalize_and_multiply)
    /// with a scalar of 1.
    #[must_use]
    pub fn normalize(self) -> Self {
        self.normalize_and_multiply(1.0)
    }

    /// Normalizes the point, then scales it to the given length.
    ///
    /// A point of near-zero length is returned unchanged instead of dividing
    /// by it.
    #[must_use]
    pub fn normalize_and_multiply(self, scalar: f32) -> Self {
        let length = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if length.abs() > 1e-6 {
            Self::new(
                scalar * (self.x / length),
                scalar * (self.y / length),
                scalar * (self.z / length),
            )
        } else {
            self
        }
    }

    /// Computes the squared distance to another point.
    #[must_use]
    pub fn squared_distance(self, other: Self) -> f32 {
        let x = self.x - other.x;
        let y = self.y - other.y;
        let z = self.z - other.z;
        x * x + y * y + z * z
    }

    /// Computes the angle of the point projected on the given plane.
    #[must_use]
    pub fn angle(self, axis: Axis) -> f32 {
        match axis {
            Axis::XY => self.y.atan2(self.x),
            Axis::XZ => self.z.atan2(self.x),
            Axis::ZY => self.y.atan2(self.z),
        }
    }

    /// Returns the point with all values inverted (5,10,-8 becomes -5,-10,8).
    #[must_use]
    pub fn inverse(self) -> Self {
        -self
    }

    /// Returns the point with each value rounded to the nearest integer.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    /// Copy of the point with z at 0.
    #[must_use]
    pub const fn to_xy(self) -> Self {
        Self::from_xy(self.x, self.y)
    }

    /// Copy of the point with y at 0.
    #[must_use]
    pub const fn to_xz(self) -> Self {
        Self::from_xz(self.x, self.z)
    }

    /// Copy of the point with x at 0.
    #[must_use]
    pub const fn to_yz(self) -> Self {
        Self::from_yz(self.y, self.z)
    }
}

impl core::ops::Mul<f32> for Point3D {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl core::ops::Neg for Point3D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl core::iter::Sum for Point3D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

// Both components strictly inside (-EPSILON, EPSILON).
fn zero_pair(a: f32, b: f32) -> bool {
    a < EPSILON && a > -EPSILON && b < EPSILON && b > -EPSILON
}

impl PartialEq for Point3D {
    fn eq(&self, other: &Self) -> bool {
        (zero_pair(self.x, other.x) || self.x.to_bits() == other.x.to_bits())
            && (zero_pair(self.y, other.y) || self.y.to_bits() == other.y.to_bits())
            && (zero_pair(self.z, other.z) || self.z.to_bits() == other.z.to_bits())
    }
}

impl Eq for Point3D {}

impl Hash for Point3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.x.to_bits());
        state.write_u32(self.y.to_bits());
        state.write_u32(self.z.to_bits());
    }
}
