use core::f32::consts::PI;

use derive_more::Display;

use crate::error::GeometryError;

/// An angle expressed in degrees.
///
/// The stored value is unconstrained; [`Degree::uniform_value`] folds it back
/// into a single turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degree {
    angle: f32,
}

impl Degree {
    /// An angle of 0°.
    pub const ZERO: Self = Self { angle: 0.0 };

    /// An angle of 180°.
    pub const HALF: Self = Self { angle: 180.0 };

    /// An angle of 360°.
    pub const FULL: Self = Self { angle: 360.0 };

    /// Creates a new [`Degree`]. The value is stored as-is.
    #[must_use]
    pub const fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Returns the angle value.
    #[must_use]
    pub const fn angle(self) -> f32 {
        self.angle
    }

    /// Returns the angle folded into [0, 360].
    ///
    /// The fold repeatedly adds or subtracts a full turn and stops at the
    /// first value inside the range, so an input landing exactly on 360
    /// stays 360.
    #[must_use]
    pub fn uniform_value(self) -> f32 {
        let mut v = self.angle;
        while v < 0.0 {
            v += 360.0;
        }
        while v > 360.0 {
            v -= 360.0;
        }
        v
    }
}

/// An angle expressed in radians, validated at construction to lie within a
/// single turn.
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display("Radian value: {:?}", angle)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radian {
    angle: f32,
}

impl Radian {
    /// 2π.
    pub const PI2: f32 = PI * 2.0;

    /// Tolerance applied to the range bounds at construction.
    pub const EPSILON: f32 = 0.00001;

    /// Creates a new [`Radian`].
    ///
    /// # Errors
    ///
    /// [`GeometryError::RadianOutOfRange`] unless the angle lies within
    /// [-[`EPSILON`](Self::EPSILON), 2π + [`EPSILON`](Self::EPSILON)].
    pub fn new(angle: f32) -> Result<Self, GeometryError> {
        if !(-Self::EPSILON..=Self::PI2 + Self::EPSILON).contains(&angle) {
            return Err(GeometryError::RadianOutOfRange(angle));
        }
        Ok(Self { angle })
    }

    /// Converts a [`Degree`] into a [`Radian`].
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegreeOutOfRange`] unless the degree lies within
    /// [0, 360].
    pub fn from_degree(degree: Degree) -> Result<Self, GeometryError> {
        if !(0.0..=360.0).contains(&degree.angle()) {
            return Err(GeometryError::DegreeOutOfRange(degree.angle()));
        }
        Ok(Self {
            angle: degree.angle().to_radians(),
        })
    }

    /// Returns the angle value.
    #[must_use]
    pub const fn angle(self) -> f32 {
        self.angle
    }
}
