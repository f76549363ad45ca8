use thiserror::Error;

use crate::angle::Radian;

/// An error produced when constructing a geometry value.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum GeometryError {
    /// Radian angle is out of range.
    #[error(
        "Radian angle ({0}) is out of range ([{min}, {max}])",
        min = -Radian::EPSILON,
        max = Radian::PI2 + Radian::EPSILON
    )]
    RadianOutOfRange(f32),

    /// Degree angle is out of range for a radian conversion.
    #[error("Degree angle ({0}) is out of range ([0, 360])")]
    DegreeOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radian_message() {
        assert_eq!(
            format!(
                "Radian angle (7) is out of range ([{}, {}])",
                -Radian::EPSILON,
                Radian::PI2 + Radian::EPSILON
            ),
            GeometryError::RadianOutOfRange(7.0).to_string()
        );
    }

    #[test]
    fn degree_message() {
        assert_eq!(
            "Degree angle (361) is out of range ([0, 360])",
            GeometryError::DegreeOutOfRange(361.0).to_string()
        );
    }
}
