/// Possible projection planes in a 3-dimensional context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Front view (if Y = up).
    XY,
    /// Top view (if Y = up).
    XZ,
    /// Left view (if Y = up).
    ZY,
}
