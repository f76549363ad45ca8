#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Geometry value types shared across the Orbis engine.
//!
//! Everything except [`Rectangle`] is an immutable `Copy` value: operations
//! return new values and never touch their operands, so instances can be
//! shared across threads without synchronization.
//!
//! # Example
//!
//! ```
//! use orbis_geometry::{Axis, Point3D, Rectangle};
//!
//! let direction = Point3D::new(4.0, 6.0, 8.0).normalize();
//! let heading = direction.angle(Axis::XZ);
//! assert!(heading > 0.0);
//!
//! let mut view = Rectangle::new(0, 0, 800, 600);
//! view.translate(100, 50);
//! assert!(view.contains(450.0, 350.0));
//! ```

mod angle;
mod axis;
mod error;
mod point2d;
mod point3d;
mod quaternion;
mod rectangle;

pub use angle::{Degree, Radian};
pub use axis::Axis;
pub use error::GeometryError;
pub use point2d::Point2D;
pub use point3d::Point3D;
pub use quaternion::Quaternion;
pub use rectangle::Rectangle;
