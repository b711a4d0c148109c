// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Small toolkit for planar geometry over floating point coordinates.
//!
//! Angles are measured in degrees unless a function name says otherwise.
//! Vector angles grow counter-clockwise from the positive X axis and lie in
//! `[-180, 180]`.
//!
//! ```rust
//! # use reefgeom::data::{Point, Segment};
//! let a = Segment::from(Point::new([0.0, 0.0])..Point::new([2.0, 2.0]));
//! let b = Segment::from(Point::new([0.0, 2.0])..Point::new([2.0, 0.0]));
//! let p: Point<f64> = a.intersection_point(&b).unwrap();
//! assert!((p.x_coord() - 1.0).abs() < 1e-9);
//! ```
use num_traits::{Float, FloatConst, NumAssignOps};
use std::iter::Sum;

pub mod algorithms;
mod angle;
pub mod data;
mod distance;
mod intersection;
mod orientation;

pub use angle::{degrees_from_radians, radians_from_degrees, Angle};
pub use distance::Distance;
pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The leading coefficients of a line are both zero.
  InvalidGeometry,
  InsufficientVertices,
  DuplicatePoints,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidGeometry => write!(f, "a and b cannot be 0 at the same time"),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type accepted by every geometric primitive in this crate.
pub trait GeometryScalar:
  std::fmt::Debug + Float + FloatConst + NumAssignOps + Sum + Default
{
  fn from_constant(val: i16) -> Self;
  /// Lossless widening used by the exact predicates.
  fn as_f64(self) -> f64;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl GeometryScalar for $ty {
        fn from_constant(val: i16) -> Self {
          <$ty>::from(val)
        }
        fn as_f64(self) -> f64 {
          f64::from(self)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
