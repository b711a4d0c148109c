use std::convert::TryFrom;
use std::ops::Range;

use super::vector;
use super::{Line, Point};
use crate::{Error, GeometryScalar, Intersects};

///////////////////////////////////////////////////////////////////////////////
// Segment

/// Closed line segment between `src` and `dst`.
///
/// Zero length segments are allowed. They never intersect anything and have
/// no supporting line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T: GeometryScalar> Segment<T> {
  pub fn new(src: Point<T>, dst: Point<T>) -> Segment<T> {
    Segment { src, dst }
  }

  pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Segment<T> {
    Segment::new(Point::new([x1, y1]), Point::new([x2, y2]))
  }

  pub fn length(&self) -> T {
    vector::length(
      self.dst.x_coord() - self.src.x_coord(),
      self.dst.y_coord() - self.src.y_coord(),
    )
  }

  pub fn is_degenerate(&self) -> bool {
    self.length() == T::zero()
  }

  /// Supporting line. Fails for degenerate segments.
  pub fn line(&self) -> Result<Line<T>, Error> {
    Line::try_from(self)
  }

  fn shares_endpoint(&self, other: &Segment<T>) -> bool {
    self.src == other.src || self.src == other.dst || self.dst == other.src || self.dst == other.dst
  }

  /// Point where the two segments cross, if any.
  ///
  /// Segments with a common end point are not considered crossing, and
  /// neither are zero length segments. Overlapping colinear segments do not
  /// cross either.
  ///
  /// The computation moves `self.src` to the origin and rotates `self` onto
  /// the positive X axis. `other` crosses when its end points land on
  /// opposite sides of the X axis and the crossing falls within `self`.
  pub fn intersection_point(&self, other: &Segment<T>) -> Option<Point<T>> {
    let this_length = self.length();
    if this_length == T::zero() || other.length() == T::zero() {
      return None;
    }

    if self.shares_endpoint(other) {
      return None;
    }

    let [x1, y1] = self.src.array;
    let [x2, y2] = self.dst.array;
    let cos = (x2 - x1) / this_length;
    let sin = (y2 - y1) / this_length;

    let rotate = |pt: &Point<T>| {
      let dx = pt.x_coord() - x1;
      let dy = pt.y_coord() - y1;
      (dx * cos + dy * sin, dy * cos - dx * sin)
    };
    let (other_x1, other_y1) = rotate(&other.src);
    let (other_x2, other_y2) = rotate(&other.dst);

    // Both ends on the same side of the X axis. Touching counts as above.
    let zero = T::zero();
    if (other_y1 < zero && other_y2 < zero) || (other_y1 >= zero && other_y2 >= zero) {
      return None;
    }

    let i_pos = other_x2 + (other_x1 - other_x2) * other_y2 / (other_y2 - other_y1);
    if i_pos < zero || i_pos > this_length {
      return None;
    }

    Some(Point::new([x1 + i_pos * cos, y1 + i_pos * sin]))
  }

  pub fn intersects(&self, other: &Segment<T>) -> bool {
    self.intersection_point(other).is_some()
  }
}

impl<T: GeometryScalar> From<Range<Point<T>>> for Segment<T> {
  fn from(range: Range<Point<T>>) -> Segment<T> {
    Segment::new(range.start, range.end)
  }
}

impl<T: GeometryScalar> From<Range<(T, T)>> for Segment<T> {
  fn from(range: Range<(T, T)>) -> Segment<T> {
    Segment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a, T: GeometryScalar> Intersects for &'a Segment<T> {
  type Result = Point<T>;
  fn intersect(self, other: &'a Segment<T>) -> Option<Self::Result> {
    self.intersection_point(other)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
