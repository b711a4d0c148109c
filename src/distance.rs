use crate::data::{vector, Line, Point, Segment};
use crate::GeometryScalar;

/// Shortest Euclidean distance between two shapes.
pub trait Distance<T = Self> {
  type Output;
  fn distance_to(&self, other: T) -> Self::Output;
}

impl<'a, T: GeometryScalar> Distance<&'a Point<T>> for Point<T> {
  type Output = T;
  fn distance_to(&self, other: &'a Point<T>) -> T {
    vector::length(
      other.x_coord() - self.x_coord(),
      other.y_coord() - self.y_coord(),
    )
  }
}

/// Perpendicular distance to an infinite line.
///
/// ```rust
/// # use reefgeom::data::{Line, Point};
/// # use reefgeom::Distance;
/// let x_axis = Line::through(&Point::new([-1.0, 0.0]), &Point::new([1.0, 0.0])).unwrap();
/// assert_eq!(Point::new([0.0, 0.0]).distance_to(&x_axis), 0.0);
/// assert_eq!(Point::new([0.0, 2.0]).distance_to(&x_axis), 2.0);
/// ```
impl<'a, T: GeometryScalar> Distance<&'a Line<T>> for Point<T> {
  type Output = T;
  fn distance_to(&self, line: &'a Line<T>) -> T {
    line.eval(self).abs() / vector::length(line.a(), line.b())
  }
}

/// Distance to the closest point of a closed segment.
///
/// When the perpendicular foot lands on the segment the distance to the
/// supporting line is used. Otherwise the nearer end point wins. A zero
/// length segment behaves like its single point.
impl<'a, T: GeometryScalar> Distance<&'a Segment<T>> for Point<T> {
  type Output = T;
  fn distance_to(&self, segment: &'a Segment<T>) -> T {
    let len = segment.length();
    let c1 = self.distance_to(&segment.src);
    if len == T::zero() {
      return c1;
    }
    let c2 = self.distance_to(&segment.dst);

    // Neither angle at the end points is obtuse.
    let len2 = len * len;
    if c2 * c2 <= len2 + c1 * c1 && c1 * c1 <= len2 + c2 * c2 {
      self.distance_to(&Line::through_unchecked(&segment.src, &segment.dst))
    } else {
      c1.min(c2)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn point_to_point() {
    let p = Point::new([1.0, 1.0]);
    assert_eq!(p.distance_to(&Point::new([4.0, 5.0])), 5.0);
    assert_eq!(p.distance_to(&p), 0.0);
  }

  #[test]
  fn point_to_line() {
    let line = Line::new(3.0, 4.0, -10.0).unwrap();
    assert_close(Point::new([0.0, 0.0]).distance_to(&line), 2.0);
    assert_close(Point::new([2.0, 1.0]).distance_to(&line), 0.0);
  }

  #[test]
  fn point_to_segment_interior() {
    let segment = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
    assert_close(Point::new([5.0, 3.0]).distance_to(&segment), 3.0);
    assert_close(Point::new([0.0, -2.0]).distance_to(&segment), 2.0);
    assert_close(Point::new([7.0, 0.0]).distance_to(&segment), 0.0);
  }

  #[test]
  fn point_to_segment_beyond_ends() {
    let segment = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
    assert_close(Point::new([13.0, 4.0]).distance_to(&segment), 5.0);
    assert_close(Point::new([-3.0, -4.0]).distance_to(&segment), 5.0);
    // On the supporting line but past the end.
    assert_close(Point::new([12.0, 0.0]).distance_to(&segment), 2.0);
  }

  #[test]
  fn point_to_degenerate_segment() {
    let segment = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
    assert_eq!(Point::new([4.0, 5.0]).distance_to(&segment), 5.0);
  }

  #[proptest]
  fn segment_distance_bounds_prop(p: Point<f64>, segment: Segment<f64>) {
    let line = Line::try_from(&segment).unwrap();
    let to_segment = p.distance_to(&segment);
    let to_ends = p.distance_to(&segment.src).min(p.distance_to(&segment.dst));
    prop_assert!(to_segment <= to_ends + 1e-9);
    prop_assert!(to_segment + 1e-6 >= p.distance_to(&line));
  }

  #[proptest]
  fn point_distance_symmetric_prop(a: Point<f64>, b: Point<f64>) {
    prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
  }
}
