use claims::debug_assert_ok;
use std::convert::TryFrom;

use super::Point;
use super::Segment;
use crate::{Error, GeometryScalar};

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line in implicit form: `a*x + b*y + c = 0`.
///
/// `a` and `b` are never both zero; every public constructor checks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
  a: T,
  b: T,
  c: T,
}

impl<T: GeometryScalar> Line<T> {
  pub fn new(a: T, b: T, c: T) -> Result<Line<T>, Error> {
    let line = Line { a, b, c };
    line.validate()?;
    Ok(line)
  }

  // Callers must have ruled out a == b == 0 already.
  pub(crate) fn new_unchecked(a: T, b: T, c: T) -> Line<T> {
    let line = Line { a, b, c };
    debug_assert_ok!(line.validate());
    line
  }

  /// Line passing through `p1` and `p2`. Fails when the points coincide.
  ///
  /// ```rust
  /// # use reefgeom::data::{Line, Point};
  /// let line = Line::through(&Point::new([1.0, 2.0]), &Point::new([3.0, 3.0])).unwrap();
  /// assert_eq!((line.a(), line.b(), line.c()), (1.0, -2.0, 3.0));
  /// assert!(Line::through(&Point::new([1.0, 2.0]), &Point::new([1.0, 2.0])).is_err());
  /// ```
  pub fn through(p1: &Point<T>, p2: &Point<T>) -> Result<Line<T>, Error> {
    let [a, b, c] = coefficients(p1, p2);
    Line::new(a, b, c)
  }

  // Only for points already known to differ.
  pub(crate) fn through_unchecked(p1: &Point<T>, p2: &Point<T>) -> Line<T> {
    let [a, b, c] = coefficients(p1, p2);
    Line::new_unchecked(a, b, c)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.a == T::zero() && self.b == T::zero() {
      log::debug!("rejecting degenerate line {:?}", self);
      Err(Error::InvalidGeometry)
    } else {
      Ok(())
    }
  }

  pub fn a(&self) -> T {
    self.a
  }

  pub fn b(&self) -> T {
    self.b
  }

  pub fn c(&self) -> T {
    self.c
  }

  /// Value of `a*x + b*y + c` at `pt`. Zero on the line, with opposite signs
  /// on either side.
  pub fn eval(&self, pt: &Point<T>) -> T {
    self.a * pt.x_coord() + self.b * pt.y_coord() + self.c
  }
}

fn coefficients<T: GeometryScalar>(p1: &Point<T>, p2: &Point<T>) -> [T; 3] {
  let a = p2.y_coord() - p1.y_coord();
  let b = p1.x_coord() - p2.x_coord();
  let c = -(a * p1.x_coord()) - (b * p1.y_coord());
  [a, b, c]
}

impl<'a, T: GeometryScalar> TryFrom<&'a Segment<T>> for Line<T> {
  type Error = Error;
  fn try_from(segment: &'a Segment<T>) -> Result<Line<T>, Error> {
    Line::through(&segment.src, &segment.dst)
  }
}
