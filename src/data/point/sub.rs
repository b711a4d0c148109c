use array_init::array_init;
use std::ops::Sub;

use super::Point;
use super::Vector;
use crate::GeometryScalar;

// &point - &point = vector
impl<'a, 'b, T: GeometryScalar> Sub<&'a Point<T>> for &'b Point<T> {
  type Output = Vector<T>;

  fn sub(self, other: &'a Point<T>) -> Self::Output {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}

// point - point = vector
impl<T: GeometryScalar> Sub<Point<T>> for Point<T> {
  type Output = Vector<T>;

  fn sub(self, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// &point - &vector = point
impl<'a, 'b, T: GeometryScalar> Sub<&'a Vector<T>> for &'b Point<T> {
  type Output = Point<T>;

  fn sub(self, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] - other.0[i]),
    }
  }
}
