use array_init::array_init;
use std::ops::Sub;
use std::ops::SubAssign;

use super::Vector;
use crate::GeometryScalar;

// vector - vector = vector
impl<T: GeometryScalar> Sub<Vector<T>> for Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}

// &vector - &vector = vector
impl<'a, 'b, T: GeometryScalar> Sub<&'a Vector<T>> for &'b Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: &'a Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}

// vector -= vector
impl<T: GeometryScalar> SubAssign<Vector<T>> for Vector<T> {
  fn sub_assign(&mut self, other: Vector<T>) {
    for i in 0..2 {
      self.0[i] -= other.0[i]
    }
  }
}
