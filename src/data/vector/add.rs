use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

use super::Vector;
use crate::GeometryScalar;

// vector + vector = vector
impl<T: GeometryScalar> Add<Vector<T>> for Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

// &vector + &vector = vector
impl<'a, 'b, T: GeometryScalar> Add<&'a Vector<T>> for &'b Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: &'a Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

// vector += vector
impl<T: GeometryScalar> AddAssign<Vector<T>> for Vector<T> {
  fn add_assign(&mut self, other: Vector<T>) {
    for i in 0..2 {
      self.0[i] += other.0[i]
    }
  }
}
