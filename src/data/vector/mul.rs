use array_init::array_init;
use std::ops::Mul;

use super::Vector;
use crate::GeometryScalar;

impl<T: GeometryScalar> Mul<T> for Vector<T> {
  type Output = Vector<T>;

  fn mul(self, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}
