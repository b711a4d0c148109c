use array_init::array_init;
use std::ops::Div;

use super::Vector;
use crate::GeometryScalar;

impl<T: GeometryScalar> Div<T> for Vector<T> {
  type Output = Vector<T>;

  fn div(self, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] / other))
  }
}
