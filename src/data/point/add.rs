use crate::data::{Point, Vector};
use crate::GeometryScalar;
use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

// &point + &vector = point
impl<'a, 'b, T: GeometryScalar> Add<&'a Vector<T>> for &'b Point<T> {
  type Output = Point<T>;

  fn add(self, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] + other.0[i]),
    }
  }
}

// point + vector = point
impl<T: GeometryScalar> Add<Vector<T>> for Point<T> {
  type Output = Point<T>;

  fn add(self, other: Vector<T>) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point += &vector
impl<T: GeometryScalar> AddAssign<&Vector<T>> for Point<T> {
  fn add_assign(&mut self, other: &Vector<T>) {
    for i in 0..2 {
      self.array[i] += other.0[i]
    }
  }
}

// point += vector
impl<T: GeometryScalar> AddAssign<Vector<T>> for Point<T> {
  fn add_assign(&mut self, other: Vector<T>) {
    AddAssign::add_assign(self, &other)
  }
}
