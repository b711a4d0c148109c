use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{GeometryScalar, Orientation};

/// A location in the plane.
///
/// Points share their `(x, y)` layout with [`Vector`] but are a separate type:
/// `point - point` is a vector and `point + vector` is a point. Equality
/// compares the coordinates exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: GeometryScalar> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }

  /// Position vector of this point.
  pub fn to_vec(&self) -> Vector<T> {
    Vector(self.array)
  }

  pub fn set(&mut self, other: &Point<T>) {
    self.array = other.array;
  }

  pub fn set_coords(&mut self, x: T, y: T) {
    self.array = [x, y];
  }

  /// Direction of the turn when walking from `self` through `q` to `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

mod add;
mod sub;
