use array_init::array_init;
use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::{degrees_from_radians, Angle, GeometryScalar};

/// Euclidean length of the vector `(x, y)`.
pub fn length<T: GeometryScalar>(x: T, y: T) -> T {
  (x * x + y * y).sqrt()
}

// Undefined for the zero vector: both components come back as NaN.
fn normalize<T: GeometryScalar>(x: T, y: T) -> [T; 2] {
  let length = length(x, y);
  [x / length, y / length]
}

/// Angle of the vector `(x, y)` in degrees, measured counter-clockwise from
/// the positive X axis. The result lies in `[-180, 180]`, with the negative X
/// axis itself mapping to `180`.
///
/// The zero vector has no angle and yields NaN. Callers are expected to check
/// the length first.
///
/// ```rust
/// # use reefgeom::data::vector;
/// assert_eq!(vector::angle(1.0, 0.0), 0.0);
/// assert!((vector::angle::<f64>(-1.0, 0.0) - 180.0).abs() < 1e-9);
/// assert!((vector::angle::<f64>(0.0, -1.0) + 90.0).abs() < 1e-9);
/// ```
pub fn angle<T: GeometryScalar>(x: T, y: T) -> T {
  let [nx, ny] = normalize(x, y);
  // acos alone cannot tell the upper half plane from the lower one.
  let acos = degrees_from_radians(nx.acos());
  let asin = degrees_from_radians(ny.asin());
  if asin >= T::zero() {
    acos
  } else {
    -acos
  }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T> Distribution<Vector<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T> {
    Vector(array_init(|_| rng.gen()))
  }
}

impl<T> Vector<T> {
  pub const fn new(x: T, y: T) -> Vector<T> {
    Vector([x, y])
  }
}

impl<T: GeometryScalar> Vector<T> {
  /// Unit vector pointing in the direction of `angle`.
  pub fn from_angle(angle: Angle<T>) -> Vector<T> {
    let radians = angle.radians();
    Vector([radians.cos(), radians.sin()])
  }

  pub fn x_coord(&self) -> T {
    self.0[0]
  }

  pub fn y_coord(&self) -> T {
    self.0[1]
  }

  pub fn length(&self) -> T {
    length(self.0[0], self.0[1])
  }

  pub fn squared_magnitude(&self) -> T {
    self.0[0] * self.0[0] + self.0[1] * self.0[1]
  }

  /// See [`angle`].
  pub fn angle(&self) -> T {
    angle(self.0[0], self.0[1])
  }

  /// Scale to unit length, in place. The zero vector turns into NaNs.
  pub fn normalize(&mut self) -> &mut Self {
    self.0 = normalize(self.0[0], self.0[1]);
    self
  }

  #[must_use]
  pub fn normalized(&self) -> Vector<T> {
    Vector(normalize(self.0[0], self.0[1]))
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<T> From<(T, T)> for Vector<T> {
  fn from(vector: (T, T)) -> Vector<T> {
    Vector([vector.0, vector.1])
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl<T: GeometryScalar> Zero for Vector<T> {
  fn zero() -> Vector<T> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T: GeometryScalar> Sum for Vector<T> {
  fn sum<I>(iter: I) -> Vector<T>
  where
    I: Iterator<Item = Vector<T>>,
  {
    let mut acc = Zero::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl<T: GeometryScalar> Neg for Vector<T> {
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn angle_unit_1() {
    assert_close(angle(1.0, 0.0), 0.0);
    assert_close(angle(1.0, 1.0), 45.0);
    assert_close(angle(0.0, 1.0), 90.0);
    assert_close(angle(-1.0, 1.0), 135.0);
    assert_close(angle(-1.0, 0.0), 180.0);
    assert_close(angle(-1.0, -1.0), -135.0);
    assert_close(angle(0.0, -1.0), -90.0);
    assert_close(angle(1.0, -1.0), -45.0);
  }

  #[test]
  fn angle_ignores_length() {
    assert_close(angle(0.001, 0.001), 45.0);
    assert_close(angle(-300.0, 0.0), 180.0);
  }

  #[test]
  fn angle_of_zero_vector_is_nan() {
    assert!(angle(0.0_f64, 0.0).is_nan());
    assert!(Vector::new(0.0_f32, 0.0).normalized().x_coord().is_nan());
  }

  #[test]
  fn from_angle() {
    let unit = |deg: f64| Vector::from_angle(Angle::from_degrees(deg));
    let v = unit(0.0);
    assert_close(v.x_coord(), 1.0);
    assert!(v.y_coord().abs() < 1e-9);
    let v = unit(90.0);
    assert!(v.x_coord().abs() < 1e-9);
    assert_close(v.y_coord(), 1.0);
    let v = unit(180.0);
    assert_close(v.x_coord(), -1.0);
    assert!(v.y_coord().abs() < 1e-9);
    let v = unit(270.0);
    assert!(v.x_coord().abs() < 1e-9);
    assert_close(v.y_coord(), -1.0);
  }

  #[test]
  fn normalize_keeps_angle() {
    let v1 = Vector::new(5.0, 10.0);
    let mut v2 = v1;
    v2.normalize();
    assert_close(v1.angle(), v2.angle());
    assert_close(v2.length(), 1.0);
  }

  #[test]
  fn sum_and_neg() {
    let total: Vector<f64> = vec![Vector::new(1.0, 2.0), Vector::new(3.0, -4.0)]
      .into_iter()
      .sum();
    assert_eq!(total, Vector::new(4.0, -2.0));
    assert_eq!(-total, Vector::new(-4.0, 2.0));
    assert!(Vector::<f64>::zero().is_zero());
  }

  #[test]
  fn arithmetic() {
    let mut v = Vector::new(1.0, 2.0);
    assert_eq!(v * 2.0, Vector::new(2.0, 4.0));
    assert_eq!(v / 2.0, Vector::new(0.5, 1.0));
    assert_eq!(&v - &Vector::new(1.0, 1.0), Vector::new(0.0, 1.0));
    v -= Vector::new(0.5, 0.5);
    assert_eq!(v + Vector::new(0.5, 0.5), Vector::new(1.0, 2.0));
  }

  #[test]
  fn random_vectors_are_finite() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    for _ in 0..100 {
      let v: Vector<f64> = rng.gen();
      assert!(v.length().is_finite());
    }
  }

  #[proptest]
  fn from_angle_roundtrip_prop(#[strategy(-179.0..179.0f64)] degrees: f64) {
    let v = Vector::from_angle(Angle::from_degrees(degrees));
    prop_assert!((v.angle() - degrees).abs() < 1e-5);
  }

  #[proptest]
  fn angle_in_range_prop(#[strategy(any_coord())] x: f64, #[strategy(any_coord())] y: f64) {
    prop_assume!(length(x, y) > 1e-9);
    let a = angle(x, y);
    prop_assert!((-180.0..=180.0).contains(&a));
  }
}
