use crate::GeometryScalar;

/// Convert `radians` to degrees.
pub fn degrees_from_radians<T: GeometryScalar>(radians: T) -> T {
  radians * T::from_constant(180) / T::PI()
}

/// Convert `degrees` to radians.
pub fn radians_from_degrees<T: GeometryScalar>(degrees: T) -> T {
  degrees * T::PI() / T::from_constant(180)
}

/// An angle, stored in degrees.
///
/// The value is not kept normalized. Call [`Angle::normalize`] to bring it
/// into `[0, 360)`. Degree based accessors are exact while radian accessors
/// go through a conversion.
///
/// ```rust
/// # use reefgeom::Angle;
/// let a = Angle::from_degrees(350.0);
/// let b = Angle::from_degrees(10.0);
/// assert_eq!(a.degree_difference(&b), 20.0);
/// assert_eq!(b.degree_difference(&a), -20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle<T> {
  degrees: T,
}

impl<T: GeometryScalar> Angle<T> {
  pub fn from_degrees(degrees: T) -> Angle<T> {
    Angle { degrees }
  }

  pub fn from_radians(radians: T) -> Angle<T> {
    Angle {
      degrees: degrees_from_radians(radians),
    }
  }

  pub fn degrees(&self) -> T {
    self.degrees
  }

  pub fn radians(&self) -> T {
    radians_from_degrees(self.degrees)
  }

  /// Reduce the angle to a single turn in `[0, 360)`, in place.
  pub fn normalize(&mut self) -> &mut Self {
    let full = T::from_constant(360);
    self.degrees = self.degrees % full;
    if self.degrees < T::zero() {
      self.degrees += full;
      // -1e-20 + 360 rounds to 360.
      if self.degrees >= full {
        self.degrees = T::zero();
      }
    }
    self
  }

  #[must_use]
  pub fn normalized(mut self) -> Angle<T> {
    self.normalize();
    self
  }

  /// Smallest signed rotation, in degrees, that takes this angle onto
  /// `other`. The result lies in `[-180, 180]`.
  pub fn degree_difference(&self, other: &Angle<T>) -> T {
    let half = T::from_constant(180);
    let full = T::from_constant(360);
    let raw = other.normalized().degrees - self.normalized().degrees;
    if raw.abs() <= half {
      raw
    } else if raw > T::zero() {
      raw - full
    } else {
      raw + full
    }
  }

  /// Same as [`Angle::degree_difference`] but in radians.
  pub fn radians_difference(&self, other: &Angle<T>) -> T {
    radians_from_degrees(self.degree_difference(other))
  }
}
