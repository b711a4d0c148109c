//! Rotational direction of a closed polygon.
//!
//! Walking around a simple polygon turns the walker by exactly one full
//! rotation: `+360` degrees when the vertices are listed counter-clockwise and
//! `-360` degrees when they are listed clockwise. The functions here add up the
//! turn at every vertex and compare the total against `+360`.
use crate::data::Point;
use crate::{Error, GeometryScalar};

/// Largest distance, in degrees, between the total turn and `+360` that still
/// counts as counter-clockwise.
pub const DEFAULT_WINDING_TOLERANCE: i16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindingOrder {
  ClockWise,
  CounterClockWise,
}

impl WindingOrder {
  #[must_use]
  pub fn reverse(self) -> WindingOrder {
    match self {
      WindingOrder::ClockWise => WindingOrder::CounterClockWise,
      WindingOrder::CounterClockWise => WindingOrder::ClockWise,
    }
  }
}

/// Winding order of the closed polygon through `vertices`.
///
/// The polygon is expected to be simple. Totals that are not within
/// [`DEFAULT_WINDING_TOLERANCE`] degrees of `+360` are reported as clockwise,
/// including the totals produced by self-intersecting input.
///
/// # Errors
///
/// [`Error::InsufficientVertices`] for fewer than three vertices and
/// [`Error::DuplicatePoints`] when two consecutive vertices (including the
/// last and the first) are equal.
///
/// ```rust
/// # use reefgeom::data::Point;
/// # use reefgeom::algorithms::winding_order::{winding_order, WindingOrder};
/// let mut square = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// assert_eq!(winding_order(&square), Ok(WindingOrder::CounterClockWise));
/// square.reverse();
/// assert_eq!(winding_order(&square), Ok(WindingOrder::ClockWise));
/// ```
pub fn winding_order<T: GeometryScalar>(vertices: &[Point<T>]) -> Result<WindingOrder, Error> {
  winding_order_with_tolerance(vertices, T::from_constant(DEFAULT_WINDING_TOLERANCE))
}

/// Same as [`winding_order`] with a custom tolerance in degrees.
pub fn winding_order_with_tolerance<T: GeometryScalar>(
  vertices: &[Point<T>],
  tolerance: T,
) -> Result<WindingOrder, Error> {
  let total = total_turn(vertices)?;
  let full_turn = T::from_constant(360);
  let order = if (total - full_turn).abs() <= tolerance {
    WindingOrder::CounterClockWise
  } else {
    WindingOrder::ClockWise
  };
  log::debug!(
    "total turn of {} vertices is {:?} degrees: {:?}",
    vertices.len(),
    total,
    order
  );
  Ok(order)
}

/// Sum of the signed turn angles at every vertex, in degrees.
pub fn total_turn<T: GeometryScalar>(vertices: &[Point<T>]) -> Result<T, Error> {
  let len = vertices.len();
  if len < 3 {
    return Err(Error::InsufficientVertices);
  }

  let mut total = T::zero();
  for i in 0..len {
    let prev = &vertices[wrap_index(i as isize - 1, len)];
    let current = &vertices[i];
    let next = &vertices[wrap_index(i as isize + 1, len)];
    if prev == current || current == next {
      log::debug!("duplicate vertex at index {}: {:?}", i, current);
      return Err(Error::DuplicatePoints);
    }

    let incoming = current - prev;
    let outgoing = next - current;
    let turn = turn_angle(incoming.angle(), outgoing.angle());
    log::trace!("turn at vertex {}: {:?}", i, turn);
    total += turn;
  }
  Ok(total)
}

/// Signed turn in degrees from heading `from` to heading `to`, both given in
/// `[-180, 180]`. Left turns are positive.
///
/// ```rust
/// # use reefgeom::algorithms::winding_order::turn_angle;
/// assert_eq!(turn_angle(10.0, 20.0), 10.0);
/// assert_eq!(turn_angle(170.0, -170.0), 20.0);
/// assert_eq!(turn_angle(-170.0, 170.0), -20.0);
/// ```
pub fn turn_angle<T: GeometryScalar>(from: T, to: T) -> T {
  let half_turn = T::from_constant(180);
  let turn = to - from;
  if turn > half_turn {
    -half_turn + (turn - half_turn)
  } else if turn < -half_turn {
    half_turn + (turn + half_turn)
  } else {
    turn
  }
}

/// Wraps `index` into `0..len`, so `-1` is the last element and `len` is the
/// first.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn wrap_index(index: isize, len: usize) -> usize {
  index.rem_euclid(len as isize) as usize
}
