// This module contains strategies for:
//  * angles and coordinates
//  * points and segments
//  * simple polygons with a known winding order
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Segment};
use crate::Distance;

use proptest::arbitrary::*;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::*;

// Spans a few thousand full turns in both directions.
pub fn any_degrees() -> impl Strategy<Value = f64> {
  -1.0e6..1.0e6
}

pub fn any_coord() -> impl Strategy<Value = f64> {
  -1000.0..1000.0
}

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

/// Segments whose length is far from zero.
pub fn any_segment() -> impl Strategy<Value = Segment<f64>> {
  (any_point(), any_point())
    .prop_filter("segment too short", |(a, b)| a.distance_to(b) > 1e-3)
    .prop_map(|(a, b)| Segment::new(a, b))
}

/// Vertices of a regular polygon listed counter-clockwise.
pub fn ccw_polygon() -> impl Strategy<Value = Vec<Point<f64>>> {
  (3usize..32, 1.0..100.0f64, any_point(), 0.0..360.0f64).prop_map(
    |(n, radius, center, phase)| {
      (0..n)
        .map(|i| {
          let theta = (phase + 360.0 * i as f64 / n as f64).to_radians();
          Point::new([
            center.x_coord() + radius * theta.cos(),
            center.y_coord() + radius * theta.sin(),
          ])
        })
        .collect()
    },
  )
}

/// Counter-clockwise star shaped polygon with randomized radii. It is simple
/// but usually not convex.
pub fn ccw_star() -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(1.0..100.0f64, 3..32).prop_map(|radii| {
    let n = radii.len();
    radii
      .into_iter()
      .enumerate()
      .map(|(i, r)| {
        let theta = (360.0 * i as f64 / n as f64).to_radians();
        Point::new([r * theta.cos(), r * theta.sin()])
      })
      .collect()
  })
}

impl Arbitrary for Point<f64> {
  type Strategy = BoxedStrategy<Point<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any_point().boxed()
  }
}

impl Arbitrary for Segment<f64> {
  type Strategy = BoxedStrategy<Segment<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any_segment().boxed()
  }
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
  let tolerance = 1e-9 * (1.0 + expected.abs());
  assert!(
    (actual - expected).abs() <= tolerance,
    "{} is not close to {}",
    actual,
    expected
  );
}
