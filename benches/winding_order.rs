use criterion::{criterion_group, criterion_main, Criterion};
use reefgeom::algorithms::winding_order::winding_order;
use reefgeom::data::*;

use rand::Rng;
use rand::SeedableRng;

const SET_SIZE: usize = 1000;

// Star shaped polygon with random radii, listed counter-clockwise.
fn random_star<R: Rng>(rng: &mut R) -> Geometry<f64> {
  (0..SET_SIZE)
    .map(|i| {
      let theta = std::f64::consts::TAU * i as f64 / SET_SIZE as f64;
      let radius: f64 = rng.gen_range(1.0..100.0);
      Point::new([radius * theta.cos(), radius * theta.sin()])
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  let geometry = random_star(&mut rng);

  c.bench_function("winding_order::<f64>", |b| {
    b.iter(|| winding_order(geometry.vertices()))
  });

  c.bench_function("signed_area_2x::<f64>", |b| {
    b.iter(|| geometry.signed_area_2x())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
