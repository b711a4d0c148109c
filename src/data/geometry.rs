use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use super::{BoundingBox, Point, Vector};
use crate::algorithms::winding_order::{winding_order, WindingOrder};
use crate::{Error, GeometryScalar};

mod iter;
pub use iter::*;

/// Position of a vertex inside a [`Geometry`]. Ids are handed out in
/// insertion order starting at zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Ordered list of vertices describing a closed polygon. Consecutive
/// vertices form the edges and the last vertex connects back to the first.
///
/// A geometry owns copies of its points. Use [`Geometry::point_mut`] or
/// [`Geometry::iter_mut`] to move a vertex after it has been added.
///
/// ```rust
/// # use reefgeom::data::{Geometry, Point};
/// let mut geometry = Geometry::new();
/// let id = geometry.add_vertex(Point::new([1.0, 2.0]));
/// geometry.translate(1.0, 1.0);
/// assert_eq!(geometry.point(id), &Point::new([2.0, 3.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry<T> {
  vertices: Vec<Point<T>>,
}

impl<T> Geometry<T> {
  pub fn new() -> Geometry<T> {
    Geometry {
      vertices: Vec::new(),
    }
  }

  pub fn add_vertex(&mut self, pt: Point<T>) -> VertexId {
    self.vertices.push(pt);
    VertexId(self.vertices.len() - 1)
  }

  pub fn add_vertices<I>(&mut self, pts: I)
  where
    I: IntoIterator<Item = Point<T>>,
  {
    self.vertices.extend(pts)
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  /// Snapshot of the current vertices. Later edits to the geometry do not
  /// show up in the returned vector.
  pub fn to_vertices(&self) -> Vec<Point<T>>
  where
    T: Clone,
  {
    self.vertices.clone()
  }

  pub fn point(&self, idx: VertexId) -> &Point<T> {
    &self.vertices[idx.0]
  }

  pub fn point_mut(&mut self, idx: VertexId) -> &mut Point<T> {
    &mut self.vertices[idx.0]
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut {
      points: self.vertices.iter_mut(),
    }
  }

  /// Edges in vertex order, ending with the edge from the last vertex back to
  /// the first.
  pub fn iter_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }
}

impl<T: GeometryScalar> Geometry<T> {
  /// Moves every vertex by `(dx, dy)`.
  pub fn translate(&mut self, dx: T, dy: T) {
    let offset = Vector::new(dx, dy);
    for pt in self.iter_mut() {
      *pt += offset;
    }
  }

  /// See [`winding_order`](crate::algorithms::winding_order::winding_order).
  pub fn winding_order(&self) -> Result<WindingOrder, Error> {
    winding_order(&self.vertices)
  }

  /// Twice the signed area. Positive for counter-clockwise vertices.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.array[0] * q.array[1] - q.array[0] * p.array[1]
      })
      .sum()
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
    BoundingBox::from_points(&self.vertices)
  }
}

impl<T> Index<VertexId> for Geometry<T> {
  type Output = Point<T>;
  fn index(&self, idx: VertexId) -> &Point<T> {
    self.point(idx)
  }
}

impl<T> IndexMut<VertexId> for Geometry<T> {
  fn index_mut(&mut self, idx: VertexId) -> &mut Point<T> {
    self.point_mut(idx)
  }
}

impl<T> From<Vec<Point<T>>> for Geometry<T> {
  fn from(vertices: Vec<Point<T>>) -> Geometry<T> {
    Geometry { vertices }
  }
}

impl<T> FromIterator<Point<T>> for Geometry<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Geometry<T> {
    Geometry {
      vertices: iter.into_iter().collect(),
    }
  }
}

impl<T> Extend<Point<T>> for Geometry<T> {
  fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
    self.add_vertices(iter)
  }
}

impl<'a, T: Copy + 'a> Extend<&'a Point<T>> for Geometry<T> {
  fn extend<I: IntoIterator<Item = &'a Point<T>>>(&mut self, iter: I) {
    self.add_vertices(iter.into_iter().copied())
  }
}

impl<'a, T> IntoIterator for &'a Geometry<T> {
  type Item = &'a Point<T>;
  type IntoIter = Iter<'a, T>;
  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}
