use crate::data::{Point, Segment};
use crate::GeometryScalar;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T>;
  fn next(&mut self) -> Option<&'a Point<T>> {
    self.iter.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IterMut<'a, T: 'a> {
  pub(crate) points: std::slice::IterMut<'a, Point<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut Point<T>;
  fn next(&mut self) -> Option<&'a mut Point<T>> {
    self.points.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.points.size_hint()
  }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// Edges between consecutive vertices, closing back to the first vertex.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) vertices: &'a [Point<T>],
  pub(crate) index: usize,
}

impl<'a, T: GeometryScalar> Iterator for EdgeIter<'a, T> {
  type Item = Segment<T>;
  fn next(&mut self) -> Option<Segment<T>> {
    let src = self.vertices.get(self.index)?;
    let dst = &self.vertices[(self.index + 1) % self.vertices.len()];
    self.index += 1;
    Some(Segment::new(*src, *dst))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let left = self.vertices.len().saturating_sub(self.index);
    (left, Some(left))
  }
}

impl<'a, T: GeometryScalar> ExactSizeIterator for EdgeIter<'a, T> {}
