use super::{vector, Point};
use crate::GeometryScalar;

/// Axis-aligned box. The Y axis points up, so `top` is the largest Y value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
  pub left: T,
  pub top: T,
  pub right: T,
  pub bottom: T,
}

impl<T: GeometryScalar> BoundingBox<T> {
  pub fn new(left: T, top: T, right: T, bottom: T) -> BoundingBox<T> {
    BoundingBox {
      left,
      top,
      right,
      bottom,
    }
  }

  /// Smallest box containing every point, or `None` for an empty input.
  ///
  /// ```rust
  /// # use reefgeom::data::{BoundingBox, Point};
  /// let pts = [Point::new([1.0, 5.0]), Point::new([-2.0, 3.0]), Point::new([4.0, -1.0])];
  /// let bbox = BoundingBox::from_points(&pts).unwrap();
  /// assert_eq!(bbox, BoundingBox::new(-2.0, 5.0, 4.0, -1.0));
  /// ```
  pub fn from_points<'a, I>(points: I) -> Option<BoundingBox<T>>
  where
    I: IntoIterator<Item = &'a Point<T>>,
    T: 'a,
  {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = BoundingBox::new(
      first.x_coord(),
      first.y_coord(),
      first.x_coord(),
      first.y_coord(),
    );
    Some(iter.fold(init, |bbox, pt| BoundingBox {
      left: bbox.left.min(pt.x_coord()),
      top: bbox.top.max(pt.y_coord()),
      right: bbox.right.max(pt.x_coord()),
      bottom: bbox.bottom.min(pt.y_coord()),
    }))
  }

  pub fn width(&self) -> T {
    (self.right - self.left).abs()
  }

  pub fn height(&self) -> T {
    (self.top - self.bottom).abs()
  }

  pub fn diagonal(&self) -> T {
    vector::length(self.width(), self.height())
  }
}
