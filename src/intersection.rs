/// Crossing test between two shapes. `None` means the shapes do not cross.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
