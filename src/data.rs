mod bounding_box;
mod geometry;
mod line;
pub(crate) mod point;
mod segment;
pub mod vector;

pub use bounding_box::BoundingBox;
#[doc(inline)]
pub use geometry::{EdgeIter, Geometry, Iter, IterMut, VertexId};
pub use line::Line;
pub use point::Point;
pub use segment::Segment;
pub use vector::Vector;
