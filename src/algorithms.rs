pub mod winding_order;

#[doc(inline)]
pub use winding_order::{winding_order, WindingOrder};
