//! Array helpers.
//!
//! Shallow and set-like helpers are generic over the element type; the deep
//! helpers operate on nested [`Value`](crate::Value) arrays.

mod deep;
mod set;
mod slice;

pub use deep::{arr_clone_deep, arr_flatten_deep, arr_map_deep};
pub use set::{arr_count, arr_difference, arr_intersection, arr_uniq};
pub use slice::{arr_chunk, arr_clone, arr_compact, arr_map, arr_step};
