//! Type predicates.
//!
//! Every predicate takes a value and returns a `bool`. None of them panic.

mod empty;
mod equal;
mod types;

pub use empty::is_empty;
pub use equal::{is_equal, is_same};
pub use types::{
    is_array, is_array_like, is_array_typed, is_boolean, is_defined, is_map, is_nil, is_number,
    is_object, is_object_like, is_plain_object, is_primitive, is_set, is_string,
    is_string_number, is_symbol, is_type_of, is_undefined,
};
