//! lightdash - a utility belt for dynamic values.
//!
//! Type predicates, shallow and deep traversal helpers, and small
//! array/object/number conveniences over [`Value`], a closed tagged union of
//! primitives, sequences and mappings. Every function is a pure, stateless
//! transformation; nothing mutates its input.
//!
//! # Example
//!
//! ```
//! use lightdash::{arr_flatten_deep, get_path, is_equal, obj_clone_deep, Value};
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"a": {"b": 2, "c": [10, [20, 30]]}}));
//!
//! assert_eq!(get_path(&doc, &["a", "c", "0"]), Some(&Value::from(10)));
//!
//! let nested = get_path(&doc, &["a", "c"]).and_then(Value::as_array).unwrap();
//! assert_eq!(
//!     arr_flatten_deep(nested),
//!     vec![Value::from(10), Value::from(20), Value::from(30)]
//! );
//!
//! let copy = Value::Object(obj_clone_deep(doc.as_object().unwrap()));
//! assert!(is_equal(&doc, &copy));
//! ```

pub mod arr;
pub mod attempt;
pub mod deep;
pub mod each;
pub mod is;
pub mod json;
pub mod number;
pub mod obj;
pub mod path;
pub mod value;

// Re-exports for convenience
pub use arr::{
    arr_chunk, arr_clone, arr_clone_deep, arr_compact, arr_count, arr_difference,
    arr_flatten_deep, arr_intersection, arr_map, arr_map_deep, arr_step, arr_uniq,
};
pub use attempt::{fn_attempt, fn_attempt_try, fn_attempt_with, AttemptError};
pub use deep::{Key, Parent};
pub use each::{for_each, for_each_deep, for_each_entry, for_each_entry_deep, for_times};
pub use is::{
    is_array, is_array_like, is_array_typed, is_boolean, is_defined, is_empty, is_equal, is_map,
    is_nil, is_number, is_object, is_object_like, is_plain_object, is_primitive, is_same, is_set,
    is_string, is_string_number, is_symbol, is_type_of, is_undefined,
};
pub use json::ValueError;
pub use number::{number_clamp, number_in_range, number_random_float, number_random_int, NumberRng};
pub use obj::{
    map_from_object, obj_clone, obj_clone_deep, obj_entries, obj_keys, obj_map, obj_map_deep,
    obj_values,
};
pub use path::{get_path, has_key, has_path, is_valid_index};
pub use value::{Object, Symbol, TypeOf, Value, ValueMap, ValueSet};
