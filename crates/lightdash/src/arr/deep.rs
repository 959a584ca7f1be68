use crate::deep::{self, Parent};
use crate::each::for_each_deep;
use crate::value::Value;

/// Recursively maps the leaves of a nested array.
///
/// The result mirrors the input's shape exactly; every leaf is replaced by
/// the result of `f(leaf, index, parent)`.
///
/// # Examples
///
/// ```
/// use lightdash::{arr_map_deep, Value};
/// use serde_json::json;
///
/// let arr = Value::from(json!([2, 4, [1, 1, [16], 4]]));
/// let doubled = arr_map_deep(arr.as_array().unwrap(), |val, _, _| {
///     Value::from(val.as_f64().unwrap_or_default() * 2.0)
/// });
/// assert_eq!(Value::Array(doubled), Value::from(json!([4, 8, [2, 2, [32], 8]])));
/// ```
pub fn arr_map_deep<F>(arr: &[Value], mut f: F) -> Vec<Value>
where
    F: FnMut(&Value, usize, &[Value]) -> Value,
{
    deep::map_deep(Parent::Array(arr), deep::arrays, |val, _, index, parent| match parent {
        Parent::Array(items) => f(val, index, items),
        Parent::Object(_) => val.clone(),
    })
    .into_array()
    .unwrap_or_default()
}

/// Creates a new nested array with the same leaves. No nested array of the
/// result is shared with the input.
pub fn arr_clone_deep(arr: &[Value]) -> Vec<Value> {
    arr_map_deep(arr, |val, _, _| val.clone())
}

/// Recursively flattens a nested array into its leaves, depth-first.
///
/// # Examples
///
/// ```
/// use lightdash::{arr_flatten_deep, Value};
/// use serde_json::json;
///
/// let arr = Value::from(json!([1, 2, [3, [[[5]]], [6, [6]]]]));
/// assert_eq!(
///     Value::Array(arr_flatten_deep(arr.as_array().unwrap())),
///     Value::from(json!([1, 2, 3, 5, 6, 6]))
/// );
/// ```
pub fn arr_flatten_deep(arr: &[Value]) -> Vec<Value> {
    let mut result = Vec::new();
    for_each_deep(arr, |val, _, _| result.push(val.clone()));
    result
}
