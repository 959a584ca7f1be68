use crate::is::{is_empty, is_nil};
use crate::value::Value;

/// Creates a new array with the same elements.
pub fn arr_clone<T: Clone>(arr: &[T]) -> Vec<T> {
    arr.to_vec()
}

/// Maps each element with `f(value, index, arr)`.
pub fn arr_map<T, U, F>(arr: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    arr.iter()
        .enumerate()
        .map(|(index, val)| f(val, index, arr))
        .collect()
}

/// Splits an array into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder. A `size` of zero yields no chunks.
///
/// # Examples
///
/// ```
/// use lightdash::arr_chunk;
///
/// assert_eq!(arr_chunk(&[1, 2, 3, 4, 5, 6], 2), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
/// assert_eq!(arr_chunk(&[1, 2, 3, 4, 5], 3), vec![vec![1, 2, 3], vec![4, 5]]);
/// assert!(arr_chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn arr_chunk<T: Clone>(arr: &[T], size: usize) -> Vec<Vec<T>> {
    if size < 1 {
        return Vec::new();
    }
    arr.chunks(size).map(<[T]>::to_vec).collect()
}

/// Keeps every element whose index is a multiple of `step`.
///
/// A `step` of zero keeps nothing.
///
/// # Examples
///
/// ```
/// use lightdash::arr_step;
///
/// assert_eq!(arr_step(&[1, 2, 3, 4, 5, 6], 2), vec![1, 3, 5]);
/// assert_eq!(arr_step(&[1, 2, 3, 4, 5, 6], 3), vec![1, 4]);
/// ```
pub fn arr_step<T: Clone>(arr: &[T], step: usize) -> Vec<T> {
    if step == 0 {
        return Vec::new();
    }
    arr.iter().step_by(step).cloned().collect()
}

/// Removes nil and empty values.
///
/// Numbers and booleans are never empty, so `0` and `false` are kept.
///
/// # Examples
///
/// ```
/// use lightdash::{arr_compact, Value};
/// use serde_json::json;
///
/// let arr = Value::from(json!([1, "", "foo", null, [], [1], {}, 0, false]));
/// assert_eq!(
///     Value::Array(arr_compact(arr.as_array().unwrap())),
///     Value::from(json!([1, "foo", [1], 0, false]))
/// );
/// ```
pub fn arr_compact(arr: &[Value]) -> Vec<Value> {
    arr.iter()
        .filter(|val| !is_nil(val) && !is_empty(val))
        .cloned()
        .collect()
}
