//! Iteration helpers. These only invoke the callback and never transform
//! their input.

use crate::deep::{self, Key, Parent};
use crate::value::{Object, Value};

/// Iterates over each element in a slice.
///
/// `f` receives the element, its index and the whole slice.
///
/// # Examples
///
/// ```
/// use lightdash::for_each;
///
/// let mut weighted = Vec::new();
/// for_each(&[1usize, 2, 3], |val, index, _| weighted.push(val * index));
/// assert_eq!(weighted, vec![0, 2, 6]);
/// ```
pub fn for_each<T, F>(arr: &[T], mut f: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, val) in arr.iter().enumerate() {
        f(val, index, arr);
    }
}

/// Recursively iterates over each leaf of a nested array.
///
/// Nested arrays are descended instead of being passed to `f`. Leaves are
/// visited depth-first, left to right; `f` receives the leaf, its index and
/// the array directly containing it.
///
/// # Examples
///
/// ```
/// use lightdash::{for_each_deep, Value};
/// use serde_json::json;
///
/// let arr = Value::from(json!([2, 4, [1, 1, [16], 4]]));
/// let mut weighted = Vec::new();
/// for_each_deep(arr.as_array().unwrap(), |val, index, _| {
///     weighted.push(val.as_f64().unwrap() * index as f64);
/// });
/// assert_eq!(weighted, vec![0.0, 4.0, 0.0, 1.0, 0.0, 12.0]);
/// ```
pub fn for_each_deep<F>(arr: &[Value], mut f: F)
where
    F: FnMut(&Value, usize, &[Value]),
{
    deep::visit_deep(Parent::Array(arr), deep::arrays, |val, _, index, parent| {
        if let Parent::Array(items) = parent {
            f(val, index, items);
        }
    });
}

/// Iterates over each entry of an object in insertion order.
///
/// `f` receives the value, its key, its position and the whole object.
pub fn for_each_entry<F>(obj: &Object, mut f: F)
where
    F: FnMut(&Value, &str, usize, &Object),
{
    for (index, (key, val)) in obj.iter().enumerate() {
        f(val, key, index, obj);
    }
}

/// Recursively iterates over each leaf entry of an object.
///
/// Nested objects and arrays are descended. `f` receives the leaf, its key
/// within the immediate parent (an index for array elements), its position
/// and the parent itself.
///
/// # Examples
///
/// ```
/// use lightdash::{for_each_entry_deep, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"a": 1, "b": {"c": [2, 3]}}));
/// let mut keys = Vec::new();
/// for_each_entry_deep(obj.as_object().unwrap(), |_, key, _, _| keys.push(key.to_string()));
/// assert_eq!(keys, vec!["a", "0", "1"]);
/// ```
pub fn for_each_entry_deep<F>(obj: &Object, f: F)
where
    F: FnMut(&Value, Key<'_>, usize, Parent<'_>),
{
    deep::visit_deep(Parent::Object(obj), deep::arrays_and_objects, f);
}

/// Calls `f` with `start`, `start + step`, … while the index stays below
/// `max`. A `step` of zero calls nothing.
///
/// # Examples
///
/// ```
/// use lightdash::for_times;
///
/// let mut seen = Vec::new();
/// for_times(0, 10, 3, |index| seen.push(index));
/// assert_eq!(seen, vec![0, 3, 6, 9]);
/// ```
pub fn for_times<F>(start: i64, max: i64, step: usize, f: F)
where
    F: FnMut(i64),
{
    if step == 0 {
        return;
    }
    (start..max).step_by(step).for_each(f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_each_passes_slice() {
        let arr = ["a", "b"];
        let mut lens = Vec::new();
        for_each(&arr, |_, _, all| lens.push(all.len()));
        assert_eq!(lens, vec![2, 2]);
    }

    #[test]
    fn test_for_each_deep_parents() {
        let arr = Value::from(json!([1, [2, 3], [[4]]]));
        let mut visits = Vec::new();
        for_each_deep(arr.as_array().unwrap(), |val, index, parent| {
            visits.push((val.clone(), index, parent.len()));
        });
        assert_eq!(
            visits,
            vec![
                (Value::from(1), 0, 3),
                (Value::from(2), 0, 2),
                (Value::from(3), 1, 2),
                (Value::from(4), 0, 1),
            ]
        );
    }

    #[test]
    fn test_for_each_deep_skips_empty_arrays() {
        let arr = Value::from(json!([[], [[]], "x", {"a": [1]}]));
        let mut leaves = Vec::new();
        for_each_deep(arr.as_array().unwrap(), |val, _, _| leaves.push(val.clone()));
        assert_eq!(leaves, vec![Value::from("x"), Value::from(json!({"a": [1]}))]);
    }

    #[test]
    fn test_for_each_entry() {
        let obj = Value::from(json!({"b": 1, "a": 2}));
        let mut seen = Vec::new();
        for_each_entry(obj.as_object().unwrap(), |val, key, index, _| {
            seen.push((key.to_string(), val.clone(), index));
        });
        assert_eq!(
            seen,
            vec![
                ("b".to_string(), Value::from(1), 0),
                ("a".to_string(), Value::from(2), 1),
            ]
        );
    }

    #[test]
    fn test_for_each_entry_deep_parents() {
        let obj = Value::from(json!({"a": {"b": 1}, "c": [true]}));
        let mut seen = Vec::new();
        for_each_entry_deep(obj.as_object().unwrap(), |val, key, _, parent| {
            let in_array = matches!(parent, Parent::Array(_));
            seen.push((val.clone(), key.to_string(), in_array));
        });
        assert_eq!(
            seen,
            vec![
                (Value::from(1), "b".to_string(), false),
                (Value::from(true), "0".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_for_times() {
        let mut seen = Vec::new();
        for_times(-2, 3, 2, |i| seen.push(i));
        assert_eq!(seen, vec![-2, 0, 2]);

        let mut calls = 0;
        for_times(0, 5, 0, |_| calls += 1);
        for_times(5, 0, 1, |_| calls += 1);
        assert_eq!(calls, 0);
    }
}
