use crate::is::types::is_defined;
use crate::value::Value;

/// Strict identity check.
///
/// Primitives compare by value (`NaN` is never the same as itself, `0.0` is
/// the same as `-0.0`), symbols by identity and containers only when both
/// arguments are the same reference.
///
/// # Examples
///
/// ```
/// use lightdash::{is_same, Value};
///
/// let arr = Value::Array(vec![]);
/// assert!(is_same(&arr, &arr));
/// assert!(!is_same(&arr, &Value::Array(vec![])));
/// assert!(is_same(&Value::from(1), &Value::from(1)));
/// ```
pub fn is_same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        _ => std::ptr::eq(a, b),
    }
}

/// Performs a deep equality check between two values.
///
/// Values that are [`is_same`] are equal. Two containers of the same kind are
/// equal when they hold the same number of entries and every entry of `a`
/// has a defined, deeply equal counterpart in `b`:
/// - arrays element by element
/// - objects and maps key by key, in any order
/// - sets by membership
/// - typed arrays byte by byte
///
/// Everything else is unequal. Nesting is walked with a heap work stack, so
/// deeply nested input does not grow the call stack.
///
/// # Examples
///
/// ```
/// use lightdash::{is_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!([1, 2, [3, 4]]));
/// let b = Value::from(json!([1, 2, [3, 4]]));
/// let c = Value::from(json!([1, 2, [3]]));
///
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&a, &c));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    let mut pending: Vec<(&Value, &Value)> = vec![(a, b)];

    while let Some((a, b)) = pending.pop() {
        if is_same(a, b) {
            continue;
        }
        match (a, b) {
            (Value::Array(arr_a), Value::Array(arr_b)) => {
                if arr_a.len() != arr_b.len() {
                    return false;
                }
                pending.extend(arr_a.iter().zip(arr_b));
            }
            (Value::Object(obj_a), Value::Object(obj_b)) => {
                if obj_a.len() != obj_b.len() {
                    return false;
                }
                for (key, val_a) in obj_a {
                    match obj_b.get(key) {
                        Some(val_b) if is_defined(val_b) => pending.push((val_a, val_b)),
                        _ => return false,
                    }
                }
            }
            (Value::Map(map_a), Value::Map(map_b)) => {
                if map_a.len() != map_b.len() {
                    return false;
                }
                for (key, val_a) in map_a {
                    match map_b.get(key) {
                        Some(val_b) => pending.push((val_a, val_b)),
                        None => return false,
                    }
                }
            }
            (Value::Set(set_a), Value::Set(set_b)) => {
                if set_a.len() != set_b.len() || !set_a.iter().all(|v| set_b.contains(v)) {
                    return false;
                }
            }
            (Value::Binary(bin_a), Value::Binary(bin_b)) => {
                if bin_a != bin_b {
                    return false;
                }
            }
            _ => return false,
        }
    }

    true
}
