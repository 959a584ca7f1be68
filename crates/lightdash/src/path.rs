//! Key and path lookups.
//!
//! A path is a list of string keys. Array elements are addressed by their
//! canonical decimal index, so `"0"` matches but `"00"` and `"-1"` do not.
//! Only objects and arrays have addressable entries.

use crate::is::is_defined;
use crate::value::Value;

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use lightdash::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

fn lookup<'a>(target: &'a Value, key: &str) -> Option<&'a Value> {
    match target {
        Value::Object(obj) => obj.get(key),
        Value::Array(items) if is_valid_index(key) => items.get(key.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Check if looking up `key` on `target` yields a defined value.
///
/// # Examples
///
/// ```
/// use lightdash::{has_key, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"a": 1, "b": null}));
/// assert!(has_key(&obj, "a"));
/// assert!(has_key(&obj, "b"));
/// assert!(!has_key(&obj, "c"));
///
/// assert!(has_key(&Value::from(json!([1, 2])), "1"));
/// assert!(!has_key(&Value::from("foo"), "0"));
/// ```
pub fn has_key(target: &Value, key: &str) -> bool {
    lookup(target, key).is_some_and(is_defined)
}

/// Get a nested value by path.
///
/// Walks `path` from left to right. Every step must name a defined entry of
/// the current value; the walk stops with `None` at the first step that does
/// not, including steps into primitives and nil. An empty path yields
/// `target` itself, unless `target` is `undefined`.
///
/// # Examples
///
/// ```
/// use lightdash::{get_path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 2, "c": [10, 20]}}));
///
/// assert_eq!(get_path(&doc, &["a", "b"]), Some(&Value::from(2)));
/// assert_eq!(get_path(&doc, &["a", "c", "0"]), Some(&Value::from(10)));
/// assert_eq!(get_path(&doc, &["c"]), None);
/// ```
pub fn get_path<'a, S: AsRef<str>>(target: &'a Value, path: &[S]) -> Option<&'a Value> {
    if !is_defined(target) {
        return None;
    }
    let mut current = target;
    for (index, step) in path.iter().enumerate() {
        let key = step.as_ref();
        match lookup(current, key).filter(|val| is_defined(val)) {
            Some(val) => current = val,
            None => {
                tracing::trace!(index, key, kind = current.kind(), "path step not found");
                return None;
            }
        }
    }
    Some(current)
}

/// Check if a path resolves to a value.
///
/// Returns `true` exactly when [`get_path`] returns `Some`, including when
/// the resolved value is `null`.
///
/// # Examples
///
/// ```
/// use lightdash::{has_path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 2, "c": [10, 20]}}));
///
/// assert!(has_path(&doc, &["a", "c", "1"]));
/// assert!(!has_path(&doc, &["a", "c", "2"]));
/// ```
pub fn has_path<S: AsRef<str>>(target: &Value, path: &[S]) -> bool {
    get_path(target, path).is_some()
}
