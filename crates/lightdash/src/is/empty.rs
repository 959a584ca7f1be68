use crate::is::types::is_array_like;
use crate::value::Value;

/// Check if a value has no items, no characters or no keys.
///
/// - Arrays, typed arrays and strings are empty when their length is zero.
///   A mapping that carries a `"length"` entry is array-like and is empty
///   when that entry is the number zero.
/// - Other containers are empty when they hold no entries. Keys whose value
///   is `undefined` still count.
/// - Numbers, booleans, symbols and nil values are never empty.
///
/// # Examples
///
/// ```
/// use lightdash::{is_empty, Value};
/// use serde_json::json;
///
/// assert!(is_empty(&Value::from(json!([]))));
/// assert!(is_empty(&Value::from(json!({}))));
/// assert!(is_empty(&Value::from("")));
///
/// assert!(!is_empty(&Value::from(json!([1]))));
/// assert!(!is_empty(&Value::from(0)));
/// assert!(!is_empty(&Value::Null));
/// ```
pub fn is_empty(val: &Value) -> bool {
    if is_array_like(val) {
        return match val {
            Value::Array(items) => items.is_empty(),
            Value::Binary(bytes) => bytes.is_empty(),
            Value::Object(obj) => obj.get("length") == Some(&Value::Number(0.0)),
            _ => false,
        };
    }
    match val {
        Value::String(s) => s.is_empty(),
        Value::Object(obj) => obj.is_empty(),
        Value::Map(map) => map.is_empty(),
        Value::Set(set) => set.is_empty(),
        _ => false,
    }
}
