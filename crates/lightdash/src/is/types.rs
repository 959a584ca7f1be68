use crate::path::has_key;
use crate::value::{TypeOf, Value};

/// Check whether a value belongs to the given runtime category.
///
/// # Examples
///
/// ```
/// use lightdash::{is_type_of, TypeOf, Value};
///
/// assert!(is_type_of(&Value::from("foo"), TypeOf::String));
/// assert!(is_type_of(&Value::Null, TypeOf::Object));
/// assert!(!is_type_of(&Value::from(1), TypeOf::String));
/// ```
pub fn is_type_of(val: &Value, type_of: TypeOf) -> bool {
    val.type_of() == type_of
}

pub fn is_undefined(val: &Value) -> bool {
    matches!(val, Value::Undefined)
}

pub fn is_defined(val: &Value) -> bool {
    !is_undefined(val)
}

/// Check if a value is `undefined` or `null`.
pub fn is_nil(val: &Value) -> bool {
    is_undefined(val) || matches!(val, Value::Null)
}

/// Check if a value is a non-nil container (sequence, mapping, set or binary).
pub fn is_object_like(val: &Value) -> bool {
    !is_nil(val) && is_type_of(val, TypeOf::Object)
}

/// Check if a value is an instance of an object type.
///
/// Every container qualifies, so in this closed model the predicate agrees
/// with [`is_object_like`].
pub fn is_object(val: &Value) -> bool {
    matches!(
        val,
        Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_) | Value::Binary(_)
    )
}

/// Check if a value is a string-keyed mapping.
pub fn is_plain_object(val: &Value) -> bool {
    matches!(val, Value::Object(_))
}

/// Check if a value is an array.
///
/// Typed byte arrays are not arrays; see [`is_array_typed`].
///
/// # Examples
///
/// ```
/// use lightdash::{is_array, Value};
///
/// assert!(is_array(&Value::Array(vec![])));
/// assert!(!is_array(&Value::Binary(vec![1, 2])));
/// ```
pub fn is_array(val: &Value) -> bool {
    matches!(val, Value::Array(_))
}

/// Check if a value is a typed byte array.
pub fn is_array_typed(val: &Value) -> bool {
    matches!(val, Value::Binary(_))
}

/// Check if a value is a container with a length.
///
/// Arrays and typed arrays always qualify. A mapping qualifies when it holds
/// a defined `"length"` entry.
pub fn is_array_like(val: &Value) -> bool {
    match val {
        Value::Array(_) | Value::Binary(_) => true,
        Value::Object(_) => has_key(val, "length"),
        _ => false,
    }
}

pub fn is_map(val: &Value) -> bool {
    matches!(val, Value::Map(_))
}

pub fn is_set(val: &Value) -> bool {
    matches!(val, Value::Set(_))
}

pub fn is_number(val: &Value) -> bool {
    is_type_of(val, TypeOf::Number)
}

pub fn is_string(val: &Value) -> bool {
    is_type_of(val, TypeOf::String)
}

pub fn is_boolean(val: &Value) -> bool {
    is_type_of(val, TypeOf::Boolean)
}

pub fn is_symbol(val: &Value) -> bool {
    is_type_of(val, TypeOf::Symbol)
}

/// Check if a value is not a container.
pub fn is_primitive(val: &Value) -> bool {
    !is_object_like(val)
}

/// Check if a string coerces to a number other than NaN.
///
/// Follows the usual string-to-number coercion: surrounding whitespace is
/// ignored, the empty string counts as zero, `Infinity` and the `0x`/`0o`/`0b`
/// prefixes are accepted.
///
/// # Examples
///
/// ```
/// use lightdash::is_string_number;
///
/// assert!(is_string_number("123"));
/// assert!(is_string_number(" 1.5e3 "));
/// assert!(is_string_number("0xff"));
/// assert!(!is_string_number("foo"));
/// ```
pub fn is_string_number(val: &str) -> bool {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return true;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }

    let lower = trimmed.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    // Rust's float parser also takes "inf" and "nan", which do not coerce.
    trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && trimmed.parse::<f64>().is_ok()
}
