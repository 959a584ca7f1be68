//! Object helpers.

use crate::deep::{self, Key, Parent};
use crate::value::{Object, Value, ValueMap};

/// Creates a new object with the same entries.
pub fn obj_clone(obj: &Object) -> Object {
    obj.clone()
}

/// Maps each value with `f(value, key, index)`, keeping keys and order.
///
/// # Examples
///
/// ```
/// use lightdash::{obj_map, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"a": 4, "b": 2}));
/// let mapped = obj_map(obj.as_object().unwrap(), |val, _, _| {
///     Value::from(val.as_f64().unwrap_or_default() * 2.0)
/// });
/// assert_eq!(Value::Object(mapped), Value::from(json!({"a": 8, "b": 4})));
/// ```
pub fn obj_map<F>(obj: &Object, mut f: F) -> Object
where
    F: FnMut(&Value, &str, usize) -> Value,
{
    obj.iter()
        .enumerate()
        .map(|(index, (key, val))| (key.clone(), f(val, key, index)))
        .collect()
}

/// Recursively maps the leaf values of an object.
///
/// Nested objects and arrays are descended and rebuilt with the same kind
/// and key order; `f(leaf, key, index)` replaces every other value. Array
/// elements are passed with [`Key::Index`].
///
/// # Examples
///
/// ```
/// use lightdash::{obj_map_deep, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"a": {"b": 2, "c": [10, 20]}}));
/// let mapped = obj_map_deep(obj.as_object().unwrap(), |val, _, _| {
///     Value::from(val.as_f64().unwrap_or_default() + 1.0)
/// });
/// assert_eq!(Value::Object(mapped), Value::from(json!({"a": {"b": 3, "c": [11, 21]}})));
/// ```
pub fn obj_map_deep<F>(obj: &Object, mut f: F) -> Object
where
    F: FnMut(&Value, Key<'_>, usize) -> Value,
{
    deep::map_deep(
        Parent::Object(obj),
        deep::arrays_and_objects,
        |val, key, index, _| f(val, key, index),
    )
    .into_object()
    .unwrap_or_default()
}

/// Creates a new object sharing no nested object or array with the input.
///
/// # Examples
///
/// ```
/// use lightdash::{obj_clone_deep, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": {"b": 2, "c": {"a": 10, "b": 20}}}));
/// let mut b = obj_clone_deep(a.as_object().unwrap());
///
/// b["a"].as_object_mut().unwrap()["c"] = Value::from(123);
/// assert_eq!(a, Value::from(json!({"a": {"b": 2, "c": {"a": 10, "b": 20}}})));
/// ```
pub fn obj_clone_deep(obj: &Object) -> Object {
    obj_map_deep(obj, |val, _, _| val.clone())
}

pub fn obj_keys(obj: &Object) -> Vec<&str> {
    obj.keys().map(String::as_str).collect()
}

pub fn obj_values(obj: &Object) -> Vec<&Value> {
    obj.values().collect()
}

pub fn obj_entries(obj: &Object) -> Vec<(&str, &Value)> {
    obj.iter().map(|(key, val)| (key.as_str(), val)).collect()
}

/// Creates a value-keyed map from an object's entries.
///
/// Keys become [`Value::String`]; order is kept.
pub fn map_from_object(obj: &Object) -> ValueMap {
    obj.iter()
        .map(|(key, val)| (Value::String(key.clone()), val.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is::is_equal;
    use serde_json::json;

    fn obj(value: serde_json::Value) -> Object {
        Value::from(value).into_object().unwrap()
    }

    #[test]
    fn test_obj_map_passes_key_and_index() {
        let input = obj(json!({"x": 0, "y": 0}));
        let mapped = obj_map(&input, |_, key, index| Value::from(format!("{key}{index}")));
        assert_eq!(mapped, obj(json!({"x": "x0", "y": "y1"})));
        assert_eq!(input, obj(json!({"x": 0, "y": 0})));
    }

    #[test]
    fn test_obj_map_deep_keys() {
        let input = obj(json!({"a": 1, "b": {"c": [true]}, "d": []}));
        let mapped = obj_map_deep(&input, |_, key, index| Value::from(format!("{key}@{index}")));
        assert_eq!(mapped, obj(json!({"a": "a@0", "b": {"c": ["0@0"]}, "d": []})));
    }

    #[test]
    fn test_obj_map_deep_keeps_maps_as_leaves() {
        let mut map = ValueMap::new();
        map.insert(Value::from(1), Value::from(json!({"nested": true})));
        let mut input = Object::new();
        input.insert("m".into(), Value::Map(map.clone()));

        let mut leaves = 0;
        let mapped = obj_map_deep(&input, |val, _, _| {
            leaves += 1;
            val.clone()
        });
        assert_eq!(leaves, 1);
        assert_eq!(mapped["m"], Value::Map(map));
    }

    #[test]
    fn test_obj_clone_deep_equal_and_independent() {
        let input = obj(json!({"a": {"b": [1, {"c": null}]}, "d": "e"}));
        let mut cloned = obj_clone_deep(&input);
        assert!(is_equal(&Value::Object(input.clone()), &Value::Object(cloned.clone())));

        cloned["a"].as_object_mut().unwrap()["b"].as_array_mut().unwrap().clear();
        assert_eq!(input, obj(json!({"a": {"b": [1, {"c": null}]}, "d": "e"})));
    }

    #[test]
    fn test_keys_values_entries() {
        let input = obj(json!({"b": 1, "a": [2]}));
        assert_eq!(obj_keys(&input), vec!["b", "a"]);
        assert_eq!(obj_values(&input), vec![&Value::from(1), &Value::from(json!([2]))]);
        assert_eq!(
            obj_entries(&input),
            vec![("b", &Value::from(1)), ("a", &Value::from(json!([2])))]
        );
    }

    #[test]
    fn test_map_from_object() {
        let map = map_from_object(&obj(json!({"a": 1, "b": 2})));
        let keys: Vec<&Value> = map.keys().collect();
        assert_eq!(keys, vec![&Value::from("a"), &Value::from("b")]);
        assert_eq!(map[&Value::from("b")], Value::from(2));
    }

    #[test]
    fn test_obj_clone_deep_deeply_nested() {
        let mut nested = Object::new();
        for _ in 0..100_000 {
            let mut outer = Object::new();
            outer.insert("a".into(), Value::Object(nested));
            nested = outer;
        }
        let cloned = obj_clone_deep(&nested);
        assert_eq!(cloned.len(), 1);
        drop(cloned);
        drop(nested);
    }
}
