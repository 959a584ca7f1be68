//! Interop with `serde_json`.
//!
//! `serde_json::Value` converts into [`Value`] without loss (numbers become
//! `f64`, object order is kept). The reverse direction is fallible because
//! `undefined`, symbols, maps, sets and non-finite numbers have no JSON form.

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Number};
use thiserror::Error;

use crate::value::{Object, Value};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("{kind} has no JSON representation")]
    Unrepresentable { kind: &'static str },
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => {
                let mut obj = Object::with_capacity(map.len());
                for (key, val) in map {
                    obj.insert(key, Value::from(val));
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

fn number_to_json(n: f64) -> Result<Number, ValueError> {
    if !n.is_finite() {
        return Err(ValueError::NonFiniteNumber(n));
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n).ok_or(ValueError::NonFiniteNumber(n))
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(number_to_json(*n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(obj) => {
                let mut map = Map::new();
                for (key, val) in obj {
                    map.insert(key.clone(), serde_json::Value::try_from(val)?);
                }
                serde_json::Value::Object(map)
            }
            // Encoded as an array of numbers; the binary/array distinction is lost.
            Value::Binary(bytes) => serde_json::Value::Array(
                bytes.iter().map(|b| serde_json::Value::Number((*b).into())).collect(),
            ),
            Value::Undefined | Value::Symbol(_) | Value::Map(_) | Value::Set(_) => {
                return Err(ValueError::Unrepresentable { kind: value.kind() })
            }
        })
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::Value::try_from(&value)
    }
}

/// Serializes into any serde format.
///
/// Unlike the JSON conversion this never fails: `undefined` serializes as
/// unit, symbols as their description, maps as a sequence of `[key, value]`
/// pairs, sets as a sequence and binaries as bytes.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(sym) => serializer.serialize_str(sym.description().unwrap_or_default()),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(obj) => serializer.collect_map(obj),
            Value::Map(map) => serializer.collect_seq(map.iter()),
            Value::Set(set) => serializer.collect_seq(set),
            Value::Binary(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}
