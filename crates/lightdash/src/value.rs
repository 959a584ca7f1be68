//! The dynamic value every predicate and deep helper operates on.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// String-keyed mapping with insertion order.
pub type Object = IndexMap<String, Value>;

/// Value-keyed mapping with insertion order.
pub type ValueMap = IndexMap<Value, Value>;

/// Insertion-ordered set of values.
pub type ValueSet = IndexSet<Value>;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique token. Two symbols are equal only if one is a clone of the other.
///
/// # Examples
///
/// ```
/// use lightdash::Symbol;
///
/// let a = Symbol::new(Some("foo"));
/// let b = Symbol::new(Some("foo"));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_eq!(a.description(), Some("foo"));
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

/// Coarse runtime category of a value, as reported by [`Value::type_of`].
///
/// `null` and every container report [`TypeOf::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeOf {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Symbol,
}

/// A dynamically typed datum: a primitive, an ordered sequence, or a keyed
/// mapping.
///
/// `PartialEq`, `Eq` and `Hash` are structural. Numbers compare with
/// SameValueZero semantics (`NaN` equals `NaN`, `0.0` equals `-0.0`), which
/// makes `Value` usable as a set member or map key. Object, map and set
/// equality ignores entry order. For strict, identity-based comparison see
/// [`crate::is_same`]; for the library's deep comparison see
/// [`crate::is_equal`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Array(Vec<Value>),
    Object(Object),
    Map(ValueMap),
    Set(ValueSet),
    /// Typed byte array.
    Binary(Vec<u8>),
}

impl Value {
    /// Returns the value's runtime category.
    pub fn type_of(&self) -> TypeOf {
        match self {
            Value::Undefined => TypeOf::Undefined,
            Value::Bool(_) => TypeOf::Boolean,
            Value::Number(_) => TypeOf::Number,
            Value::String(_) => TypeOf::String,
            Value::Symbol(_) => TypeOf::Symbol,
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::Binary(_) => TypeOf::Object,
        }
    }

    /// Human readable name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Binary(_) => "binary",
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_array(mut self) -> Option<Vec<Value>> {
        self.as_array_mut().map(std::mem::take)
    }

    pub fn into_object(mut self) -> Option<Object> {
        self.as_object_mut().map(std::mem::take)
    }
}

fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Bit pattern that agrees with [`same_value_zero`].
fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0
    } else {
        n.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => same_value_zero(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => canonical_bits(*n).hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(sym) => sym.hash(state),
            Value::Array(items) => items.hash(state),
            // Entry order does not take part in equality.
            Value::Object(obj) => unordered_hash(obj).hash(state),
            Value::Map(map) => unordered_hash(map).hash(state),
            Value::Set(set) => unordered_hash(set).hash(state),
            Value::Binary(bytes) => bytes.hash(state),
        }
    }
}

/// Sum of the entries' hashes, independent of iteration order.
fn unordered_hash<I>(entries: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    entries.into_iter().fold(0u64, |sum, entry| {
        let mut hasher = DefaultHasher::new();
        entry.hash(&mut hasher);
        sum.wrapping_add(hasher.finish())
    })
}

fn has_children(val: &Value) -> bool {
    match val {
        Value::Array(items) => !items.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
        Value::Map(map) => !map.is_empty(),
        Value::Set(set) => !set.is_empty(),
        _ => false,
    }
}

/// Moves every non-empty child container of `val` onto `out`.
fn take_children(val: &mut Value, out: &mut Vec<Value>) {
    match val {
        Value::Array(items) => {
            out.extend(items.iter_mut().filter(|v| has_children(v)).map(mem::take));
        }
        Value::Object(obj) => {
            out.extend(obj.values_mut().filter(|v| has_children(v)).map(mem::take));
        }
        Value::Map(map) => {
            for (key, v) in mem::take(map) {
                out.push(key);
                out.push(v);
            }
        }
        Value::Set(set) => out.extend(mem::take(set)),
        _ => {}
    }
}

/// Nested containers are torn down from a heap stack, so dropping a deeply
/// nested value does not grow the call stack.
impl Drop for Value {
    fn drop(&mut self) {
        if !has_children(self) {
            return;
        }
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(mut val) = stack.pop() {
            take_children(&mut val, &mut stack);
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl From<ValueSet> for Value {
    fn from(set: ValueSet) -> Self {
        Value::Set(set)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_type_of_reports_object_for_null_and_containers() {
        assert_eq!(Value::Null.type_of(), TypeOf::Object);
        assert_eq!(Value::Array(vec![]).type_of(), TypeOf::Object);
        assert_eq!(Value::Binary(vec![1]).type_of(), TypeOf::Object);
        assert_eq!(Value::Undefined.type_of(), TypeOf::Undefined);
        assert_eq!(Value::from("a").type_of(), TypeOf::String);
        assert_eq!(Value::from(1).type_of(), TypeOf::Number);
        assert_eq!(Value::from(true).type_of(), TypeOf::Boolean);
    }

    #[test]
    fn test_numbers_use_same_value_zero() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_eq!(hash_of(&Value::from(0.0)), hash_of(&Value::from(-0.0)));
        assert_eq!(hash_of(&Value::from(f64::NAN)), hash_of(&Value::from(-f64::NAN)));
        assert_ne!(Value::from(1), Value::from("1"));
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let mut a = Object::new();
        a.insert("x".into(), Value::from(1));
        a.insert("y".into(), Value::from(2));
        let mut b = Object::new();
        b.insert("y".into(), Value::from(2));
        b.insert("x".into(), Value::from(1));

        assert_eq!(Value::from(a.clone()), Value::from(b.clone()));
        assert_eq!(hash_of(&Value::from(a)), hash_of(&Value::from(b)));
    }

    #[test]
    fn test_symbols_compare_by_identity() {
        let a = Symbol::new(None);
        let b = Symbol::new(None);
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a), Value::from(b));
    }

    #[test]
    fn test_type_of_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TypeOf::Boolean).unwrap(), "\"boolean\"");
        let parsed: TypeOf = serde_json::from_str("\"symbol\"").unwrap();
        assert_eq!(parsed, TypeOf::Symbol);
    }

    #[test]
    fn test_collects_into_array() {
        let value: Value = (1..=3).map(Value::from).collect();
        assert_eq!(
            value,
            Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }

    #[test]
    fn test_same_size_objects_hash_apart() {
        let hashes: std::collections::HashSet<u64> = (0..1000)
            .map(|id| {
                let mut obj = Object::new();
                obj.insert("id".into(), Value::from(id));
                hash_of(&Value::from(obj))
            })
            .collect();
        assert!(hashes.len() > 990);

        let set_of = |items: [i32; 2]| Value::Set(items.into_iter().map(Value::from).collect());
        assert_eq!(hash_of(&set_of([1, 2])), hash_of(&set_of([2, 1])));
        assert_ne!(hash_of(&set_of([1, 2])), hash_of(&set_of([1, 3])));
    }

    #[test]
    fn test_uniq_of_records_stays_fast() {
        let records: Vec<Value> = (0..20_000)
            .map(|id| {
                let mut obj = Object::new();
                obj.insert("id".into(), Value::from(id));
                Value::from(obj)
            })
            .collect();
        let started = std::time::Instant::now();
        assert_eq!(crate::arr_uniq(&records).len(), 20_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_drop_deeply_nested_value() {
        let mut nested = Value::from(1);
        for depth in 0..200_000 {
            nested = if depth % 2 == 0 {
                Value::Array(vec![nested])
            } else {
                let mut obj = Object::new();
                obj.insert("next".into(), nested);
                Value::Object(obj)
            };
        }
        drop(nested);

        let mut map = ValueMap::new();
        map.insert(Value::from(vec![Value::from(1)]), Value::from("x"));
        let mut keyed = Value::Map(map);
        for _ in 0..100_000 {
            let mut map = ValueMap::new();
            map.insert(Value::Null, keyed);
            keyed = Value::Map(map);
        }
        drop(keyed);
    }

    #[test]
    fn test_into_array_and_object() {
        let arr = Value::Array(vec![Value::from(1)]);
        assert_eq!(arr.into_array(), Some(vec![Value::from(1)]));
        assert_eq!(Value::from(1).into_object(), None);
    }
}
