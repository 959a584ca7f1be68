//! Explicit-stack traversal shared by every deep operation.
//!
//! Containers selected by a `descend` predicate are walked depth-first,
//! left to right, with a heap allocated stack of frames instead of
//! recursion. Everything that is not descended is a leaf.

use std::fmt;

use crate::value::{Object, Value};

/// Position of a leaf inside its immediate parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "{idx}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// The container a leaf was found in.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    Array(&'a [Value]),
    Object(&'a Object),
}

impl<'a> Parent<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Parent::Array(items)),
            Value::Object(obj) => Some(Parent::Object(obj)),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Parent::Array(items) => items.len(),
            Parent::Object(obj) => obj.len(),
        }
    }

    fn child(&self, index: usize) -> Option<(Key<'a>, &'a Value)> {
        match *self {
            Parent::Array(items) => items.get(index).map(|val| (Key::Index(index), val)),
            Parent::Object(obj) => obj
                .get_index(index)
                .map(|(key, val)| (Key::Name(key.as_str()), val)),
        }
    }
}

/// Descend into arrays only.
pub(crate) fn arrays(val: &Value) -> bool {
    matches!(val, Value::Array(_))
}

/// Descend into arrays and objects.
pub(crate) fn arrays_and_objects(val: &Value) -> bool {
    matches!(val, Value::Array(_) | Value::Object(_))
}

/// Visit every leaf below `root`.
///
/// `visit` receives the leaf, its key, its position and its parent.
pub(crate) fn visit_deep<'a, F>(root: Parent<'a>, descend: fn(&Value) -> bool, mut visit: F)
where
    F: FnMut(&'a Value, Key<'a>, usize, Parent<'a>),
{
    let mut stack: Vec<(Parent<'a>, usize)> = vec![(root, 0)];

    while let Some((parent, next)) = stack.last_mut() {
        let parent = *parent;
        let index = *next;
        let Some((key, val)) = parent.child(index) else {
            stack.pop();
            continue;
        };
        *next += 1;

        match Parent::of(val).filter(|_| descend(val)) {
            Some(child) => stack.push((child, 0)),
            None => visit(val, key, index, parent),
        }
    }
}

enum Output {
    Array(Vec<Value>),
    Object(Object),
}

impl Output {
    fn for_parent(parent: &Parent<'_>) -> Self {
        match parent {
            Parent::Array(items) => Output::Array(Vec::with_capacity(items.len())),
            Parent::Object(obj) => Output::Object(Object::with_capacity(obj.len())),
        }
    }

    fn push(&mut self, key: Key<'_>, val: Value) {
        match self {
            Output::Array(items) => items.push(val),
            Output::Object(obj) => {
                obj.insert(key.to_string(), val);
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Output::Array(items) => Value::Array(items),
            Output::Object(obj) => Value::Object(obj),
        }
    }
}

struct Frame<'a> {
    parent: Parent<'a>,
    next: usize,
    /// Key under which the finished output is stored in the frame below.
    key: Key<'a>,
    out: Output,
}

/// Rebuild `root` with every leaf replaced by the result of `map`.
///
/// Descended containers keep their kind and key order.
pub(crate) fn map_deep<'a, F>(root: Parent<'a>, descend: fn(&Value) -> bool, mut map: F) -> Value
where
    F: FnMut(&'a Value, Key<'a>, usize, Parent<'a>) -> Value,
{
    let mut stack = vec![Frame {
        parent: root,
        next: 0,
        key: Key::Index(0),
        out: Output::for_parent(&root),
    }];

    while let Some(frame) = stack.last_mut() {
        let index = frame.next;
        match frame.parent.child(index) {
            Some((key, val)) => {
                frame.next += 1;
                match Parent::of(val).filter(|_| descend(val)) {
                    Some(child) => stack.push(Frame {
                        parent: child,
                        next: 0,
                        key,
                        out: Output::for_parent(&child),
                    }),
                    None => {
                        let mapped = map(val, key, index, frame.parent);
                        frame.out.push(key, mapped);
                    }
                }
            }
            None => {
                debug_assert_eq!(frame.next, frame.parent.len());
                let Some(done) = stack.pop() else { break };
                let finished = done.out.into_value();
                match stack.last_mut() {
                    Some(below) => below.out.push(done.key, finished),
                    None => return finished,
                }
            }
        }
    }

    Value::Undefined
}
