use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Counts how often each distinct element occurs.
///
/// Keys keep the order in which they were first seen.
///
/// # Examples
///
/// ```
/// use lightdash::arr_count;
///
/// let counted = arr_count(&[1, 1, 2, 1, 3]);
/// let entries: Vec<(i32, usize)> = counted.into_iter().collect();
/// assert_eq!(entries, vec![(1, 3), (2, 1), (3, 1)]);
/// ```
pub fn arr_count<T>(arr: &[T]) -> IndexMap<T, usize>
where
    T: Clone + Hash + Eq,
{
    let mut result = IndexMap::new();
    for val in arr {
        *result.entry(val.clone()).or_insert(0) += 1;
    }
    result
}

fn count_all<T>(values: &[&[T]]) -> IndexMap<T, usize>
where
    T: Clone + Hash + Eq,
{
    let combined: Vec<T> = values.iter().flat_map(|v| v.iter().cloned()).collect();
    arr_count(&combined)
}

/// Returns the elements of `arr` that occur in none of `values`.
///
/// # Examples
///
/// ```
/// use lightdash::{arr_difference, Value};
///
/// let arr = [Value::from(1), Value::from(2), Value::from(3)];
/// let other = [Value::from(1), Value::from("foo"), Value::from(3)];
/// assert_eq!(arr_difference(&arr, &[&other[..]]), vec![Value::from(2)]);
/// ```
pub fn arr_difference<T>(arr: &[T], values: &[&[T]]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    let counted = count_all(values);
    arr.iter()
        .filter(|item| !counted.contains_key(*item))
        .cloned()
        .collect()
}

/// Returns the elements of `arr` that occur in at least one of `values`.
///
/// # Examples
///
/// ```
/// use lightdash::{arr_intersection, Value};
///
/// let arr = [Value::from(1), Value::from(2), Value::from(3)];
/// let a = [Value::from("foo")];
/// let b = [Value::from(2), Value::from(0), Value::from(2)];
/// assert_eq!(arr_intersection(&arr, &[&a[..], &b[..]]), vec![Value::from(2)]);
/// ```
pub fn arr_intersection<T>(arr: &[T], values: &[&[T]]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    let counted = count_all(values);
    arr.iter()
        .filter(|item| counted.contains_key(*item))
        .cloned()
        .collect()
}

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// # Examples
///
/// ```
/// use lightdash::arr_uniq;
///
/// assert_eq!(arr_uniq(&[1, 1, 2, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn arr_uniq<T>(arr: &[T]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    arr.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    fn arr(value: serde_json::Value) -> Vec<Value> {
        Value::from(value).into_array().unwrap()
    }

    #[test]
    fn test_count_values() {
        let input = arr(json!(["a", 1, "a", [1], [1], null]));
        let entries: Vec<(Value, usize)> = arr_count(&input).into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (Value::from("a"), 2),
                (Value::from(1), 1),
                (Value::from(json!([1])), 2),
                (Value::Null, 1),
            ]
        );
    }

    #[test]
    fn test_count_nan_once() {
        let counted = arr_count(&[Value::from(f64::NAN), Value::from(f64::NAN)]);
        assert_eq!(counted.len(), 1);
        assert_eq!(counted[&Value::from(f64::NAN)], 2);
    }

    #[test]
    fn test_difference() {
        let input = arr(json!([1, 2, 3]));
        let other = arr(json!([1, "foo", 3]));
        assert_eq!(arr_difference(&input, &[other.as_slice()]), arr(json!([2])));

        let input = arr(json!([1, 2, 3, 2]));
        let ones = arr(json!([1]));
        let threes = arr(json!([3]));
        assert_eq!(
            arr_difference(&input, &[ones.as_slice(), threes.as_slice()]),
            arr(json!([2, 2]))
        );
        assert_eq!(arr_difference(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_intersection() {
        let input = arr(json!([1, 2, 3]));
        let foo = arr(json!(["foo"]));
        let twos = arr(json!([2, 0, 2]));
        assert_eq!(
            arr_intersection(&input, &[foo.as_slice(), twos.as_slice()]),
            arr(json!([2]))
        );
        assert_eq!(arr_intersection(&[1, 2], &[]), Vec::<i32>::new());
    }

    #[test]
    fn test_uniq() {
        let input = arr(json!([1, "1", 1, {"a": 1}, {"a": 1}]));
        assert_eq!(arr_uniq(&input), arr(json!([1, "1", {"a": 1}])));
        assert_eq!(arr_uniq::<u8>(&[]), Vec::<u8>::new());
    }
}
