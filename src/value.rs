//! Shape classification and keyed indexing over `serde_json::Value`.
//!
//! Every traversal step asks one question of the node it stands on: is this a
//! mapping, a sequence, or a scalar? [`shape_of`] answers it once per call so
//! the accessor can dispatch with a plain `match`.

use serde_json::Value;

/// The container kind of a value.
///
/// # Examples
///
/// ```rust
/// use fieldpath::value::{shape_of, Shape};
/// use serde_json::json;
/// assert_eq!(shape_of(&json!({"a": 1})), Shape::Mapping);
/// assert_eq!(shape_of(&json!([1, 2])), Shape::Sequence);
/// assert_eq!(shape_of(&json!("a")), Shape::Scalar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Mapping,
    Sequence,
    Scalar,
}

/// Classifies a value as a mapping, a sequence, or a scalar.
pub fn shape_of(value: &Value) -> Shape {
    match value {
        Value::Object(_) => Shape::Mapping,
        Value::Array(_) => Shape::Sequence,
        _ => Shape::Scalar,
    }
}

pub fn is_mapping(value: &Value) -> bool {
    shape_of(value) == Shape::Mapping
}

pub fn is_sequence(value: &Value) -> bool {
    shape_of(value) == Shape::Sequence
}

/// Returns true for values that count as "provided": a usable container, or a
/// new value worth comparing shapes against. Missing values, `null`, `false`,
/// zero and the empty string are not.
pub fn is_provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Parses a key as a sequence index. Only plain decimal digits are accepted,
/// so `"01"`, `"+1"` and `" 1"` are not indices.
pub fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

/// Looks up `key` in a mapping, or the element at index `key` in a sequence.
///
/// Scalars have no children.
///
/// # Examples
///
/// ```rust
/// use fieldpath::value::child;
/// use serde_json::json;
/// let v = json!({"items": ["a", "b"]});
/// assert_eq!(child(&v, "items").and_then(|items| child(items, "1")), Some(&json!("b")));
/// assert_eq!(child(&v, "missing"), None);
/// ```
pub fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => parse_index(key).and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Mutable counterpart of [`child`].
pub fn child_mut<'a>(value: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => parse_index(key).and_then(move |idx| items.get_mut(idx)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_a_scalar() {
        assert_eq!(shape_of(&Value::Null), Shape::Scalar);
    }

    #[test]
    fn index_parsing_rejects_non_canonical_forms() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("key"), None);
    }

    #[test]
    fn child_mut_reaches_sequence_elements() {
        let mut v = json!([{"a": 1}, {"a": 2}]);
        if let Some(second) = child_mut(&mut v, "1") {
            *second = json!("replaced");
        }
        assert_eq!(v, json!([{"a": 1}, "replaced"]));
        assert!(child_mut(&mut v, "5").is_none());
    }

    #[test]
    fn falsy_values_are_not_provided() {
        assert!(!is_provided(None));
        assert!(!is_provided(Some(&Value::Null)));
        assert!(!is_provided(Some(&json!(0))));
        assert!(!is_provided(Some(&json!(""))));
        assert!(!is_provided(Some(&json!(false))));
        assert!(is_provided(Some(&json!("x"))));
        assert!(is_provided(Some(&json!([]))));
        assert!(is_provided(Some(&json!({}))));
    }
}
