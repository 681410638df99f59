//! Path-based reads, writes, and key enumeration over nested data.
//!
//! ## Broadcast
//!
//! When a traversal lands on a sequence with segments still to consume, the
//! remaining path is applied to every element of that sequence. Reads collect
//! the per-element results into an array; writes mutate each element in place.
//! Passing `get_all`/`set_all = false` disables this for the call, so the next
//! segment is used as an index into the sequence instead.
//!
//! ## Wildcard
//!
//! A `*` segment ends the path at the key before it: `a.b.*` reads or writes
//! `a.b` as a whole, and any segments after the `*` are ignored.

use serde_json::Value;
use tracing::debug;

use crate::error::{AccessError, Result};
use crate::path::{FieldPath, Segment};
use crate::sink::{TracingSink, WarningSink};
use crate::value::{
    child, child_mut, is_mapping, is_provided, is_sequence, parse_index, shape_of, Shape,
};

/// Warning emitted when a write replaces a mapping or sequence with a value of
/// a different shape.
pub const SHAPE_MISMATCH: &str = "There is a mismatch between the type of new value and original value";

/// Reads, writes, and enumerates fields of nested data by field path.
///
/// The accessor holds nothing but the sink that receives non-fatal warnings,
/// so one instance can serve any number of calls.
///
/// # Examples
///
/// ```rust
/// use fieldpath::PathAccessor;
/// use serde_json::json;
///
/// let accessor = PathAccessor::new();
/// let mut doc = json!({"items": [{"v": 1}, {"v": 2}]});
///
/// accessor.set_value(&mut doc, "items.v", false, Some(json!(0)), true).unwrap();
/// assert_eq!(accessor.get_value(&doc, "items.v", true).unwrap(), Some(json!([0, 0])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathAccessor<S = TracingSink> {
    sink: S,
}

impl PathAccessor<TracingSink> {
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: WarningSink> PathAccessor<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Lists the dot-joined path of every leaf field under `container`,
    /// depth-first, in key order.
    ///
    /// Scalars and empty sequences are leaves. Non-empty sequences contribute
    /// the keys of their mapping elements only; other elements are skipped.
    /// Keys named in `skip_keys` are dropped at any depth. A non-mapping
    /// `container` has no keys.
    pub fn get_keys(&self, container: &Value, prefix: &str, skip_keys: &[&str]) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(container, prefix, skip_keys, &mut keys);
        keys
    }

    /// Reads the value at `field_path`.
    ///
    /// Returns `Ok(None)` when any key along the path is missing. Under
    /// broadcast the result is an array with one entry per element, where a
    /// missing entry reads as `null`.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] when `container` is falsy (`null`,
    /// `false`, `0` or `""`) or the path is empty.
    pub fn get_value(
        &self,
        container: &Value,
        field_path: impl Into<FieldPath>,
        get_all: bool,
    ) -> Result<Option<Value>> {
        let path = field_path.into();
        if !is_provided(Some(container)) || path.is_empty() {
            return Err(AccessError::invalid_field_path());
        }
        Ok(read(container, path.segments(), get_all))
    }

    /// Writes (or, with `removed`, deletes) the field at `field_path` in place
    /// and hands back the same container.
    ///
    /// The container is mutated, not copied; use [`PathAccessor::with_value`]
    /// to leave the original untouched. Missing intermediate keys are skipped
    /// without error.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] when `container` is falsy, the path is
    /// empty, or the key that would be written is empty. Validation happens
    /// before anything is modified.
    pub fn set_value<'v>(
        &self,
        container: &'v mut Value,
        field_path: impl Into<FieldPath>,
        removed: bool,
        new_value: Option<Value>,
        set_all: bool,
    ) -> Result<&'v mut Value> {
        let path = field_path.into();
        if !is_provided(Some(container)) || path.is_empty() {
            return Err(AccessError::invalid_field_path());
        }
        match terminal_segment(path.segments()) {
            Some(segment) if !segment.as_key().is_empty() => {}
            _ => return Err(AccessError::invalid_field()),
        }
        self.write(container, path.segments(), removed, new_value.as_ref(), set_all)?;
        Ok(container)
    }

    /// Like [`PathAccessor::set_value`], but writes into a copy of `container`
    /// and returns the copy.
    pub fn with_value(
        &self,
        container: &Value,
        field_path: impl Into<FieldPath>,
        removed: bool,
        new_value: Option<Value>,
        set_all: bool,
    ) -> Result<Value> {
        let mut copy = container.clone();
        self.set_value(&mut copy, field_path, removed, new_value, set_all)?;
        Ok(copy)
    }

    fn write(
        &self,
        container: &mut Value,
        segments: &[Segment],
        removed: bool,
        new_value: Option<&Value>,
        set_all: bool,
    ) -> Result<()> {
        let Some((head, rest)) = segments.split_first() else {
            return Ok(());
        };

        if ends_at(rest) {
            // Broadcast can land on falsy elements; there is nothing to reset.
            if !is_provided(Some(container)) {
                return Ok(());
            }
            return self.reset_field(container, head.as_key(), removed, new_value);
        }

        let Some(nested) = child_mut(container, head.as_key()) else {
            return Ok(());
        };
        if set_all {
            if let Some(items) = nested.as_array_mut() {
                debug!(segment = %head, elements = items.len(), "broadcasting write");
                for item in items.iter_mut() {
                    self.write(item, rest, removed, new_value, set_all)?;
                }
                return Ok(());
            }
        }
        self.write(nested, rest, removed, new_value, set_all)
    }

    /// Removes or overwrites one field of `target`.
    ///
    /// A mismatch between the shape of the old value and a provided new value
    /// is reported to the sink; the write goes ahead either way.
    fn reset_field(
        &self,
        target: &mut Value,
        field: &str,
        removed: bool,
        new_value: Option<&Value>,
    ) -> Result<()> {
        if !is_provided(Some(target)) || field.is_empty() {
            return Err(AccessError::invalid_field());
        }

        if removed {
            match target {
                Value::Object(map) => {
                    map.shift_remove(field);
                }
                // Sequence slots stay in place so sibling indices do not shift.
                Value::Array(items) => {
                    if let Some(slot) = parse_index(field).and_then(|idx| items.get_mut(idx)) {
                        *slot = Value::Null;
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        if shape_mismatch(child(target, field), new_value) {
            self.sink.warn(SHAPE_MISMATCH);
        }

        let replacement = new_value.cloned().unwrap_or(Value::Null);
        match target {
            Value::Object(map) => {
                map.insert(field.to_string(), replacement);
            }
            Value::Array(items) => {
                if let Some(idx) = parse_index(field) {
                    if idx >= items.len() {
                        items.resize(idx + 1, Value::Null);
                    }
                    items[idx] = replacement;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// True when the path stops at the current segment: nothing follows it, or
/// the next segment is the wildcard.
fn ends_at(rest: &[Segment]) -> bool {
    rest.first().map_or(true, Segment::is_wildcard)
}

/// The segment a write will hand to `reset_field`, which depends only on the
/// path and never on the data.
fn terminal_segment(segments: &[Segment]) -> Option<&Segment> {
    segments
        .iter()
        .enumerate()
        .find(|(idx, _)| ends_at(&segments[idx + 1..]))
        .map(|(_, segment)| segment)
}

fn read(container: &Value, segments: &[Segment], get_all: bool) -> Option<Value> {
    let (head, rest) = segments.split_first()?;
    if ends_at(rest) {
        return child(container, head.as_key()).cloned();
    }

    let nested = child(container, head.as_key())?;
    match shape_of(nested) {
        Shape::Sequence if get_all => {
            let items = nested.as_array().map(Vec::as_slice).unwrap_or_default();
            debug!(segment = %head, elements = items.len(), "broadcasting read");
            let values = items
                .iter()
                .map(|item| read(item, rest, get_all).unwrap_or(Value::Null))
                .collect();
            Some(Value::Array(values))
        }
        _ => read(nested, rest, get_all),
    }
}

fn collect_keys(container: &Value, prefix: &str, skip_keys: &[&str], keys: &mut Vec<String>) {
    let Value::Object(map) = container else {
        return;
    };

    for (key, value) in map {
        if skip_keys.contains(&key.as_str()) {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match shape_of(value) {
            Shape::Sequence => {
                let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
                if items.is_empty() {
                    keys.push(path);
                } else {
                    for item in items.iter().filter(|item| is_mapping(item)) {
                        collect_keys(item, &path, skip_keys, keys);
                    }
                }
            }
            Shape::Mapping => collect_keys(value, &path, skip_keys, keys),
            Shape::Scalar => keys.push(path),
        }
    }
}

fn shape_mismatch(original: Option<&Value>, new_value: Option<&Value>) -> bool {
    if !is_provided(new_value) {
        return false;
    }
    let (Some(original), Some(new_value)) = (original, new_value) else {
        return false;
    };
    (is_sequence(original) && !is_sequence(new_value))
        || (is_mapping(original) && !is_mapping(new_value))
}
