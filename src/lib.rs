//! Fieldpath: read, write, and enumerate fields of nested JSON-like data.
//!
//! Paths are dot-delimited (`"children.items.value"`) or pre-split
//! (`["children", "items", "0", "value"]`). When a path crosses a sequence the
//! operation is applied to every element unless broadcast is switched off for
//! the call, in which case the next segment indexes a single element.
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut doc = json!({"children": {"items": [{"key": 1}, {"key": 2}]}});
//! assert_eq!(
//!     fieldpath::get_value(&doc, "children.items.key", true).unwrap(),
//!     Some(json!([1, 2]))
//! );
//!
//! fieldpath::set_value(&mut doc, ["children", "items", "0", "key"], false, Some(json!(7)), false).unwrap();
//! assert_eq!(fieldpath::get_keys(&doc, "", &[]), vec!["children.items.key", "children.items.key"]);
//! ```

pub use crate::accessor::{PathAccessor, SHAPE_MISMATCH};
pub use crate::error::{AccessError, Result};
pub use crate::path::{FieldPath, Segment};
pub use crate::sink::{TracingSink, WarningBuffer, WarningSink};

pub mod accessor;
pub mod cli;
pub mod error;
pub mod path;
pub mod sink;
pub mod value;

use serde_json::Value;

/// [`PathAccessor::get_keys`] with warnings routed to `tracing`.
pub fn get_keys(container: &Value, prefix: &str, skip_keys: &[&str]) -> Vec<String> {
    PathAccessor::new().get_keys(container, prefix, skip_keys)
}

/// [`PathAccessor::get_value`] with warnings routed to `tracing`.
pub fn get_value(
    container: &Value,
    field_path: impl Into<FieldPath>,
    get_all: bool,
) -> Result<Option<Value>> {
    PathAccessor::new().get_value(container, field_path, get_all)
}

/// [`PathAccessor::set_value`] with warnings routed to `tracing`.
pub fn set_value(
    container: &mut Value,
    field_path: impl Into<FieldPath>,
    removed: bool,
    new_value: Option<Value>,
    set_all: bool,
) -> Result<&mut Value> {
    PathAccessor::new().set_value(container, field_path, removed, new_value, set_all)
}
