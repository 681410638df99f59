//! A canonical, type-safe representation of a field path into nested data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal text of the wildcard segment.
pub const WILDCARD: &str = "*";

/// One component of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Key(String),
    Wildcard,
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }

    /// The key used when indexing into a container. The wildcard indexes as
    /// the literal key `*`.
    pub fn as_key(&self) -> &str {
        match self {
            Segment::Key(key) => key,
            Segment::Wildcard => WILDCARD,
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        if s == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(s.to_string())
        }
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        if s == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(s)
        }
    }
}

impl From<usize> for Segment {
    fn from(idx: usize) -> Self {
        Segment::Key(idx.to_string())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// An ordered sequence of segments.
///
/// Built either from a dot-delimited string or from pre-split segments; both
/// forms are equivalent.
///
/// # Examples
///
/// ```rust
/// use fieldpath::path::{FieldPath, Segment};
/// let a = FieldPath::from("children.items.*");
/// let b = FieldPath::from(["children", "items", "*"]);
/// assert_eq!(a, b);
/// assert_eq!(a.segments()[2], Segment::Wildcard);
/// assert_eq!(a.to_string(), "children.items.*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldPath(pub Vec<Segment>);

impl FieldPath {
    /// Splits a dot-delimited path. The empty string yields an empty path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return FieldPath(Vec::new());
        }
        FieldPath(path.split('.').map(Segment::from).collect())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a segment, returning the extended path.
    pub fn join(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.0.iter().map(Segment::as_key).collect();
        write!(f, "{}", keys.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        FieldPath::parse(s)
    }
}

impl From<&String> for FieldPath {
    fn from(s: &String) -> Self {
        FieldPath::parse(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        FieldPath::parse(&s)
    }
}

impl From<&FieldPath> for FieldPath {
    fn from(p: &FieldPath) -> Self {
        p.clone()
    }
}

impl From<Vec<Segment>> for FieldPath {
    fn from(segments: Vec<Segment>) -> Self {
        FieldPath(segments)
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(keys: Vec<String>) -> Self {
        FieldPath(keys.into_iter().map(Segment::from).collect())
    }
}

impl From<Vec<&str>> for FieldPath {
    fn from(keys: Vec<&str>) -> Self {
        FieldPath(keys.into_iter().map(Segment::from).collect())
    }
}

impl From<&[&str]> for FieldPath {
    fn from(keys: &[&str]) -> Self {
        FieldPath(keys.iter().copied().map(Segment::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldPath {
    fn from(keys: [&str; N]) -> Self {
        FieldPath(keys.into_iter().map(Segment::from).collect())
    }
}

impl<const N: usize> From<[Segment; N]> for FieldPath {
    fn from(segments: [Segment; N]) -> Self {
        FieldPath(segments.into_iter().collect())
    }
}

impl FromIterator<Segment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        FieldPath(iter.into_iter().collect())
    }
}
