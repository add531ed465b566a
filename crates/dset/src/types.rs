//! Type definitions for deep-path assignment.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::util::{is_numeric_like, split_path};

/// A single step of a path.
///
/// Can be either a string (object key) or number (array index). A `Key` whose
/// text is a canonical unsigned integer still addresses array elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Check whether this segment reads as an array index.
    ///
    /// `Index` segments always do; `Key` segments only when their text is a
    /// canonical unsigned integer (see [`is_numeric_like`]).
    pub fn is_numeric_like(&self) -> bool {
        match self {
            Segment::Key(key) => is_numeric_like(key),
            Segment::Index(_) => true,
        }
    }

    /// The segment rendered as an object key.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// The string form of a `Key` segment, `None` for `Index`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            Segment::Index(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<u32> for Segment {
    fn from(index: u32) -> Self {
        // u32 always fits in usize on supported targets.
        Segment::Index(index as usize)
    }
}

/// The two container shapes a path can walk through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Integer-indexed, ordered, possibly sparse (`Value::Array`).
    OrderedList,
    /// String-keyed mapping (`Value::Object`).
    KeyedMap,
}

impl ContainerKind {
    /// Pick the container to create for a step whose lookahead is `next`.
    ///
    /// # Example
    ///
    /// ```
    /// use dset::{ContainerKind, Segment};
    ///
    /// assert_eq!(ContainerKind::for_next(&Segment::from("0")), ContainerKind::OrderedList);
    /// assert_eq!(ContainerKind::for_next(&Segment::from("10.0")), ContainerKind::KeyedMap);
    /// assert_eq!(ContainerKind::for_next(&Segment::from(3usize)), ContainerKind::OrderedList);
    /// ```
    pub fn for_next(next: &Segment) -> Self {
        if next.is_numeric_like() {
            ContainerKind::OrderedList
        } else {
            ContainerKind::KeyedMap
        }
    }

    /// Classify an existing value. Returns `None` for scalars and `null`.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(ContainerKind::OrderedList),
            Value::Object(_) => Some(ContainerKind::KeyedMap),
            _ => None,
        }
    }

    /// Create an empty container of this kind.
    pub fn vivify(self) -> Value {
        match self {
            ContainerKind::OrderedList => Value::Array(Vec::new()),
            ContainerKind::KeyedMap => Value::Object(Map::new()),
        }
    }
}

/// Anything that can be normalized into an ordered list of [`Segment`]s.
///
/// Strings are split on the configured delimiter; sequences are converted
/// element by element, keeping integer segments as `Index`.
pub trait ToPath {
    fn to_segments(&self, delimiter: &str) -> Vec<Segment>;
}

impl ToPath for str {
    fn to_segments(&self, delimiter: &str) -> Vec<Segment> {
        split_path(self, delimiter)
    }
}

impl ToPath for String {
    fn to_segments(&self, delimiter: &str) -> Vec<Segment> {
        split_path(self, delimiter)
    }
}

impl<T: Clone + Into<Segment>> ToPath for [T] {
    fn to_segments(&self, _delimiter: &str) -> Vec<Segment> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Segment>> ToPath for Vec<T> {
    fn to_segments(&self, delimiter: &str) -> Vec<Segment> {
        self.as_slice().to_segments(delimiter)
    }
}

impl<T: Clone + Into<Segment>, const N: usize> ToPath for [T; N] {
    fn to_segments(&self, delimiter: &str) -> Vec<Segment> {
        self.as_slice().to_segments(delimiter)
    }
}
