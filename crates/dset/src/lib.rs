//! Deep-path assignment for `serde_json` values.
//!
//! [`dset`] writes a value at a nested location, creating any missing
//! intermediate containers on the way. Whether a new container is an array or
//! an object depends on the segment that follows it: canonical unsigned
//! integers (`"0"`, `"12"`, but not `"01"` or `"10.0"`) produce arrays.
//!
//! # Example
//!
//! ```
//! use dset::{dset, Segment};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": {"b": {"c": 123}}});
//!
//! // String paths are split on `.`
//! dset(&mut doc, "a.b.x.y", json!(456)).unwrap();
//! assert_eq!(doc, json!({"a": {"b": {"c": 123, "x": {"y": 456}}}}));
//!
//! // Sequences are used as given, so keys may contain the delimiter
//! dset(&mut doc, &["list", "10.2"], json!(true)).unwrap();
//! assert_eq!(doc["list"], json!({"10.2": true}));
//!
//! // Integer segments create arrays, padding holes with null
//! dset(&mut doc, &[Segment::from("x"), Segment::from(1usize)], json!("z")).unwrap();
//! assert_eq!(doc["x"], json!([null, "z"]));
//! ```
//!
//! # Blocked segments
//!
//! `__proto__`, `constructor` and `prototype` never become keys through a
//! skipped position: they are dropped when they appear before the last
//! segment. A path ending in `__proto__` or `constructor` is a no-op.
//!
//! ```
//! use dset::dset;
//! use serde_json::json;
//!
//! let mut doc = json!({"abc": 123});
//! dset(&mut doc, "__proto__.hello", json!(123)).unwrap();
//! assert_eq!(doc, json!({"abc": 123, "hello": 123}));
//!
//! dset(&mut doc, "abc.constructor", json!("world")).unwrap();
//! assert_eq!(doc, json!({"abc": 123, "hello": 123}));
//! ```

use thiserror::Error;

pub mod options;
pub mod set;
pub mod types;
pub mod util;
pub mod validate;

pub use options::{SetOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INDEX};
pub use set::{dset, dset_cloned, dset_with};
pub use types::{ContainerKind, Segment, ToPath};
pub use util::{discards_write, is_blocked, is_numeric_like, split_path, BLOCKED_SEGMENTS};
pub use validate::{validate_options, validate_path};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DsetError {
    #[error("EMPTY_PATH")]
    EmptyPath,
    #[error("PATH_TOO_LONG: {depth} segments, max {max}")]
    PathTooLong { depth: usize, max: usize },
    #[error("INVALID_INDEX: {segment:?} does not address an array element")]
    InvalidIndex { segment: String },
    #[error("INDEX_TOO_LARGE: {segment} exceeds max index {max}")]
    IndexTooLarge { segment: String, max: usize },
    #[error("NOT_A_CONTAINER")]
    NotAContainer,
    #[error("INVALID_DELIMITER")]
    InvalidDelimiter,
}
