//! Configuration for [`dset_with`](crate::dset_with).

use serde::{Deserialize, Serialize};

/// Default maximum number of segments in a path.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default largest array index a write may create.
pub const DEFAULT_MAX_INDEX: usize = 1 << 20;

/// Options controlling path splitting and growth limits.
///
/// Every field has a default, so a partial config document is enough:
///
/// ```
/// use dset::SetOptions;
///
/// let options: SetOptions = serde_json::from_str(r#"{"delimiter": "/"}"#).unwrap();
/// assert_eq!(options.delimiter, "/");
/// assert_eq!(options.max_depth, dset::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    /// Separator used when the path is given as a single string.
    pub delimiter: String,
    /// Maximum number of segments accepted in a path.
    pub max_depth: usize,
    /// Largest index a write may address inside an array. Arrays are padded
    /// with `null` up to the index, so this bounds the allocation.
    pub max_index: usize,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            delimiter: ".".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl SetOptions {
    /// Set the separator used to split string paths.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the maximum number of segments in a path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the largest array index a write may address.
    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }
}
