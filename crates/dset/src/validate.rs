//! Validation of paths and options before any mutation happens.

use crate::options::SetOptions;
use crate::types::Segment;
use crate::DsetError;

/// Validate options.
///
/// # Errors
///
/// Returns [`DsetError::InvalidDelimiter`] if the delimiter is empty.
///
/// # Example
///
/// ```
/// use dset::{validate_options, SetOptions};
///
/// validate_options(&SetOptions::default()).unwrap();
/// validate_options(&SetOptions::default().with_delimiter("")).unwrap_err();
/// ```
pub fn validate_options(options: &SetOptions) -> Result<(), DsetError> {
    if options.delimiter.is_empty() {
        return Err(DsetError::InvalidDelimiter);
    }
    Ok(())
}

/// Validate a normalized path.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no segments
/// - The path exceeds `options.max_depth` segments
///
/// # Example
///
/// ```
/// use dset::{validate_path, Segment, SetOptions};
///
/// let options = SetOptions::default();
/// validate_path(&[Segment::from("foo")], &options).unwrap();
/// validate_path(&[], &options).unwrap_err();
/// ```
pub fn validate_path(path: &[Segment], options: &SetOptions) -> Result<(), DsetError> {
    if path.is_empty() {
        return Err(DsetError::EmptyPath);
    }
    if path.len() > options.max_depth {
        return Err(DsetError::PathTooLong {
            depth: path.len(),
            max: options.max_depth,
        });
    }
    Ok(())
}
