use crate::types::Segment;

/// Segment names that never become own keys through a skipped position.
///
/// `__proto__` and `constructor` also discard the whole write when they are
/// the terminal segment. `prototype` is only skipped mid-path.
pub const BLOCKED_SEGMENTS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Check if a string represents a canonical non-negative integer.
///
/// No sign, no decimal point, no leading zero unless the whole string is `"0"`.
///
/// # Example
///
/// ```
/// use dset::is_numeric_like;
///
/// assert!(is_numeric_like("0"));
/// assert!(is_numeric_like("12"));
/// assert!(!is_numeric_like("01"));
/// assert!(!is_numeric_like("10.0"));
/// assert!(!is_numeric_like("-1"));
/// ```
pub fn is_numeric_like(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Split a path string on `delimiter` into key segments.
///
/// Empty pieces are kept, so `""` yields a single empty key and `"a..b"`
/// yields three segments.
///
/// # Example
///
/// ```
/// use dset::{split_path, Segment};
///
/// assert_eq!(split_path("a.b", "."), vec![Segment::from("a"), Segment::from("b")]);
/// assert_eq!(split_path("", "."), vec![Segment::from("")]);
/// ```
pub fn split_path(path: &str, delimiter: &str) -> Vec<Segment> {
    path.split(delimiter).map(Segment::from).collect()
}

/// Check if a segment name is on the denylist.
pub fn is_blocked(segment: &str) -> bool {
    BLOCKED_SEGMENTS.contains(&segment)
}

/// Check if a terminal segment turns the whole write into a no-op.
pub fn discards_write(segment: &str) -> bool {
    matches!(segment, "__proto__" | "constructor")
}
