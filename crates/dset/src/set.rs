//! Deep assignment with auto-vivification.

use serde_json::Value;
use tracing::{debug, trace};

use crate::options::SetOptions;
use crate::types::{ContainerKind, Segment, ToPath};
use crate::util::{discards_write, is_blocked, is_numeric_like};
use crate::validate::{validate_options, validate_path};
use crate::DsetError;

/// Set `value` at `path` inside `root`, creating missing containers.
///
/// Uses [`SetOptions::default()`], so string paths split on `.`.
///
/// # Errors
///
/// See [`dset_with`].
///
/// # Example
///
/// ```
/// use dset::dset;
/// use serde_json::json;
///
/// let mut doc = json!({"a": 1});
/// dset(&mut doc, "e.0.z", json!(2)).unwrap();
/// assert_eq!(doc, json!({"a": 1, "e": [{"z": 2}]}));
/// ```
pub fn dset<P>(root: &mut Value, path: &P, value: Value) -> Result<(), DsetError>
where
    P: ToPath + ?Sized,
{
    dset_with(root, path, value, &SetOptions::default())
}

/// Set `value` at `path` inside `root` using explicit options.
///
/// Each intermediate step that is missing, `null` or a scalar is replaced by
/// a fresh container: an array when the following segment is numeric-like,
/// an object otherwise. `__proto__`, `constructor` and `prototype` are
/// skipped mid-path; a terminal `__proto__` or `constructor` leaves `root`
/// untouched and still returns `Ok(())`.
///
/// # Errors
///
/// - `DsetError::InvalidDelimiter` - the configured delimiter is empty
/// - `DsetError::EmptyPath` - the path has no segments
/// - `DsetError::PathTooLong` - the path exceeds `max_depth`
/// - `DsetError::NotAContainer` - `root` is not an object or array
/// - `DsetError::InvalidIndex` - a non-index key addresses an existing array
/// - `DsetError::IndexTooLarge` - an array index exceeds `max_index`
///
/// Every error is reported before anything is mutated.
pub fn dset_with<P>(
    root: &mut Value,
    path: &P,
    value: Value,
    options: &SetOptions,
) -> Result<(), DsetError>
where
    P: ToPath + ?Sized,
{
    validate_options(options)?;
    let segments = path.to_segments(&options.delimiter);
    validate_path(&segments, options)?;
    if ContainerKind::of(root).is_none() {
        return Err(DsetError::NotAContainer);
    }

    let Some((parents, last)) = effective_path(segments) else {
        return Ok(());
    };
    check_indices(root, &parents, &last, options.max_index)?;

    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        let next = parents.get(i + 1).unwrap_or(&last);
        current = descend(current, segment, ContainerKind::for_next(next), options)?;
    }
    *slot(current, &last, options)? = value;
    Ok(())
}

/// Clone `root`, set `value` at `path` on the copy and return it.
///
/// # Errors
///
/// Same as [`dset`]; `root` is never modified.
///
/// # Example
///
/// ```
/// use dset::dset_cloned;
/// use serde_json::json;
///
/// let doc = json!({});
/// let out = dset_cloned(&doc, "x.y.z", json!("foobar")).unwrap();
/// assert_eq!(out, json!({"x": {"y": {"z": "foobar"}}}));
/// assert_eq!(doc, json!({}));
/// ```
pub fn dset_cloned<P>(root: &Value, path: &P, value: Value) -> Result<Value, DsetError>
where
    P: ToPath + ?Sized,
{
    let mut copy = root.clone();
    dset(&mut copy, path, value)?;
    Ok(copy)
}

/// Split off the terminal segment and drop blocked names from the rest.
///
/// Returns `None` when the terminal segment discards the write.
fn effective_path(mut segments: Vec<Segment>) -> Option<(Vec<Segment>, Segment)> {
    let last = segments.pop()?;
    if let Some(key) = last.as_str().filter(|key| discards_write(key)) {
        debug!(segment = key, "discarding write to blocked terminal segment");
        return None;
    }
    segments.retain(|segment| match segment.as_str() {
        Some(key) if is_blocked(key) => {
            trace!(segment = key, "skipping blocked path segment");
            false
        }
        _ => true,
    });
    Some((segments, last))
}

/// Check every array index the write would use, without mutating.
///
/// Existing arrays are addressed as they are; once the walk leaves the
/// existing tree, each step gets a fresh container chosen by its own segment.
fn check_indices(
    root: &Value,
    parents: &[Segment],
    last: &Segment,
    max_index: usize,
) -> Result<(), DsetError> {
    let mut current = Some(root);
    for segment in parents.iter().chain(std::iter::once(last)) {
        current = match current {
            Some(Value::Object(map)) => map.get(&*segment.as_key()),
            Some(Value::Array(list)) => list.get(list_index(segment, max_index)?),
            _ => {
                if segment.is_numeric_like() {
                    list_index(segment, max_index)?;
                }
                None
            }
        };
    }
    Ok(())
}

/// Resolve the entry at `segment`, replacing non-containers with `kind`.
fn descend<'a>(
    container: &'a mut Value,
    segment: &Segment,
    kind: ContainerKind,
    options: &SetOptions,
) -> Result<&'a mut Value, DsetError> {
    let entry = slot(container, segment, options)?;
    if ContainerKind::of(entry).is_none() {
        trace!(%segment, ?kind, "vivifying container");
        *entry = kind.vivify();
    }
    Ok(entry)
}

/// Get the entry at `segment`, inserting `null` if it does not exist yet.
///
/// Arrays are padded with `null` up to the requested index.
fn slot<'a>(
    container: &'a mut Value,
    segment: &Segment,
    options: &SetOptions,
) -> Result<&'a mut Value, DsetError> {
    match container {
        Value::Object(map) => Ok(map
            .entry(segment.as_key().into_owned())
            .or_insert(Value::Null)),
        Value::Array(list) => {
            let index = list_index(segment, options.max_index)?;
            if index >= list.len() {
                list.resize(index + 1, Value::Null);
            }
            Ok(&mut list[index])
        }
        _ => Err(DsetError::NotAContainer),
    }
}

fn list_index(segment: &Segment, max_index: usize) -> Result<usize, DsetError> {
    let index = match segment {
        Segment::Index(index) => *index,
        Segment::Key(key) if is_numeric_like(key) => key
            .parse()
            .map_err(|_| DsetError::IndexTooLarge {
                segment: key.clone(),
                max: max_index,
            })?,
        Segment::Key(key) => {
            return Err(DsetError::InvalidIndex {
                segment: key.clone(),
            })
        }
    };
    if index > max_index {
        return Err(DsetError::IndexTooLarge {
            segment: index.to_string(),
            max: max_index,
        });
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(path: &[&str]) -> Vec<Segment> {
        path.iter().copied().map(Segment::from).collect()
    }

    #[test]
    fn test_effective_path_plain() {
        let (parents, last) = effective_path(keys(&["a", "b", "c"])).unwrap();
        assert_eq!(parents, keys(&["a", "b"]));
        assert_eq!(last, Segment::from("c"));
    }

    #[test]
    fn test_effective_path_skips_blocked_parents() {
        let (parents, last) =
            effective_path(keys(&["__proto__", "a", "constructor", "prototype", "b"])).unwrap();
        assert_eq!(parents, keys(&["a"]));
        assert_eq!(last, Segment::from("b"));
    }

    #[test]
    fn test_effective_path_discarding_terminal() {
        assert!(effective_path(keys(&["a", "__proto__"])).is_none());
        assert!(effective_path(keys(&["constructor"])).is_none());
        assert!(effective_path(Vec::new()).is_none());
    }

    #[test]
    fn test_effective_path_prototype_terminal_is_plain_key() {
        let (parents, last) = effective_path(keys(&["a", "prototype"])).unwrap();
        assert_eq!(parents, keys(&["a"]));
        assert_eq!(last, Segment::from("prototype"));
    }

    #[test]
    fn test_slot_object_inserts_null() {
        let mut doc = json!({"a": 1});
        let entry = slot(&mut doc, &Segment::from("b"), &SetOptions::default()).unwrap();
        assert_eq!(*entry, Value::Null);
        assert_eq!(doc, json!({"a": 1, "b": null}));
    }

    #[test]
    fn test_slot_object_index_segment_uses_decimal_key() {
        let mut doc = json!({});
        *slot(&mut doc, &Segment::from(3usize), &SetOptions::default()).unwrap() = json!(true);
        assert_eq!(doc, json!({"3": true}));
    }

    #[test]
    fn test_slot_array_pads_with_null() {
        let mut doc = json!([1]);
        *slot(&mut doc, &Segment::from("3"), &SetOptions::default()).unwrap() = json!(4);
        assert_eq!(doc, json!([1, null, null, 4]));
    }

    #[test]
    fn test_slot_array_existing_element() {
        let mut doc = json!([1, 2, 3]);
        let entry = slot(&mut doc, &Segment::from(1usize), &SetOptions::default()).unwrap();
        assert_eq!(*entry, json!(2));
    }

    #[test]
    fn test_slot_scalar() {
        let mut doc = json!(5);
        assert_eq!(
            slot(&mut doc, &Segment::from("a"), &SetOptions::default()),
            Err(DsetError::NotAContainer)
        );
    }

    #[test]
    fn test_list_index() {
        assert_eq!(list_index(&Segment::from("0"), 10), Ok(0));
        assert_eq!(list_index(&Segment::from(10usize), 10), Ok(10));
        assert_eq!(
            list_index(&Segment::from("01"), 10),
            Err(DsetError::InvalidIndex {
                segment: "01".to_string()
            })
        );
        assert_eq!(
            list_index(&Segment::from("11"), 10),
            Err(DsetError::IndexTooLarge {
                segment: "11".to_string(),
                max: 10
            })
        );
        assert!(matches!(
            list_index(&Segment::from("99999999999999999999999"), 10),
            Err(DsetError::IndexTooLarge { .. })
        ));
    }

    #[test]
    fn test_descend_keeps_existing_container() {
        let mut doc = json!({"a": {"b": 1}});
        let entry = descend(
            &mut doc,
            &Segment::from("a"),
            ContainerKind::OrderedList,
            &SetOptions::default(),
        )
        .unwrap();
        assert_eq!(*entry, json!({"b": 1}));
    }

    #[test]
    fn test_descend_replaces_scalar() {
        let mut doc = json!({"a": "text"});
        descend(
            &mut doc,
            &Segment::from("a"),
            ContainerKind::OrderedList,
            &SetOptions::default(),
        )
        .unwrap();
        assert_eq!(doc, json!({"a": []}));
    }

    #[test]
    fn test_dset_shallow() {
        let mut doc = json!({});
        dset(&mut doc, "abc", json!(123)).unwrap();
        assert_eq!(doc, json!({"abc": 123}));
    }

    #[test]
    fn test_dset_with_delimiter() {
        let mut doc = json!({});
        let options = SetOptions::default().with_delimiter("/");
        dset_with(&mut doc, "a/b.c", json!(1), &options).unwrap();
        assert_eq!(doc, json!({"a": {"b.c": 1}}));
    }

    #[test]
    fn test_dset_index_too_large() {
        let mut doc = json!({});
        let options = SetOptions::default().with_max_index(8);
        let result = dset_with(&mut doc, "list.9", json!(1), &options);
        assert_eq!(
            result,
            Err(DsetError::IndexTooLarge {
                segment: "9".to_string(),
                max: 8
            })
        );
        assert_eq!(doc, json!({}));
    }

    #[test]
    fn test_check_indices_fresh_path() {
        let doc = json!({});
        let parents = keys(&["a", "b", "c"]);
        assert_eq!(
            check_indices(&doc, &parents, &Segment::from("9"), 8),
            Err(DsetError::IndexTooLarge {
                segment: "9".to_string(),
                max: 8
            })
        );
        assert!(check_indices(&doc, &parents, &Segment::from("8"), 8).is_ok());
        // Non-numeric keys under fresh containers always select objects.
        assert!(check_indices(&doc, &parents, &Segment::from("01"), 8).is_ok());
    }

    #[test]
    fn test_check_indices_existing_tree() {
        let doc = json!({"list": [0, {"o": 1}], "map": {"7": 1}, "s": 1});
        assert!(check_indices(&doc, &keys(&["list", "1"]), &Segment::from("o"), 8).is_ok());
        assert_eq!(
            check_indices(&doc, &keys(&["list"]), &Segment::from("name"), 8),
            Err(DsetError::InvalidIndex {
                segment: "name".to_string()
            })
        );
        // Numeric keys inside an existing object are plain keys.
        assert!(check_indices(&doc, &keys(&["map"]), &Segment::from("99"), 8).is_ok());
        // A scalar is replaced by a fresh container, so its index is bounded.
        assert!(check_indices(&doc, &keys(&["s"]), &Segment::from("99"), 8).is_err());
    }
}
