//! Emptiness pruning -- drop every empty value from a document tree.
//!
//! A leaf is empty when it is `null`, `false`, `0`, `0.0` (either sign) or
//! `""`. A sequence or mapping is empty when nothing survives trimming its
//! children, so emptiness propagates upward through any depth in a single
//! post-order pass:
//!
//! ```text
//! top:                         top:
//!   middle:                      other:
//!     deep: ""          ==>        - two
//!   other:
//!     - ""
//!     - two
//! ```
//!
//! Absent results are modeled as `Option::None`, never as [`Value::Null`]:
//! `None` means "omit this slot from the parent", and it never gets stored
//! inside a surviving container.

use tracing::debug;

use crate::error::Result;
use crate::types::Value;

/// Node counts before and after a trim, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimStats {
    pub nodes_before: usize,
    pub nodes_after: usize,
}

impl TrimStats {
    fn measure(nodes_before: usize, trimmed: Option<&Value>) -> Self {
        Self {
            nodes_before,
            nodes_after: trimmed.map_or(0, Value::node_count),
        }
    }

    /// Number of nodes removed by the trim.
    pub fn removed(&self) -> usize {
        self.nodes_before - self.nodes_after
    }
}

/// Whether a leaf value counts as empty.
///
/// Containers always return `false` here: they are judged by how many
/// children survive trimming, not by this predicate.
///
/// # Examples
///
/// ```
/// use yamltrim_core::{is_empty_leaf, Value};
///
/// assert!(is_empty_leaf(&Value::Float(-0.0)));
/// assert!(!is_empty_leaf(&Value::String(" ".into())));
/// assert!(!is_empty_leaf(&Value::Float(f64::NAN)));
/// ```
pub fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Integer(n) => *n == 0,
        // -0.0 == 0.0 and NaN != 0.0, so this keeps NaN and the infinities.
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => false,
    }
}

/// Return a trimmed copy of `value`, or `None` if nothing survives.
///
/// The input is left untouched; surviving leaves are cloned into a freshly
/// built tree.
///
/// # Examples
///
/// ```
/// use yamltrim_core::{trim, Value};
///
/// let value = Value::Sequence(vec!["".into(), "one".into(), 0i64.into(), "two".into()]);
/// assert_eq!(trim(&value), Some(Value::Sequence(vec!["one".into(), "two".into()])));
/// assert_eq!(trim(&Value::Mapping(vec![("a".into(), Value::Null)])), None);
/// ```
pub fn trim(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) => {
            (!is_empty_leaf(value)).then(|| value.clone())
        }
        Value::Sequence(items) => non_empty(items.iter().filter_map(trim).collect())
            .map(Value::Sequence),
        Value::Mapping(entries) => non_empty(
            entries
                .iter()
                .filter_map(|(key, child)| trim(child).map(|child| (key.clone(), child)))
                .collect(),
        )
        .map(Value::Mapping),
    }
}

/// Same as [`trim`], but consumes `value` and reuses its strings and
/// vectors instead of cloning them.
pub fn trim_owned(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        leaf @ (Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_)) => {
            (!is_empty_leaf(&leaf)).then_some(leaf)
        }
        Value::Sequence(items) => {
            non_empty(items.into_iter().filter_map(trim_owned).collect()).map(Value::Sequence)
        }
        Value::Mapping(entries) => non_empty(
            entries
                .into_iter()
                .filter_map(|(key, child)| trim_owned(child).map(|child| (key, child)))
                .collect(),
        )
        .map(Value::Mapping),
    }
}

/// [`trim`] plus node counts of the input and the result. An absent result
/// counts as zero nodes.
pub fn trim_with_stats(value: &Value) -> (Option<Value>, TrimStats) {
    let trimmed = trim(value);
    let stats = TrimStats::measure(value.node_count(), trimmed.as_ref());
    (trimmed, stats)
}

/// Decode every document in `yaml` and trim each one.
///
/// Each entry is `None` when its document trimmed away entirely.
///
/// # Errors
///
/// Returns an error if the input cannot be decoded (see
/// [`crate::decode_documents`]).
pub fn trim_documents(yaml: &str) -> Result<Vec<Option<Value>>> {
    let documents = crate::decoder::decode_documents(yaml)?;
    Ok(documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| {
            let kind = document.kind();
            let nodes_before = document.node_count();
            let trimmed = trim_owned(document);
            let stats = TrimStats::measure(nodes_before, trimmed.as_ref());
            debug!(
                document = index,
                kind,
                nodes_before = stats.nodes_before,
                nodes_after = stats.nodes_after,
                removed = stats.removed(),
                "trimmed document"
            );
            trimmed
        })
        .collect())
}

/// Trim a YAML stream and encode the result back to YAML.
///
/// This is a convenience function combining [`trim_documents`] with
/// [`crate::encode_documents`].
///
/// # Errors
///
/// Returns an error if the input is not valid YAML or if encoding fails.
///
/// # Examples
///
/// ```
/// use yamltrim_core::trim_yaml;
///
/// let yaml = "top:\n  middle:\n    deep: \"\"\n  other:\n  - \"\"\n  - two\n";
/// assert_eq!(trim_yaml(yaml).unwrap(), "top:\n  other:\n  - two\n");
/// assert_eq!(trim_yaml("a: \"\"").unwrap(), "null\n");
/// ```
pub fn trim_yaml(yaml: &str) -> Result<String> {
    let trimmed = trim_documents(yaml)?;
    crate::encoder::encode_documents(&trimmed)
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
