//! Encoders for trimmed documents.
//!
//! A trimmed document is an `Option<Value>`: `None` means the whole document
//! was pruned away and is written as the null document (`null`). Formatting
//! (block vs. flow style, quoting) is left to `serde_yaml` and `serde_json`;
//! mapping order is preserved because [`Value`] serializes its entries in
//! insertion order.

use crate::error::Result;
use crate::types::Value;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Encode one trimmed document as YAML. The result always ends in `\n`.
///
/// # Examples
///
/// ```
/// use yamltrim_core::{encode, Value};
///
/// assert_eq!(encode(None).unwrap(), "null\n");
/// let doc = Value::Mapping(vec![("a".into(), "b".into())]);
/// assert_eq!(encode(Some(&doc)).unwrap(), "a: b\n");
/// ```
pub fn encode(doc: Option<&Value>) -> Result<String> {
    match doc {
        Some(value) => Ok(serde_yaml::to_string(value)?),
        None => Ok(serde_yaml::to_string(&Value::Null)?),
    }
}

/// Encode a stream of trimmed documents as YAML, separated by `---`.
///
/// A single document is written without a separator, so a one-document
/// stream encodes exactly like [`encode`].
pub fn encode_documents(docs: &[Option<Value>]) -> Result<String> {
    let mut out = String::new();
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            out.push_str(DOCUMENT_SEPARATOR);
        }
        out.push_str(&encode(doc.as_ref())?);
    }
    Ok(out)
}

/// Encode one trimmed document as JSON, with no trailing newline.
///
/// Absent encodes as `null`. NaN and infinities have no JSON form and are
/// written as `null` by `serde_json`.
pub fn encode_json(doc: Option<&Value>, pretty: bool) -> Result<String> {
    let value = doc.unwrap_or(&Value::Null);
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Encode a stream of trimmed documents as JSON, one document per entry,
/// each followed by a newline.
pub fn encode_json_documents(docs: &[Option<Value>], pretty: bool) -> Result<String> {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&encode_json(doc.as_ref(), pretty)?);
        out.push('\n');
    }
    Ok(out)
}
