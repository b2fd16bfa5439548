//! YAML decoder -- converts YAML text into [`Value`] trees.
//!
//! Parsing is delegated to `serde_yaml`, which resolves scalar typing
//! (YAML 1.2 core schema), quoting, anchors and aliases. This module narrows
//! its `serde_yaml::Value` into the closed [`Value`] enum:
//!
//! - Numbers that fit `i64` become `Integer`; everything else becomes `Float`.
//! - Merge keys (`<<: *base`) are applied, so merged entries appear as
//!   ordinary keys of the mapping.
//! - Tags (`!foo bar`) are dropped and the tagged content is decoded as-is.
//! - Mapping keys must be strings. Scalar keys (`1:`, `true:`, `~:`) are
//!   rendered in their plain YAML form; sequence and mapping keys are
//!   rejected.
//!
//! `serde_yaml` enforces a nesting limit while parsing, so every tree that
//! comes out of here is shallow enough for the recursive trimmer.

use std::collections::HashSet;

use serde::Deserialize;
use serde_yaml::{Mapping, Number, Value as Yaml};
use tracing::debug;

use crate::error::{Result, TrimError};
use crate::types::Value;

/// Decode every document in a YAML stream.
///
/// Documents are separated by `---`. An input with no documents at all
/// (empty, or only comments) decodes to a single `Null` document, the same
/// thing a plain unmarshal of empty input produces. A trailing `---` with
/// nothing after it does not add an extra null document.
///
/// # Errors
///
/// Returns [`TrimError::Yaml`] for malformed YAML, and
/// [`TrimError::UnsupportedKey`] / [`TrimError::DuplicateKey`] for mappings
/// whose keys cannot be turned into unique strings.
pub fn decode_documents(yaml: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(yaml) {
        let mut raw = Yaml::deserialize(document)?;
        raw.apply_merge()?;
        documents.push(from_yaml(raw)?);
    }
    if documents.len() > 1 && documents.last() == Some(&Value::Null) {
        documents.pop();
    }
    if documents.is_empty() {
        documents.push(Value::Null);
    }
    Ok(documents)
}

/// Decode the first document of a YAML stream.
///
/// # Examples
///
/// ```
/// use yamltrim_core::{decode, Value};
///
/// let value = decode("a: 1\nb: [x, 0.5]").unwrap();
/// assert_eq!(value.get("a"), Some(&Value::Integer(1)));
/// ```
pub fn decode(yaml: &str) -> Result<Value> {
    Ok(decode_documents(yaml)?
        .into_iter()
        .next()
        .unwrap_or(Value::Null))
}

fn from_yaml(raw: Yaml) -> Result<Value> {
    Ok(match raw {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => from_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(map) => from_mapping(map)?,
        Yaml::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn from_number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Integer(i);
    }
    // Integers above i64::MAX don't fit the native integer; keep their
    // magnitude as a float rather than failing the whole document.
    if let Some(u) = n.as_u64() {
        return Value::Float(u as f64);
    }
    Value::Float(n.as_f64().unwrap_or(f64::NAN))
}

fn from_mapping(map: Mapping) -> Result<Value> {
    let mut seen = HashSet::with_capacity(map.len());
    let mut entries = Vec::with_capacity(map.len());
    for (key, child) in map {
        let key = key_to_string(key)?;
        if !seen.insert(key.clone()) {
            return Err(TrimError::DuplicateKey(key));
        }
        entries.push((key, from_yaml(child)?));
    }
    Ok(Value::Mapping(entries))
}

/// Render a mapping key as a string.
fn key_to_string(key: Yaml) -> Result<String> {
    let rendered = match key {
        Yaml::String(s) => return Ok(s),
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => return key_to_string(tagged.value),
        complex @ (Yaml::Sequence(_) | Yaml::Mapping(_)) => {
            let kind = from_yaml(complex)?.kind();
            return Err(TrimError::UnsupportedKey { kind });
        }
    };
    debug!(key = %rendered, "coerced non-string mapping key");
    Ok(rendered)
}
