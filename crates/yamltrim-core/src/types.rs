//! The `Value` tree that the trimmer operates on.
//!
//! Decoding goes through `serde_yaml::Value` as the parser-facing
//! representation and is then narrowed into this closed enum, which has
//! exactly one variant per kind the trimmer distinguishes. Encoding goes the
//! other way through the `Serialize` impl below.

use serde::ser::{Serialize, Serializer};

/// A decoded document node.
///
/// Integers and floats are kept apart because their emptiness rules differ
/// (`0` vs `0.0`/`-0.0`). Mappings use `Vec<(String, Value)>` so that
/// insertion order survives trimming without depending on `IndexMap`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Short name of the variant, for log fields and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Number of nodes in this tree, counting containers and leaves alike.
    pub fn node_count(&self) -> usize {
        match self {
            Value::Sequence(items) => 1 + items.iter().map(Value::node_count).sum::<usize>(),
            Value::Mapping(entries) => {
                1 + entries.iter().map(|(_, v)| v.node_count()).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Look up a key in a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        Value::Mapping(vec![
            ("name".to_string(), Value::from("Alice")),
            (
                "tags".to_string(),
                Value::Sequence(vec![Value::from("a"), Value::Integer(2)]),
            ),
        ])
    }

    #[test]
    fn node_count_includes_containers() {
        assert_eq!(sample().node_count(), 5);
        assert_eq!(Value::Null.node_count(), 1);
    }

    #[test]
    fn get_finds_mapping_keys_only() {
        let value = sample();
        assert_eq!(value.get("name"), Some(&Value::from("Alice")));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::from("name").get("name"), None);
    }

    #[test]
    fn kind_names_each_variant() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Float(1.5).kind(), "float");
        assert_eq!(Value::Sequence(vec![]).kind(), "sequence");
        assert_eq!(Value::Mapping(vec![]).kind(), "mapping");
    }
}
