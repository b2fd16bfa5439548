//! Error types for decoding and encoding. Trimming itself cannot fail.

use thiserror::Error;

/// Errors that can occur while decoding or encoding documents.
#[derive(Error, Debug)]
pub enum TrimError {
    /// The input was not valid YAML, exceeded the parser's nesting limit,
    /// or the YAML emitter rejected the output tree.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed (encoding path only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A mapping key was a sequence or mapping, which has no string form.
    #[error("unsupported mapping key: {kind} keys cannot be represented as strings")]
    UnsupportedKey { kind: &'static str },

    /// Two different YAML keys rendered to the same string (e.g. `1` and `"1"`).
    #[error("duplicate mapping key after string conversion: {0:?}")]
    DuplicateKey(String),
}

/// Convenience alias used throughout yamltrim-core.
pub type Result<T> = std::result::Result<T, TrimError>;
