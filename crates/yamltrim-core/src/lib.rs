//! # yamltrim-core
//!
//! Recursively prune empty values from YAML documents.
//!
//! A value is empty when it is `null`, `false`, `0`, `0.0`, `""`, or a
//! sequence/mapping whose children are all empty. Trimming removes empty
//! values from their containers bottom-up, so a container that loses all of
//! its children disappears too.
//!
//! ## Quick start
//!
//! ```rust
//! use yamltrim_core::trim_yaml;
//!
//! let yaml = "name: Alice\nnickname: \"\"\nscores: [0, 95]\nflags: {admin: false}\n";
//! let trimmed = trim_yaml(yaml).unwrap();
//! assert_eq!(trimmed, "name: Alice\nscores:\n- 95\n");
//! ```
//!
//! ## Modules
//!
//! - [`mod@trim`] — the emptiness predicate and the trimming transform
//! - [`decoder`] — YAML string → [`Value`] documents
//! - [`encoder`] — trimmed documents → YAML or JSON string
//! - [`error`] — Error types for decode/encode failures
//! - [`types`] — the [`Value`] tree

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod trim;
pub mod types;

pub use decoder::{decode, decode_documents};
pub use encoder::{encode, encode_documents, encode_json, encode_json_documents};
pub use error::TrimError;
pub use trim::{
    is_empty_leaf, trim, trim_documents, trim_owned, trim_with_stats, trim_yaml, TrimStats,
};
pub use types::Value;
