//! YAML record format
//!
//! Indentation-based records, one block per node and per edge, prefixed by
//! a template-marker comment and a document-start marker. Field values are
//! double-quoted verbatim, without escaping.
//!
//! ```text
//! ## YAML Template.
//! ---
//! nodes:
//!   -
//!     id: "1"
//!     name: "Alice"
//! edges:
//!   -
//!     from: "1"
//!     to: "2"
//!     label: "hello"
//! ```

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use tgf_parser::TgfModel;

pub use serializer::to_yaml;

/// Format implementation for the YAML record output
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML document with node and edge records"
    }

    fn file_extension(&self) -> &str {
        ".yaml"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_yaml(model))
    }
}
