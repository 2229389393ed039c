//! JSON object-notation format
//!
//! A single object with a `nodes` array and an `edges` array. The exact
//! line layout of the original tgftools output is reproduced, including
//! the absence of string escaping — ids, names and labels are emitted
//! verbatim between quotes.
//!
//! ```text
//! {
//! "nodes": [
//! {"id":"1","name":"Alice"},
//! {"id":"2","name":"Bob"}
//! ],
//! "edges": [
//! {"from":"1","to":"2","label":"hello"}
//! ]
//! }
//! ```

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use tgf_parser::TgfModel;

pub use serializer::to_json;

/// Format implementation for the JSON object-notation output
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON object with nodes and edges arrays"
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_json(model))
    }
}
