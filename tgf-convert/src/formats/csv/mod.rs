//! CSV tabular format
//!
//! One header row, then one row per node and one row per edge. All fields
//! are double-quoted; embedded quotes are not escaped, matching the
//! original tgftools output byte for byte.
//!
//! ```text
//! "type","id_from","name_to","label"
//! "node","1","Alice",""
//! "edge","1","2","hello"
//! ```

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use tgf_parser::TgfModel;

pub use serializer::to_csv;

/// Format implementation for the CSV tabular output
pub struct CsvFormat;

impl Format for CsvFormat {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "CSV rows, one per node and per edge"
    }

    fn file_extension(&self) -> &str {
        ".csv"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_csv(model))
    }
}
