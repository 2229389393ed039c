//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for serializing a
//! parsed TGF model; parsing lives in the tgf-parser crate.

use crate::error::FormatError;
use tgf_parser::TgfModel;

/// Trait for output formats
///
/// Implementors render a model into one textual representation. Serializers
/// hold no mutable state, so a format may be invoked repeatedly and
/// concurrently on the same model.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "puml", "csv", "datalog-value")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extension for outputs of this format, including the dot
    fn file_extension(&self) -> &str;

    /// Serialize a model into source text
    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError>;
}
