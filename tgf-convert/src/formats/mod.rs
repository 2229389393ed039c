//! Format implementations
//!
//! This module contains all format implementations that render a TGF model
//! into its textual representations.

pub mod csv;
pub mod datalog;
pub mod json;
pub mod puml;
pub mod yaml;

pub use csv::CsvFormat;
pub use datalog::{DatalogPropertyFormat, DatalogValueFormat};
pub use json::JsonFormat;
pub use puml::{PumlMindmapFormat, PumlNodeFormat, PumlWbsFormat};
pub use yaml::YamlFormat;

/// Blank for label-omission purposes: empty after whitespace trim.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
