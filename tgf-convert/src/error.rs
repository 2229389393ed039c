//! Error types for format operations

use std::fmt;

/// Errors that can occur when selecting or running a format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under the requested name
    FormatNotFound(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => {
                write!(f, "Format '{}' not found", name)
            }
        }
    }
}

impl std::error::Error for FormatError {}
