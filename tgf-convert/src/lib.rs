//! Multi-format output for TGF models
//!
//!     This crate provides a uniform interface for rendering a parsed
//!     [`TgfModel`](tgf_parser::TgfModel) into the supported textual
//!     formats.
//!
//! Architecture
//!
//!     - Format trait: uniform serialization interface for all formats
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: one module per format family
//!
//!     This is a pure lib: it powers the tgf CLI but is shell agnostic; no
//!     code here writes to stdout, reads env vars or touches the
//!     filesystem. Callers hand in a model and get a string back.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Output fidelity
//!
//!     Every serializer reproduces the byte-exact line shapes of the
//!     original tgftools output, including the deliberate absence of any
//!     quote escaping in the csv/json/yaml renderings. That rules out
//!     delegating to serde serializers for the output path; they are still
//!     used in tests to validate that quote-free documents render to
//!     well-formed JSON and YAML.
//!
//!     All serializers are pure functions over `&TgfModel` and iterate
//!     nodes and edges in model insertion order. The outline formats
//!     (mindmap, wbs) additionally consult the level mapping and emit
//!     nodes in ascending level order with insertion-order ties.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
