//! Datalog fact formats
//!
//! Two schemas over the same comment frame (`% start` .. `% end`):
//!
//! - value schema: one ground fact per node and per edge, with a separate
//!   `edgeLabel` fact only for labelled edges:
//!
//!   ```text
//!   % start
//!   % nodes
//!   node("1","Alice").
//!   % edges
//!   edge("1", "2").
//!   edgeLabel("1", "2", "hello").
//!
//!   % end
//!   ```
//!
//! - property schema: everything as `tgfdata(subject, property, value)`
//!   triples, with a composite `from-to` id identifying each edge:
//!
//!   ```text
//!   % start
//!   % nodes
//!   tgfdata("1", instanceof, "node").
//!   tgfdata("1", name, "Alice").
//!   % edges
//!   tgfdata("1", edge, "2").
//!   tgfdata("1-2", instanceof, "edge").
//!   tgfdata("1-2", from, "1").
//!   tgfdata("1-2", to, "2").
//!   tgfdata("1-2", label, "hello").
//!
//!   % end
//!   ```

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use tgf_parser::TgfModel;

pub use serializer::{to_property_schema, to_value_schema};

/// Format implementation for the Datalog value schema
pub struct DatalogValueFormat;

impl Format for DatalogValueFormat {
    fn name(&self) -> &str {
        "datalog-value"
    }

    fn description(&self) -> &str {
        "Datalog facts, one predicate per node and edge"
    }

    fn file_extension(&self) -> &str {
        ".dl"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_value_schema(model))
    }
}

/// Format implementation for the Datalog property schema
pub struct DatalogPropertyFormat;

impl Format for DatalogPropertyFormat {
    fn name(&self) -> &str {
        "datalog-property"
    }

    fn description(&self) -> &str {
        "Datalog tgfdata property triples for nodes and edges"
    }

    fn file_extension(&self) -> &str {
        ".dl"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_property_schema(model))
    }
}
