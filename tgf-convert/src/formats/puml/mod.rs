//! PlantUML diagram formats
//!
//! Three formats share this module: the flat node diagram (`puml`) and the
//! two outline diagrams (`puml-mindmap`, `puml-wbs`). The outlines share
//! one serialization algorithm driven by the node level mapping and differ
//! only in their start/end markers.
//!
//! ## Example (flat)
//!
//! ```text
//! @startuml
//!
//! ' nodes
//! node "Alice" as 1
//! node "Bob" as 2
//! ' edges
//! 1 --> 2 : hello
//!
//! @enduml
//! ```

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use tgf_parser::TgfModel;

pub use serializer::{to_mindmap_diagram, to_node_diagram, to_wbs_diagram};

/// Format implementation for the flat PlantUML node diagram
pub struct PumlNodeFormat;

impl Format for PumlNodeFormat {
    fn name(&self) -> &str {
        "puml"
    }

    fn description(&self) -> &str {
        "PlantUML node diagram"
    }

    fn file_extension(&self) -> &str {
        ".puml"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_node_diagram(model))
    }
}

/// Format implementation for the PlantUML mindmap outline
pub struct PumlMindmapFormat;

impl Format for PumlMindmapFormat {
    fn name(&self) -> &str {
        "puml-mindmap"
    }

    fn description(&self) -> &str {
        "PlantUML mindmap diagram, nodes nested by hierarchy level"
    }

    fn file_extension(&self) -> &str {
        ".puml"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_mindmap_diagram(model))
    }
}

/// Format implementation for the PlantUML work-breakdown outline
pub struct PumlWbsFormat;

impl Format for PumlWbsFormat {
    fn name(&self) -> &str {
        "puml-wbs"
    }

    fn description(&self) -> &str {
        "PlantUML work breakdown structure, nodes nested by hierarchy level"
    }

    fn file_extension(&self) -> &str {
        ".puml"
    }

    fn serialize(&self, model: &TgfModel) -> Result<String, FormatError> {
        Ok(to_wbs_diagram(model))
    }
}
