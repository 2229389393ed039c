use crate::formats::is_blank;
use tgf_parser::TgfModel;

/// Serialize a model to value-schema Datalog facts.
pub fn to_value_schema(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("% start\n");
    output.push_str("% nodes\n");
    for node in model.nodes() {
        output.push_str(&format!("node(\"{}\",\"{}\").\n", node.id, node.name));
    }
    output.push_str("% edges\n");
    for edge in model.edges() {
        output.push_str(&format!("edge(\"{}\", \"{}\").\n", edge.from, edge.to));
        if !is_blank(&edge.label) {
            output.push_str(&format!(
                "edgeLabel(\"{}\", \"{}\", \"{}\").\n",
                edge.from, edge.to, edge.label
            ));
        }
    }
    output.push_str("\n% end\n");
    output
}

/// Serialize a model to property-schema `tgfdata` triples.
///
/// Each edge is identified by the derived composite id `from-to`.
pub fn to_property_schema(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("% start\n");
    output.push_str("% nodes\n");
    for node in model.nodes() {
        output.push_str(&format!("tgfdata(\"{}\", instanceof, \"node\").\n", node.id));
        output.push_str(&format!("tgfdata(\"{}\", name, \"{}\").\n", node.id, node.name));
    }
    output.push_str("% edges\n");
    for edge in model.edges() {
        let edge_id = format!("{}-{}", edge.from, edge.to);
        output.push_str(&format!("tgfdata(\"{}\", edge, \"{}\").\n", edge.from, edge.to));
        output.push_str(&format!("tgfdata(\"{}\", instanceof, \"edge\").\n", edge_id));
        output.push_str(&format!("tgfdata(\"{}\", from, \"{}\").\n", edge_id, edge.from));
        output.push_str(&format!("tgfdata(\"{}\", to, \"{}\").\n", edge_id, edge.to));
        if !is_blank(&edge.label) {
            output.push_str(&format!(
                "tgfdata(\"{}\", label, \"{}\").\n",
                edge_id, edge.label
            ));
        }
    }
    output.push_str("\n% end\n");
    output
}
