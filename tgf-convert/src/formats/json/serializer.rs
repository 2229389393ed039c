use tgf_parser::TgfModel;

/// Serialize a model to the fixed-shape JSON object notation.
pub fn to_json(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("{\n");

    output.push_str("\"nodes\": [\n");
    for (i, node) in model.nodes().iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        output.push_str(&format!(
            "{{\"id\":\"{}\",\"name\":\"{}\"}}",
            node.id, node.name
        ));
    }
    output.push_str("\n],\n");

    output.push_str("\"edges\": [\n");
    for (i, edge) in model.edges().iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        output.push_str(&format!(
            "{{\"from\":\"{}\",\"to\":\"{}\",\"label\":\"{}\"}}",
            edge.from, edge.to, edge.label
        ));
    }
    output.push_str("\n]\n");

    output.push_str("}\n");
    output
}
