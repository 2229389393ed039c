use tgf_parser::TgfModel;

/// Serialize a model to the indentation-based YAML records.
pub fn to_yaml(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("## YAML Template.\n---\n");
    output.push_str("nodes:\n");
    for node in model.nodes() {
        output.push_str("  -\n");
        output.push_str(&format!("    id: \"{}\"\n    name: \"{}\"\n", node.id, node.name));
    }
    output.push_str("edges:\n");
    for edge in model.edges() {
        output.push_str("  -\n");
        output.push_str(&format!(
            "    from: \"{}\"\n    to: \"{}\"\n    label: \"{}\"\n",
            edge.from, edge.to, edge.label
        ));
    }
    output
}
