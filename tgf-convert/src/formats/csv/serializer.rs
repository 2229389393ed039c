use tgf_parser::TgfModel;

/// Serialize a model to quoted CSV rows.
pub fn to_csv(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("\"type\",\"id_from\",\"name_to\",\"label\"\n");
    for node in model.nodes() {
        output.push_str(&format!("\"node\",\"{}\",\"{}\",\"\"\n", node.id, node.name));
    }
    for edge in model.edges() {
        output.push_str(&format!(
            "\"edge\",\"{}\",\"{}\",\"{}\"\n",
            edge.from, edge.to, edge.label
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgf_parser::TgfParser;

    #[test]
    fn test_csv_simple() {
        let model = TgfParser::new().parse_str("1 A\n2 B\n#\n1 2 a\n").unwrap();
        assert_eq!(
            to_csv(&model),
            "\"type\",\"id_from\",\"name_to\",\"label\"\n\
             \"node\",\"1\",\"A\",\"\"\n\
             \"node\",\"2\",\"B\",\"\"\n\
             \"edge\",\"1\",\"2\",\"a\"\n"
        );
    }

    #[test]
    fn test_csv_empty_model_is_header_only() {
        let model = TgfParser::new().parse_str("").unwrap();
        assert_eq!(to_csv(&model), "\"type\",\"id_from\",\"name_to\",\"label\"\n");
    }

    #[test]
    fn test_csv_blank_edge_label_stays_quoted_empty() {
        let model = TgfParser::new().parse_str("1 A\n#\n1 1\n").unwrap();
        assert!(to_csv(&model).ends_with("\"edge\",\"1\",\"1\",\"\"\n"));
    }
}
