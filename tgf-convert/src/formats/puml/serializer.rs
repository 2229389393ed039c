use crate::formats::is_blank;
use tgf_parser::{calculate_node_levels, TgfModel};

/// Serialize a model to a flat PlantUML node diagram.
pub fn to_node_diagram(model: &TgfModel) -> String {
    let mut output = String::new();
    output.push_str("@startuml\n\n");
    output.push_str("' nodes\n");
    for node in model.nodes() {
        output.push_str(&format!("node \"{}\" as {}\n", node.name, node.id));
    }
    output.push_str("' edges\n");
    for edge in model.edges() {
        if is_blank(&edge.label) {
            output.push_str(&format!("{} --> {}\n", edge.from, edge.to));
        } else {
            output.push_str(&format!("{} --> {} : {}\n", edge.from, edge.to, edge.label));
        }
    }
    output.push_str("\n@enduml\n");
    output
}

/// Serialize a model to a PlantUML mindmap.
pub fn to_mindmap_diagram(model: &TgfModel) -> String {
    to_outline_diagram(model, "@startmindmap", "@endmindmap")
}

/// Serialize a model to a PlantUML work breakdown structure.
pub fn to_wbs_diagram(model: &TgfModel) -> String {
    to_outline_diagram(model, "@startwbs", "@endwbs")
}

/// Shared outline algorithm for the mindmap and wbs formats.
///
/// The synthetic root renders as the literal `* root` line; every model
/// node renders one level below its mapped level (`level + 1` stars), in
/// ascending level order with insertion-order ties.
fn to_outline_diagram(model: &TgfModel, start_marker: &str, end_marker: &str) -> String {
    let levels = calculate_node_levels(model);

    let mut output = String::new();
    output.push_str(start_marker);
    output.push_str("\n\n");
    output.push_str("* root\n");

    for (id, level) in levels.by_level() {
        // The root entry has no model node and is never re-emitted.
        let Some(node) = model.node(id) else { continue };
        let stars = "*".repeat(level as usize + 1);
        output.push_str(&format!("{} {} {}\n", stars, node.id, node.name));
    }

    output.push('\n');
    output.push_str(end_marker);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgf_parser::TgfParser;

    fn parse(source: &str) -> TgfModel {
        TgfParser::new().parse_str(source).unwrap()
    }

    #[test]
    fn test_node_diagram_simple() {
        let model = parse("1 A\n2 B\n#\n1 2 a\n");
        assert_eq!(
            to_node_diagram(&model),
            "@startuml\n\
             \n\
             ' nodes\n\
             node \"A\" as 1\n\
             node \"B\" as 2\n\
             ' edges\n\
             1 --> 2 : a\n\
             \n\
             @enduml\n"
        );
    }

    #[test]
    fn test_node_diagram_omits_blank_label_clause() {
        let model = parse("1 A\n2 B\n#\n1 2\n");
        let output = to_node_diagram(&model);
        assert!(output.contains("1 --> 2\n"));
        assert!(!output.contains(" : "));
    }

    #[test]
    fn test_node_diagram_whitespace_label_counts_as_blank() {
        // A label that trims to nothing cannot survive parsing, but the
        // serializer contract is trim-based regardless of the source.
        let mut model = TgfModel::new();
        model.add_edge(tgf_parser::TgfEdge::new("1", "2", "  "));
        let output = to_node_diagram(&model);
        assert!(output.contains("1 --> 2\n"));
    }

    #[test]
    fn test_node_diagram_empty_model() {
        let model = parse("");
        assert_eq!(
            to_node_diagram(&model),
            "@startuml\n\n' nodes\n' edges\n\n@enduml\n"
        );
    }

    #[test]
    fn test_mindmap_simple() {
        let model = parse("1 A\n2 B\n#\n1 2 a\n");
        assert_eq!(
            to_mindmap_diagram(&model),
            "@startmindmap\n\
             \n\
             * root\n\
             ** 1 A\n\
             *** 2 B\n\
             \n\
             @endmindmap\n"
        );
    }

    #[test]
    fn test_wbs_simple() {
        let model = parse("1 A\n2 B\n#\n1 2 a\n");
        assert_eq!(
            to_wbs_diagram(&model),
            "@startwbs\n\
             \n\
             * root\n\
             ** 1 A\n\
             *** 2 B\n\
             \n\
             @endwbs\n"
        );
    }

    #[test]
    fn test_outline_orders_levels_with_stable_ties() {
        let model = parse("x X\ny Y\nz Z\n#\nx z deep\n");
        let output = to_mindmap_diagram(&model);
        let lines: Vec<_> = output.lines().collect();
        // root, then the two level-1 nodes in insertion order, then z.
        assert_eq!(
            lines,
            vec![
                "@startmindmap",
                "",
                "* root",
                "** x X",
                "** y Y",
                "*** z Z",
                "",
                "@endmindmap",
            ]
        );
    }

    #[test]
    fn test_outline_empty_model_renders_bare_root() {
        let model = parse("");
        assert_eq!(
            to_mindmap_diagram(&model),
            "@startmindmap\n\n* root\n\n@endmindmap\n"
        );
    }
}
