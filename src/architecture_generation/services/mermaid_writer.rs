use crate::architecture_generation::domain::{Diagram, DiagramNode, EdgeStyle, NodeClass, NodeShape, Section};
use std::collections::HashSet;

const INDENT: &str = "  ";

/// Class applied to nodes touched by a requirement change.
const CHANGED_CLASS: &str = "classDef changed fill:#ffeb3b,stroke:#f57c00,stroke-width:3px;";

/// Flowchart keywords that cannot stand alone as a node id.
const RESERVED_IDS: &[&str] = &[
    "end", "graph", "flowchart", "subgraph", "direction", "style", "linkStyle", "classDef",
    "class", "click", "call", "href",
];

/// Mermaid-safe node id: every character outside `[A-Za-z0-9_]` becomes `_`,
/// and a keyword such as `end` gets a trailing `_`.
pub fn diagram_id(raw: &str) -> String {
    let mut id: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if id.is_empty() || RESERVED_IDS.contains(&id.as_str()) {
        id.push('_');
    }
    id
}

/// Escapes text for use inside a quoted Mermaid label.
fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;").replace(['\n', '\r'], " ")
}

/// MermaidWriter service serializing a [`Diagram`] as a Mermaid flowchart.
pub struct MermaidWriter;

impl MermaidWriter {
    pub fn write(diagram: &Diagram) -> String {
        let mut output = String::from("graph LR\n");

        for section in &diagram.sections {
            Self::write_section(&mut output, section, 1);
            output.push('\n');
        }

        for edge in &diagram.edges {
            let arrow = match edge.style {
                EdgeStyle::Solid => "-->",
                EdgeStyle::Dashed => "-.->",
            };
            output.push_str(&format!("{}{} {} {}\n", INDENT, edge.from, arrow, edge.to));
        }

        output.push('\n');
        for class in NodeClass::ALL {
            output.push_str(&format!("{}classDef {} {};\n", INDENT, class.name(), class.style()));
        }
        for node in diagram.nodes() {
            output.push_str(&format!("{}class {} {};\n", INDENT, node.id, node.class.name()));
        }

        output
    }

    fn write_section(output: &mut String, section: &Section, depth: usize) {
        let pad = INDENT.repeat(depth);
        output.push_str(&format!("{}subgraph \"{}\"\n", pad, escape_label(&section.label)));
        if let Some(direction) = section.direction {
            output.push_str(&format!("{}{}direction {}\n", pad, INDENT, direction));
        }
        for child in &section.children {
            Self::write_section(output, child, depth + 1);
        }
        for node in &section.nodes {
            output.push_str(&format!("{}{}{}\n", pad, INDENT, Self::node_declaration(node)));
        }
        output.push_str(&format!("{}end\n", pad));
    }

    fn node_declaration(node: &DiagramNode) -> String {
        let label = escape_label(&node.label);
        match node.shape {
            NodeShape::Rectangle => format!("{}[\"{}\"]", node.id, label),
            NodeShape::Parallelogram => format!("{}[/\"{}\"/]", node.id, label),
        }
    }

    /// Appends a `changed` class and assigns it to every id in `changed_ids`.
    /// Ids are sanitized the same way node ids are; duplicates are dropped.
    pub fn highlight(diagram_text: &str, changed_ids: &[String]) -> String {
        let mut output = String::from(diagram_text);
        if !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&format!("\n{}{}\n", INDENT, CHANGED_CLASS));

        let mut seen = HashSet::new();
        for id in changed_ids {
            let id = diagram_id(id);
            if seen.insert(id.clone()) {
                output.push_str(&format!("{}class {} changed;\n", INDENT, id));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture_generation::domain::{Edge, Layer};

    fn sample() -> Diagram {
        let mut app = Section::new("Application Layer");
        app.nodes.push(DiagramNode::new(
            "app_main",
            "Main \"Control\" App",
            NodeShape::Rectangle,
            NodeClass::Module(Layer::Application),
        ));
        let mut software = Section::new("Software Architecture").with_direction("TB");
        software.children.push(app);

        let mut hardware = Section::new("Hardware Components").with_direction("TB");
        hardware
            .nodes
            .push(DiagramNode::new("hw1", "IMU", NodeShape::Parallelogram, NodeClass::Hardware));
        hardware.nodes.push(DiagramNode::placeholder(
            "more_hw_sensor",
            "... +2 more sensor",
            NodeShape::Parallelogram,
            2,
        ));

        Diagram {
            sections: vec![software, hardware],
            edges: vec![Edge::solid("app_main", "hw1"), Edge::dashed("app_main", "hw1")],
        }
    }

    #[test]
    fn test_diagram_id_sanitizes() {
        assert_eq!(diagram_id("drv_hw1"), "drv_hw1");
        assert_eq!(diagram_id("temp-sensor.1 a"), "temp_sensor_1_a");
    }

    #[test]
    fn test_diagram_id_escapes_keywords() {
        assert_eq!(diagram_id("end"), "end_");
        assert_eq!(diagram_id("class"), "class_");
        assert_eq!(diagram_id(""), "_");
        assert_eq!(diagram_id("End"), "End");
        assert_eq!(diagram_id("endpoint"), "endpoint");
        assert_eq!(diagram_id(&diagram_id("end")), "end_");
    }

    #[test]
    fn test_keyword_node_does_not_close_subgraph() {
        let mut diagram = Diagram::default();
        let mut section = Section::new("Hardware Components");
        section.nodes.push(DiagramNode::new(
            diagram_id("end"),
            "Endpoint",
            NodeShape::Parallelogram,
            NodeClass::Hardware,
        ));
        diagram.sections.push(section);

        let text = MermaidWriter::write(&diagram);

        assert!(text.contains("    end_[/\"Endpoint\"/]\n"));
        assert!(!text.lines().any(|l| l.trim_start().starts_with("end[")));
        assert!(text.contains("  class end_ hwClass;\n"));
    }

    #[test]
    fn test_escape_label_quotes_and_newlines() {
        assert_eq!(escape_label("a \"b\"\nc"), "a #quot;b#quot; c");
    }

    #[test]
    fn test_write_structure() {
        let text = MermaidWriter::write(&sample());
        assert!(text.starts_with("graph LR\n"));
        assert!(text.contains("  subgraph \"Software Architecture\"\n    direction TB\n"));
        assert!(text.contains("    subgraph \"Application Layer\"\n      app_main[\"Main #quot;Control#quot; App\"]\n    end\n"));
        assert!(text.contains("    hw1[/\"IMU\"/]\n"));
        assert!(text.contains("  app_main --> hw1\n"));
        assert!(text.contains("  app_main -.-> hw1\n"));
        assert!(text.contains("  class more_hw_sensor moreClass;\n"));
        assert!(text.contains("  class app_main appClass;\n"));
    }

    #[test]
    fn test_subgraphs_are_balanced_and_quotes_even() {
        let text = MermaidWriter::write(&sample());
        let opens = text.lines().filter(|l| l.trim_start().starts_with("subgraph ")).count();
        let ends = text.lines().filter(|l| l.trim() == "end").count();
        assert_eq!(opens, ends);
        for line in text.lines() {
            assert_eq!(line.matches('"').count() % 2, 0, "unbalanced quotes: {}", line);
        }
    }

    #[test]
    fn test_all_class_definitions_emitted() {
        let text = MermaidWriter::write(&Diagram::default());
        for class in NodeClass::ALL {
            assert!(text.contains(&format!("classDef {} ", class.name())));
        }
    }

    #[test]
    fn test_highlight_dedupes_and_sanitizes() {
        let ids = vec!["app_main".to_string(), "drv_a-b".to_string(), "app_main".to_string()];
        let text = MermaidWriter::highlight("graph LR", &ids);
        assert!(text.contains("classDef changed"));
        assert_eq!(text.matches("class app_main changed;").count(), 1);
        assert!(text.contains("class drv_a_b changed;"));
    }

    #[test]
    fn test_highlight_with_no_ids_only_adds_class() {
        let text = MermaidWriter::highlight("graph LR\n", &[]);
        assert!(text.contains("classDef changed"));
        assert!(!text.contains(" changed;\n  class"));
    }
}
