//! Typed diagram records.
//!
//! The diagram builder decides *what* goes into a diagram by producing these
//! records; the Mermaid writer decides *how* it looks as text.

use super::Layer;

/// Visual class attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Module(Layer),
    Hardware,
    /// "+K more" placeholder standing in for hidden nodes.
    Collapsed,
}

impl NodeClass {
    /// Every class, in the order their definitions are emitted.
    pub const ALL: [NodeClass; 8] = [
        NodeClass::Module(Layer::Application),
        NodeClass::Module(Layer::Service),
        NodeClass::Module(Layer::Middleware),
        NodeClass::Module(Layer::Driver),
        NodeClass::Module(Layer::Hal),
        NodeClass::Module(Layer::Kernel),
        NodeClass::Hardware,
        NodeClass::Collapsed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NodeClass::Module(Layer::Application) => "appClass",
            NodeClass::Module(Layer::Service) => "serviceClass",
            NodeClass::Module(Layer::Middleware) => "middlewareClass",
            NodeClass::Module(Layer::Driver) => "driverClass",
            NodeClass::Module(Layer::Hal) => "halClass",
            NodeClass::Module(Layer::Kernel) => "kernelClass",
            NodeClass::Hardware => "hwClass",
            NodeClass::Collapsed => "moreClass",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            NodeClass::Module(Layer::Application) => {
                "fill:#e3f2fd,stroke:#1565c0,stroke-width:2px,color:#000"
            }
            NodeClass::Module(Layer::Service) => {
                "fill:#f3e5f5,stroke:#7b1fa2,stroke-width:2px,color:#000"
            }
            NodeClass::Module(Layer::Middleware) => {
                "fill:#e1f5fe,stroke:#0277bd,stroke-width:2px,color:#000"
            }
            NodeClass::Module(Layer::Driver) => {
                "fill:#fff3e0,stroke:#ef6c00,stroke-width:2px,color:#000"
            }
            NodeClass::Module(Layer::Hal) => {
                "fill:#e8f5e9,stroke:#2e7d32,stroke-width:2px,color:#000"
            }
            NodeClass::Module(Layer::Kernel) => {
                "fill:#fce4ec,stroke:#c2185b,stroke-width:2px,color:#000"
            }
            NodeClass::Hardware => {
                "fill:#f5f5f5,stroke:#424242,stroke-width:2px,stroke-dasharray: 5 5,color:#000"
            }
            NodeClass::Collapsed => {
                "fill:#fffde7,stroke:#f57f17,stroke-width:1px,font-style:italic,color:#666"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Software module: `id["label"]`
    Rectangle,
    /// Hardware part: `id[/"label"/]`
    Parallelogram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    pub class: NodeClass,
    /// Number of hidden items, set only on placeholders.
    pub hidden_count: Option<usize>,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shape: NodeShape, class: NodeClass) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
            class,
            hidden_count: None,
        }
    }

    pub fn placeholder(id: impl Into<String>, label: impl Into<String>, shape: NodeShape, hidden: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
            class: NodeClass::Collapsed,
            hidden_count: Some(hidden),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.hidden_count.is_some()
    }
}

/// A labelled group of nodes, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    /// Layout direction inside the section, e.g. `TB`.
    pub direction: Option<&'static str>,
    pub nodes: Vec<DiagramNode>,
    pub children: Vec<Section>,
}

impl Section {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            direction: None,
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_direction(mut self, direction: &'static str) -> Self {
        self.direction = Some(direction);
        self
    }

    fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a DiagramNode>) {
        out.extend(self.nodes.iter());
        for child in &self.children {
            child.collect_nodes(out);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
}

impl Edge {
    pub fn solid(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            style: EdgeStyle::Solid,
        }
    }

    pub fn dashed(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            style: EdgeStyle::Dashed,
        }
    }
}

/// A complete, render-ready diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    pub sections: Vec<Section>,
    pub edges: Vec<Edge>,
}

impl Diagram {
    /// All nodes in emission order, depth first.
    pub fn nodes(&self) -> Vec<&DiagramNode> {
        let mut out = Vec::new();
        for section in &self.sections {
            section.collect_nodes(&mut out);
        }
        out
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes().into_iter().find(|n| n.id == id)
    }

    pub fn placeholders(&self) -> Vec<&DiagramNode> {
        self.nodes().into_iter().filter(|n| n.is_placeholder()).collect()
    }

    pub fn section(&self, label: &str) -> Option<&Section> {
        fn find<'a>(sections: &'a [Section], label: &str) -> Option<&'a Section> {
            sections.iter().find_map(|s| {
                if s.label == label {
                    Some(s)
                } else {
                    find(&s.children, label)
                }
            })
        }
        find(&self.sections, label)
    }
}
