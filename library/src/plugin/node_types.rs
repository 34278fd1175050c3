//! Node type definitions for the data-flow graph.

use crate::model::socket::SocketDefinition;

/// Category of a node type, used for grouping in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Image operations (select, route, channel ops)
    Image,
    /// Generator nodes (solid color, noise, etc.)
    Generator,
    /// Logic/control flow (switch, compare, etc.)
    Logic,
    /// Data sources (constants, strings)
    Data,
    /// Plugin-defined custom category
    Custom,
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeCategory::Image => "Image",
            NodeCategory::Generator => "Generator",
            NodeCategory::Logic => "Logic",
            NodeCategory::Data => "Data",
            NodeCategory::Custom => "Custom",
        };
        write!(f, "{}", s)
    }
}

/// Definition of a node type, registered in the PluginManager.
///
/// This describes what a node of this type looks like: its sockets and
/// metadata. The host instantiates nodes from it and routes socket values
/// back through the owning plugin's `evaluate`.
#[derive(Debug, Clone)]
pub struct NodeTypeDefinition {
    /// Unique type identifier (e.g. "image.selector")
    pub type_id: String,
    /// Human-readable name (e.g. "Image Bypasser")
    pub display_name: String,
    /// Category for grouping in the UI
    pub category: NodeCategory,
    /// Description shown in tooltips
    pub description: String,
    /// Input socket definitions
    pub inputs: Vec<SocketDefinition>,
    /// Output socket definitions
    pub outputs: Vec<SocketDefinition>,
}

impl NodeTypeDefinition {
    pub fn new(type_id: &str, display_name: &str, category: NodeCategory) -> Self {
        Self {
            type_id: type_id.to_string(),
            display_name: display_name.to_string(),
            category,
            description: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<SocketDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<SocketDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Input socket definition by name.
    pub fn input(&self, name: &str) -> Option<&SocketDefinition> {
        self.inputs.iter().find(|s| s.name == name)
    }

    /// Output socket definition by name.
    pub fn output(&self, name: &str) -> Option<&SocketDefinition> {
        self.outputs.iter().find(|s| s.name == name)
    }
}
