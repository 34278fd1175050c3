//! Socket schema for node type definitions.

use serde::{Deserialize, Serialize};

use crate::model::property::PropertyValue;

/// Data type of a socket (Blender-style socket type).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocketKind {
    /// Image/texture data flow
    Image,
    /// Floating point scalar (f64)
    Scalar,
    /// Integer value (i64)
    Integer,
    /// Boolean value
    Boolean,
    /// Text string
    String,
    /// Enumeration selection
    Enum,
    /// Accepts any type (generic)
    Any,
}

/// Direction of a socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketDirection {
    Input,
    Output,
}

/// Host-enforced value constraint on an input socket.
#[derive(Clone, Debug, PartialEq)]
pub enum SocketConstraint {
    /// Integer sockets: inclusive range, stepped.
    IntegerRange { min: i64, max: i64, step: i64 },
    /// Enum sockets: the allowed choices.
    Choice { options: Vec<String> },
}

/// Definition of a socket on a node type.
#[derive(Clone, Debug)]
pub struct SocketDefinition {
    /// Internal name used for connections (e.g. "image1", "fallback_width")
    pub name: String,
    /// Display name shown in the UI (e.g. "Image 1", "Fallback Width")
    pub display_name: String,
    /// Whether this is an input or output socket
    pub direction: SocketDirection,
    /// Data type of this socket
    pub data_type: SocketKind,
    /// Optional inputs may be left unconnected; the host hands the node
    /// `SocketValue::None` (a bypassed upstream node looks the same).
    pub optional: bool,
    /// Default value when no connection is present (for input sockets)
    pub default_value: Option<PropertyValue>,
    /// Value constraint the host enforces in its UI
    pub constraint: Option<SocketConstraint>,
}

impl SocketDefinition {
    pub fn input(name: &str, display_name: &str, data_type: SocketKind) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: SocketDirection::Input,
            data_type,
            optional: false,
            default_value: None,
            constraint: None,
        }
    }

    pub fn output(name: &str, display_name: &str, data_type: SocketKind) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: SocketDirection::Output,
            data_type,
            optional: false,
            default_value: None,
            constraint: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, value: PropertyValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_range(mut self, min: i64, max: i64, step: i64) -> Self {
        self.constraint = Some(SocketConstraint::IntegerRange { min, max, step });
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.constraint = Some(SocketConstraint::Choice {
            options: options.iter().map(|s| s.to_string()).collect(),
        });
        self
    }
}
