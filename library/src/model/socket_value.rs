//! SocketValue — the typed value flowing through a socket at evaluation time.

use std::collections::HashMap;

use crate::model::image::ImageTensor;

/// The value carried by one socket during node evaluation.
///
/// Each variant corresponds to a `SocketKind` and holds the concrete
/// runtime value for that type.
#[derive(Clone, Debug)]
pub enum SocketValue {
    /// Image tensor data.
    Image(ImageTensor),
    /// Single floating-point number.
    Scalar(f64),
    /// Integer.
    Integer(i64),
    /// Boolean.
    Boolean(bool),
    /// Text string (also carries enum selections).
    String(String),
    /// No value / bypassed or unconnected socket.
    None,
}

impl SocketValue {
    /// Extract as integer, returning default if not numeric.
    pub fn as_integer(&self, default: i64) -> i64 {
        match self {
            SocketValue::Integer(v) => *v,
            SocketValue::Scalar(v) => *v as i64,
            _ => default,
        }
    }

    /// Extract as scalar, returning default if not numeric.
    pub fn as_scalar(&self, default: f64) -> f64 {
        match self {
            SocketValue::Scalar(v) => *v,
            SocketValue::Integer(v) => *v as f64,
            _ => default,
        }
    }

    /// Extract as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SocketValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as image tensor.
    pub fn into_image(self) -> Option<ImageTensor> {
        match self {
            SocketValue::Image(img) => Some(img),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SocketValue::None)
    }
}

/// Named socket values handed to a node's evaluation entry point.
///
/// A bypassed input is either absent from the map or present as
/// `SocketValue::None`; the lookup helpers treat both the same way.
#[derive(Clone, Debug, Default)]
pub struct SocketValues {
    values: HashMap<String, SocketValue>,
}

impl SocketValues {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert, for hosts and tests assembling inputs.
    pub fn with(mut self, name: &str, value: SocketValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn set(&mut self, name: &str, value: SocketValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&SocketValue> {
        self.values.get(name)
    }

    /// Image on the named socket, cloned out; `None` when bypassed.
    pub fn get_image(&self, name: &str) -> Option<ImageTensor> {
        match self.values.get(name) {
            Some(SocketValue::Image(img)) => Some(img.clone()),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_str())
    }

    pub fn get_integer_or(&self, name: &str, default: i64) -> i64 {
        self.values
            .get(name)
            .map(|v| v.as_integer(default))
            .unwrap_or(default)
    }
}
