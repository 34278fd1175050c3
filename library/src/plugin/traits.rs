use crate::error::LibraryError;
use crate::model::socket_value::{SocketValue, SocketValues};
use crate::plugin::node_types::NodeTypeDefinition;

pub trait Plugin: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> String;
    fn version(&self) -> (u32, u32, u32);
    fn impl_type(&self) -> String {
        "Native".to_string()
    }
}

/// A package of node types plus their evaluation entry point.
pub trait NodePlugin: Plugin {
    /// Node type definitions this plugin contributes to the host.
    fn node_types(&self) -> Vec<NodeTypeDefinition>;

    /// Evaluate one node. `inputs` holds the value of each connected input
    /// socket; a bypassed socket is absent or `SocketValue::None`. The
    /// returned values follow the definition's output socket order.
    fn evaluate(
        &self,
        type_id: &str,
        inputs: &SocketValues,
    ) -> Result<Vec<SocketValue>, LibraryError>;
}
