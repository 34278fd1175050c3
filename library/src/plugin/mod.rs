pub mod manager;
pub mod node_types;
pub mod traits;

pub use manager::{NodePluginCreateFn, PluginInfo, PluginManager};
pub use node_types::{NodeCategory, NodeTypeDefinition};
pub use traits::{NodePlugin, Plugin};
