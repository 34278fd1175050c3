use std::sync::Arc;

use library::model::socket::{SocketDefinition, SocketKind};
use library::model::socket_value::{SocketValue, SocketValues};
use library::plugin::node_types::{NodeCategory, NodeTypeDefinition};
use library::plugin::traits::{NodePlugin, Plugin};
use library::plugin::PluginManager;
use library::LibraryError;

struct EchoPlugin;

impl Plugin for EchoPlugin {
    fn id(&self) -> &'static str {
        "echo_plugin"
    }

    fn name(&self) -> String {
        "Echo".to_string()
    }

    fn version(&self) -> (u32, u32, u32) {
        (0, 1, 0)
    }
}

impl NodePlugin for EchoPlugin {
    fn node_types(&self) -> Vec<NodeTypeDefinition> {
        vec![NodeTypeDefinition::new("test.echo", "Echo", NodeCategory::Data)
            .with_inputs(vec![SocketDefinition::input(
                "value",
                "Value",
                SocketKind::String,
            )])
            .with_outputs(vec![SocketDefinition::output(
                "value",
                "Value",
                SocketKind::String,
            )])]
    }

    fn evaluate(
        &self,
        type_id: &str,
        inputs: &SocketValues,
    ) -> Result<Vec<SocketValue>, LibraryError> {
        if type_id != "test.echo" {
            return Err(LibraryError::Plugin(format!(
                "unknown node type '{}'",
                type_id
            )));
        }
        let value = inputs.get_str("value").unwrap_or_default().to_string();
        Ok(vec![SocketValue::String(value)])
    }
}

fn manager_with_echo() -> PluginManager {
    let _ = env_logger::builder().is_test(true).try_init();
    let manager = PluginManager::new();
    manager.register_node_plugin(Arc::new(EchoPlugin));
    manager
}

#[test]
fn test_registration_exposes_node_types() {
    let manager = manager_with_echo();

    assert_eq!(manager.get_node_type_ids(), vec!["test.echo".to_string()]);
    let def = manager.get_node_type("test.echo").expect("Missing node type");
    assert_eq!(def.display_name, "Echo");
    assert_eq!(def.category, NodeCategory::Data);

    let names = manager.get_node_display_names();
    assert_eq!(names.get("test.echo"), Some(&"Echo".to_string()));
}

#[test]
fn test_evaluate_dispatches_to_owning_plugin() {
    let manager = manager_with_echo();

    let inputs = SocketValues::new().with("value", SocketValue::String("hi".to_string()));
    let outputs = manager.evaluate("test.echo", &inputs).expect("evaluate failed");
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].as_str(), Some("hi"));
}

#[test]
fn test_evaluate_unknown_type_errors() {
    let manager = manager_with_echo();

    let result = manager.evaluate("test.missing", &SocketValues::new());
    assert!(matches!(result, Err(LibraryError::Plugin(_))));
}

#[test]
fn test_plugin_info_listing() {
    let manager = manager_with_echo();

    let plugins = manager.get_all_plugins();
    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].id, "echo_plugin");
    assert_eq!(plugins[0].version, "0.1.0");
    assert_eq!(plugins[0].impl_type, "Native");
}
