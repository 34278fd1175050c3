//! Plugin manager for registering, loading, and accessing node plugins.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use libloading::{Library, Symbol};
use log::{debug, warn};

use crate::error::LibraryError;
use crate::model::socket_value::{SocketValue, SocketValues};
use crate::plugin::node_types::NodeTypeDefinition;
use crate::plugin::traits::NodePlugin;

// Type definition for C FFI
pub type NodePluginCreateFn = unsafe extern "C" fn() -> *mut dyn NodePlugin;

struct PluginRegistry {
    node_plugins: HashMap<String, Arc<dyn NodePlugin>>,
    /// type id -> definition
    node_types: HashMap<String, NodeTypeDefinition>,
    /// type id -> owning plugin id
    node_owners: HashMap<String, String>,
    dynamic_libraries: Vec<Library>,
}

impl PluginRegistry {
    fn register(&mut self, plugin: Arc<dyn NodePlugin>) {
        let plugin_id = plugin.id().to_string();
        for def in plugin.node_types() {
            debug!(
                "PluginManager: Registering node type '{}' from plugin '{}'",
                def.type_id, plugin_id
            );
            self.node_owners
                .insert(def.type_id.clone(), plugin_id.clone());
            self.node_types.insert(def.type_id.clone(), def);
        }
        self.node_plugins.insert(plugin_id, plugin);
    }
}

/// Main plugin manager.
pub struct PluginManager {
    inner: RwLock<PluginRegistry>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PluginRegistry {
                node_plugins: HashMap::new(),
                node_types: HashMap::new(),
                node_owners: HashMap::new(),
                dynamic_libraries: Vec::new(),
            }),
        }
    }

    pub fn register_node_plugin(&self, plugin: Arc<dyn NodePlugin>) {
        let mut inner = self.inner.write().unwrap();
        inner.register(plugin);
    }

    /// Definition of a registered node type.
    pub fn get_node_type(&self, type_id: &str) -> Option<NodeTypeDefinition> {
        let inner = self.inner.read().unwrap();
        inner.node_types.get(type_id).cloned()
    }

    /// All registered node type ids, sorted.
    pub fn get_node_type_ids(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        let mut ids: Vec<String> = inner.node_types.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Map of node type id to display name, for UI menus.
    pub fn get_node_display_names(&self) -> HashMap<String, String> {
        let inner = self.inner.read().unwrap();
        inner
            .node_types
            .iter()
            .map(|(id, def)| (id.clone(), def.display_name.clone()))
            .collect()
    }

    /// Evaluate a node by type id, dispatching to the owning plugin.
    pub fn evaluate(
        &self,
        type_id: &str,
        inputs: &SocketValues,
    ) -> Result<Vec<SocketValue>, LibraryError> {
        let plugin = {
            let inner = self.inner.read().unwrap();
            let owner = inner.node_owners.get(type_id).cloned();
            match owner.and_then(|id| inner.node_plugins.get(&id).cloned()) {
                Some(plugin) => plugin,
                None => {
                    warn!("Node type '{}' not found", type_id);
                    return Err(LibraryError::Plugin(format!(
                        "No plugin registered for node type '{}'",
                        type_id
                    )));
                }
            }
        };
        debug!("PluginManager: Evaluating node type '{}'", type_id);
        plugin.evaluate(type_id, inputs)
    }

    pub fn load_node_plugin_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LibraryError> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path)? };
        let constructor: Symbol<NodePluginCreateFn> =
            unsafe { library.get(b"create_node_plugin")? };
        let raw = unsafe { constructor() };
        if raw.is_null() {
            return Err(LibraryError::Plugin(
                "Plugin constructor create_node_plugin returned null".to_string(),
            ));
        }
        let plugin = unsafe { Arc::from(Box::from_raw(raw)) };

        let mut inner = self.inner.write().unwrap();
        inner.register(plugin);
        inner.dynamic_libraries.push(library);
        Ok(())
    }

    pub fn load_plugins_from_directory<P: AsRef<Path>>(
        &self,
        dir_path: P,
    ) -> Result<(), LibraryError> {
        let dir = dir_path.as_ref();
        if !dir.is_dir() {
            warn!("Plugin directory not found: {}", dir.display());
            return Ok(());
        }

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                let extension = path.extension().and_then(|s| s.to_str());
                if matches!(extension, Some("dll") | Some("so") | Some("dylib")) {
                    log::info!("Attempting to load plugin from: {}", path.display());
                    if let Err(e) = self.load_node_plugin_from_file(&path) {
                        warn!("File is not a node plugin: {} ({})", path.display(), e);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn get_all_plugins(&self) -> Vec<PluginInfo> {
        let inner = self.inner.read().unwrap();
        let mut plugins: Vec<PluginInfo> = inner
            .node_plugins
            .values()
            .map(|p| {
                let v = p.version();
                PluginInfo {
                    id: p.id().to_string(),
                    name: p.name(),
                    version: format!("{}.{}.{}", v.0, v.1, v.2),
                    impl_type: p.impl_type(),
                }
            })
            .collect();
        plugins.sort_by(|a, b| a.id.cmp(&b.id));
        plugins
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Information about a registered plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub impl_type: String,
}
