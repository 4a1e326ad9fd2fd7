//! Webterm Standard Library

pub mod commands;

use std::path::PathBuf;
use webterm_plugin::PluginRegistry;

/// Load standard commands into registry, in dispatch order
pub fn load_standard_library(registry: PluginRegistry, kv_path: Option<PathBuf>) -> PluginRegistry {
    let kvstore = match kv_path {
        Some(path) => commands::Kvstore::with_path(path),
        None => commands::Kvstore::new(),
    };
    registry
        .with_command(commands::Clear)
        .with_command(kvstore)
}

/// Create registry with standard library, kvstore kept in memory
pub fn standard_registry() -> PluginRegistry {
    load_standard_library(PluginRegistry::new(), None)
}
