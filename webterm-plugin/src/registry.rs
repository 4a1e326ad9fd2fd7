//! Plugin Registry

use crate::{catch_panic, CommandMeta, CommandPlugin};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};
use webterm_core::TermError;

/// Command word intercepted by the dispatcher before any plugin is consulted
pub const RESERVED_HELP: &str = "help";

/// Outcome of running every plugin's `initialize`
#[derive(Debug, Clone, Default)]
pub struct InitReport {
    pub initialized: Vec<String>,
    pub failed: Vec<(String, TermError)>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Ordered command registry
///
/// Registration order is dispatch priority. The registry is built once and
/// is read-only afterwards.
pub struct PluginRegistry {
    commands: Vec<Arc<dyn CommandPlugin>>,
    init: OnceLock<InitReport>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            init: OnceLock::new(),
        }
    }

    pub fn with_command<C: CommandPlugin + 'static>(mut self, c: C) -> Self {
        let name = c.meta().name;
        if catch_panic(|| c.detect(RESERVED_HELP)).unwrap_or(false) {
            warn!(command = name, "command claims the reserved 'help' line; built-in help wins");
        }
        self.commands.push(Arc::new(c));
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in dispatch order
    pub fn commands(&self) -> impl Iterator<Item = &dyn CommandPlugin> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn list_commands(&self) -> Vec<CommandMeta> {
        self.commands().map(|c| c.meta()).collect()
    }

    /// Run `initialize` on every command, once.
    ///
    /// Later calls return the first report without touching the plugins.
    /// A failing or panicking plugin is logged and recorded; the rest still run.
    pub fn initialize_all(&self) -> &InitReport {
        self.init.get_or_init(|| {
            let mut report = InitReport::default();
            for cmd in self.commands() {
                let name = cmd.meta().name.to_string();
                match catch_panic(|| cmd.initialize()) {
                    Ok(Ok(())) => report.initialized.push(name),
                    Ok(Err(e)) => {
                        warn!(command = %name, error = %e, "command initialization failed");
                        report.failed.push((name, e));
                    }
                    Err(msg) => {
                        let e = TermError::init_failed(&name, msg);
                        warn!(command = %name, error = %e, "command initialization panicked");
                        report.failed.push((name, e));
                    }
                }
            }
            info!(
                initialized = report.initialized.len(),
                failed = report.failed.len(),
                "commands initialized"
            );
            report
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.init.get().is_some()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
