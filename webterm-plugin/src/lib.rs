//! Webterm Plugin System
//!
//! Provides what a command needs to plug into the terminal:
//! - `CommandPlugin`: the command contract (initialize, detect, execute, help)
//! - `PluginRegistry`: the ordered set of commands consulted on dispatch
//! - `tokenize`: the argument splitter commands use on their input line

mod context;
mod guard;
mod registry;
mod tokenize;
mod traits;

pub use context::ShellContext;
pub use guard::catch_panic;
pub use registry::{InitReport, PluginRegistry, RESERVED_HELP};
pub use tokenize::{tokenize, tokenize_value};
pub use traits::{CommandMeta, CommandPlugin};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{tokenize, CommandMeta, CommandPlugin, PluginRegistry, ShellContext};
    pub use webterm_core::prelude::*;
}
