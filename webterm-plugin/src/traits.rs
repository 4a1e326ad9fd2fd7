//! Plugin traits

use crate::ShellContext;
use serde::Serialize;
use webterm_core::{escape_html, TermError};

/// Metadata for a command plugin
#[derive(Debug, Clone, Serialize)]
pub struct CommandMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub examples: &'static [&'static str],
}

/// Command plugin
///
/// Commands are consulted in registration order. The first one whose
/// [`detect`](CommandPlugin::detect) accepts a line is the only one that runs.
pub trait CommandPlugin: Send + Sync {
    fn meta(&self) -> CommandMeta;

    /// One-time setup, run before the first dispatch.
    fn initialize(&self) -> Result<(), TermError> {
        Ok(())
    }

    /// Whether this command claims the trimmed input line. Must not have side effects.
    fn detect(&self, line: &str) -> bool;

    /// Run the command. Only called after `detect` accepted `line`.
    fn execute(&self, line: &str, ctx: &mut ShellContext<'_>) -> Result<(), TermError>;

    /// One line of help text, shown by the built-in `help` command.
    fn help(&self) -> String {
        let meta = self.meta();
        if meta.description.is_empty() {
            format!(
                "{} - (No detailed help available)",
                escape_html(&meta.name.to_lowercase())
            )
        } else {
            format!("{} - {}", escape_html(meta.usage), escape_html(meta.description))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl CommandPlugin for Bare {
        fn meta(&self) -> CommandMeta {
            CommandMeta { name: "Bare", description: "", usage: "bare", examples: &[] }
        }

        fn detect(&self, line: &str) -> bool {
            line == "bare"
        }

        fn execute(&self, _line: &str, _ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
            Ok(())
        }
    }

    struct Described;

    impl CommandPlugin for Described {
        fn meta(&self) -> CommandMeta {
            CommandMeta {
                name: "echo",
                description: "Prints its arguments.",
                usage: "echo <text>",
                examples: &["echo hi"],
            }
        }

        fn detect(&self, line: &str) -> bool {
            line.starts_with("echo")
        }

        fn execute(&self, _line: &str, _ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
            Ok(())
        }
    }

    #[test]
    fn test_help_fallback_uses_name() {
        assert_eq!(Bare.help(), "bare - (No detailed help available)");
    }

    #[test]
    fn test_help_from_meta_is_escaped() {
        assert_eq!(Described.help(), "echo &lt;text&gt; - Prints its arguments.");
    }

    #[test]
    fn test_initialize_defaults_to_ok() {
        assert!(Bare.initialize().is_ok());
    }
}
