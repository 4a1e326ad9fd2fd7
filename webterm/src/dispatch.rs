//! Command dispatch

use std::sync::Arc;

use tracing::{debug, error, warn};
use webterm_core::{escape_html, DisplaySink, TermError};
use webterm_plugin::{catch_panic, tokenize, PluginRegistry, ShellContext, RESERVED_HELP};

const HELP_HEADER: &str = "<strong>Available commands:</strong>";
const HELP_EMPTY: &str = "No commands registered.";
const HELP_SELF: &str = "help - Displays this help message.";

/// What a single dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank line, nothing happened
    Empty,
    /// Built-in help was shown
    Help,
    /// A command ran to completion
    Handled { command: String },
    /// A command claimed the line but failed; one error line was emitted
    Failed { command: String, error: TermError },
    /// No command claimed the line
    Unknown { token: String },
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchOutcome::Unknown { .. } | DispatchOutcome::Empty)
    }
}

/// Routes input lines to the first command that claims them
pub struct Dispatcher {
    registry: Arc<PluginRegistry>,
}

impl Dispatcher {
    /// Wrap `registry`, running every command's `initialize` first if that
    /// has not happened yet.
    pub fn new(registry: PluginRegistry) -> Self {
        registry.initialize_all();
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Dispatch one raw input line. Never panics; every failure ends up as output.
    pub fn dispatch(&self, raw_line: &str, sink: &mut dyn DisplaySink) -> DispatchOutcome {
        let line = raw_line.trim();
        if line.is_empty() {
            return DispatchOutcome::Empty;
        }

        let lowered = tokenize(&line.to_lowercase());
        if lowered.first().map(String::as_str) == Some(RESERVED_HELP) {
            self.emit_help(sink);
            return DispatchOutcome::Help;
        }

        for cmd in self.registry.commands() {
            let name = cmd.meta().name;
            let claimed = catch_panic(|| cmd.detect(line)).unwrap_or_else(|msg| {
                warn!(command = name, panic = %msg, "detect panicked, skipping command");
                false
            });
            if !claimed {
                continue;
            }

            debug!(command = name, line, "dispatching");
            let (result, lines) = {
                let mut ctx = ShellContext::new(&mut *sink);
                let result = catch_panic(|| cmd.execute(line, &mut ctx))
                    .unwrap_or_else(|msg| Err(TermError::panicked(msg)));
                (result, ctx.emitted())
            };

            return match result {
                Ok(()) => {
                    debug!(command = name, lines, "command finished");
                    DispatchOutcome::Handled {
                        command: name.to_string(),
                    }
                }
                Err(err) => {
                    error!(command = name, line, lines, error = %err, "command failed");
                    sink.emit_line(&format!(
                        "Error: An error occurred while executing '{}'.",
                        escape_html(&first_token(line))
                    ));
                    DispatchOutcome::Failed {
                        command: name.to_string(),
                        error: err,
                    }
                }
            };
        }

        let token = first_token(line);
        debug!(token = %token, "unknown command");
        sink.emit_line(&format!(
            "Unknown command: {}. Type 'help' for available commands.",
            escape_html(&token)
        ));
        DispatchOutcome::Unknown { token }
    }

    fn emit_help(&self, sink: &mut dyn DisplaySink) {
        sink.emit_line(HELP_HEADER);
        if self.registry.is_empty() {
            sink.emit_line(HELP_EMPTY);
        }
        for cmd in self.registry.commands() {
            let text = catch_panic(|| cmd.help()).unwrap_or_else(|msg| {
                let name = cmd.meta().name;
                warn!(command = name, panic = %msg, "help panicked, using fallback");
                format!(
                    "{} - (No detailed help available)",
                    escape_html(&name.to_lowercase())
                )
            });
            sink.emit_line(&text);
        }
        sink.emit_line(HELP_SELF);
    }
}

/// First token of the line, or the whole line when it has none
fn first_token(line: &str) -> String {
    tokenize(line)
        .into_iter()
        .next()
        .unwrap_or_else(|| line.to_string())
}
