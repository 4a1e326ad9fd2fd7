//! Webterm - command interpretation and dispatch for a pseudo-terminal
//!
//! A submitted line is recorded in the history, matched against the ordered
//! command registry, and the winning command writes its output to a
//! [`DisplaySink`]. The built-in `help` command is handled here and can never
//! be claimed by a plugin.

mod config;
mod dispatch;
mod history;

pub use config::{RenderMode, TerminalConfig, ENV_ECHO, ENV_KV_PATH, ENV_PROMPT, ENV_RENDER};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use history::History;

pub use webterm_core::{escape_html, to_plain_text, DisplaySink, TermError, Transcript};
pub use webterm_plugin::{tokenize, CommandMeta, CommandPlugin, InitReport, PluginRegistry, ShellContext};

/// Main terminal engine
pub struct Terminal {
    dispatcher: Dispatcher,
    history: History,
    config: TerminalConfig,
    init_report: InitReport,
}

impl Terminal {
    /// Take ownership of the registry; its commands are initialized once here.
    pub fn new(registry: PluginRegistry, config: TerminalConfig) -> Self {
        let dispatcher = Dispatcher::new(registry);
        let init_report = dispatcher.registry().initialize_all().clone();
        Self {
            dispatcher,
            history: History::new(),
            config,
            init_report,
        }
    }

    /// Standard commands, configured from `config` (kvstore path)
    pub fn from_config(config: TerminalConfig) -> Self {
        let registry = webterm_std::load_standard_library(PluginRegistry::new(), config.kv_path.clone());
        Self::new(registry, config)
    }

    pub fn with_standard_library() -> Self {
        Self::from_config(TerminalConfig::default())
    }

    /// Submit one input line: echo it if configured, record it, dispatch it.
    pub fn submit(&mut self, line: &str, sink: &mut dyn DisplaySink) -> DispatchOutcome {
        if self.config.echo_input {
            sink.emit_line(&format!(
                "{}{}",
                escape_html(&self.config.prompt),
                escape_html(line)
            ));
        }
        self.history.record(line);
        self.dispatcher.dispatch(line, sink)
    }

    pub fn recall_previous(&mut self) -> Option<String> {
        self.history.recall_previous()
    }

    pub fn recall_next(&mut self) -> Option<String> {
        self.history.recall_next()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn init_report(&self) -> &InitReport {
        &self.init_report
    }

    pub fn registry(&self) -> &PluginRegistry {
        self.dispatcher.registry()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_and_dispatches() {
        let mut term = Terminal::with_standard_library();
        let mut out = Transcript::new();

        let outcome = term.submit("kvstore set a 1", &mut out);
        assert_eq!(outcome, DispatchOutcome::Handled { command: "kvstore".into() });
        assert_eq!(out.last(), Some("Stored: a"));
        assert_eq!(term.history().entries(), &["kvstore set a 1".to_string()]);
    }

    #[test]
    fn test_blank_submit_not_recorded() {
        let mut term = Terminal::with_standard_library();
        let mut out = Transcript::new();
        assert_eq!(term.submit("  ", &mut out), DispatchOutcome::Empty);
        assert!(term.history().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_echo_is_escaped() {
        let config = TerminalConfig::default().with_echo(true).with_prompt("$ ");
        let mut term = Terminal::new(PluginRegistry::new(), config);
        let mut out = Transcript::new();

        term.submit("<i>", &mut out);
        assert_eq!(out.lines()[0], "$ &lt;i&gt;");
        assert!(out.lines()[1].starts_with("Unknown command: &lt;i&gt;."));
    }

    #[test]
    fn test_recall_through_terminal() {
        let mut term = Terminal::with_standard_library();
        let mut out = Transcript::new();
        term.submit("help", &mut out);
        term.submit("clear", &mut out);

        assert_eq!(term.recall_previous().as_deref(), Some("clear"));
        assert_eq!(term.recall_previous().as_deref(), Some("help"));
        assert_eq!(term.recall_next().as_deref(), Some("clear"));
        assert_eq!(term.recall_next().as_deref(), Some(""));
    }

    #[test]
    fn test_standard_library_initialized() {
        let term = Terminal::with_standard_library();
        assert!(term.init_report().is_clean());
        assert_eq!(term.init_report().initialized, vec!["clear".to_string(), "kvstore".to_string()]);
        assert!(term.registry().is_initialized());
    }
}
