//! Webterm CLI
//!
//! Reads command lines from stdin and writes the terminal's output to stdout.
//! Logs go to stderr.
//!
//! Environment:
//! - WEBTERM_PROMPT: prompt shown before input (and used for echoed lines)
//! - WEBTERM_ECHO: echo each line back before its output
//! - WEBTERM_RENDER: `html` or `text`
//! - WEBTERM_KV_PATH: JSON file backing the kvstore command
//! - RUST_LOG: log filter, `info` when unset

use std::io::{self, BufRead, IsTerminal, Stdout, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use webterm::{to_plain_text, DisplaySink, RenderMode, Terminal, TerminalConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes output lines to stdout
struct StdoutSink {
    out: Stdout,
    render: RenderMode,
}

impl StdoutSink {
    fn new(render: RenderMode) -> Self {
        Self { out: io::stdout(), render }
    }

    fn write_raw(&mut self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = write!(out, "{}", text).and_then(|_| out.flush()) {
            error!(error = %e, "failed to write to stdout");
        }
    }
}

impl DisplaySink for StdoutSink {
    fn emit_line(&mut self, content: &str) {
        let line = match self.render {
            RenderMode::Html => content.to_string(),
            RenderMode::Text => to_plain_text(content),
        };
        self.write_raw(&format!("{}\n", line));
    }

    fn clear(&mut self) {
        self.write_raw(CLEAR_SCREEN);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config = TerminalConfig::from_env();
    info!(version = VERSION, render = ?config.render, kv_path = ?config.kv_path, "webterm starting");

    let mut terminal = Terminal::from_config(config.clone());
    for (name, err) in &terminal.init_report().failed {
        warn!(command = %name, error = %err, "command unavailable until restart");
    }

    let interactive = io::stdin().is_terminal();
    let mut sink = StdoutSink::new(config.render);
    sink.emit_line("Type 'help' for available commands.");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        if interactive {
            sink.write_raw(&config.prompt);
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                terminal.submit(line, &mut sink);
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!(commands = terminal.history().len(), "webterm shutting down");
}
