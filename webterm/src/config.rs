//! Terminal configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

pub const ENV_PROMPT: &str = "WEBTERM_PROMPT";
pub const ENV_ECHO: &str = "WEBTERM_ECHO";
pub const ENV_RENDER: &str = "WEBTERM_RENDER";
pub const ENV_KV_PATH: &str = "WEBTERM_KV_PATH";

/// How output lines are rendered by a front end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Lines are written as markup
    #[default]
    Html,
    /// Tags stripped, entities decoded
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Prefix for echoed input lines
    pub prompt: String,
    /// Echo each submitted line before dispatching it
    pub echo_input: bool,
    pub render: RenderMode,
    /// Backing file for the kvstore command; in-memory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kv_path: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            echo_input: false,
            render: RenderMode::Html,
            kv_path: None,
        }
    }
}

impl TerminalConfig {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_echo(mut self, enabled: bool) -> Self {
        self.echo_input = enabled;
        self
    }

    pub fn with_render(mut self, render: RenderMode) -> Self {
        self.render = render;
        self
    }

    pub fn with_kv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.kv_path = Some(path.into());
        self
    }

    /// Read configuration from `WEBTERM_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, starting from the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.prompt = prompt;
        }

        if let Some(echo) = lookup(ENV_ECHO) {
            match parse_bool(&echo) {
                Some(enabled) => config.echo_input = enabled,
                None => warn!(value = %echo, "ignoring invalid {}", ENV_ECHO),
            }
        }

        if let Some(render) = lookup(ENV_RENDER) {
            match render.trim().to_lowercase().as_str() {
                "html" => config.render = RenderMode::Html,
                "text" | "plain" => config.render = RenderMode::Text,
                _ => warn!(value = %render, "ignoring invalid {}", ENV_RENDER),
            }
        }

        if let Some(path) = lookup(ENV_KV_PATH).filter(|p| !p.trim().is_empty()) {
            config.kv_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(TerminalConfig::from_lookup(lookup(&[])), TerminalConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = TerminalConfig::from_lookup(lookup(&[
            (ENV_PROMPT, "$ "),
            (ENV_ECHO, "Yes"),
            (ENV_RENDER, "TEXT"),
            (ENV_KV_PATH, "/tmp/kv.json"),
        ]));
        assert_eq!(config.prompt, "$ ");
        assert!(config.echo_input);
        assert_eq!(config.render, RenderMode::Text);
        assert_eq!(config.kv_path, Some(PathBuf::from("/tmp/kv.json")));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = TerminalConfig::from_lookup(lookup(&[
            (ENV_ECHO, "maybe"),
            (ENV_RENDER, "pdf"),
            (ENV_KV_PATH, "  "),
        ]));
        assert!(!config.echo_input);
        assert_eq!(config.render, RenderMode::Html);
        assert_eq!(config.kv_path, None);
    }

    #[test]
    fn test_builders() {
        let config = TerminalConfig::default()
            .with_prompt("# ")
            .with_echo(true)
            .with_render(RenderMode::Text)
            .with_kv_path("store.json");
        assert_eq!(config.prompt, "# ");
        assert!(config.echo_input);
        assert_eq!(config.render, RenderMode::Text);
        assert_eq!(config.kv_path, Some(PathBuf::from("store.json")));
    }
}
