//! Server configuration.
//!
//! Values come from an optional YAML file (path in `MPWEB_CONFIG`), then
//! the `LISTEN` and `DOCUMENT_ROOT` environment variables. Anything unset
//! keeps its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory request contexts are resolved against.
    pub document_root: PathBuf,
    /// Sleep of the `delay` path, in milliseconds.
    pub delay_ms: u64,
    /// Bytes read from a connection before the request is handled anyway.
    pub max_request_bytes: usize,
    /// Time allowed between reads while a request is incomplete.
    pub read_timeout_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:9999".to_string(),
            document_root: PathBuf::from("."),
            delay_ms: 2000,
            max_request_bytes: 1024,
            read_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let cfg = match std::env::var("MPWEB_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse YAML config")
    }

    /// Applies `LISTEN` and `DOCUMENT_ROOT` as returned by `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup("LISTEN") {
            self.listen_addr = addr;
        }
        if let Some(root) = lookup("DOCUMENT_ROOT") {
            self.document_root = PathBuf::from(root);
        }
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// The configured tracing level, falling back to INFO when unparseable.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
