//! Server configuration.
//!
//! Values come from an optional YAML file named by `LANTERN_CONFIG`, then
//! `LISTEN` and `STATIC_ROOT` override individual fields. Every field has a
//! default, so an empty file (or no file) is a valid configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LANTERN_CONFIG";
pub const LISTEN_ENV: &str = "LISTEN";
pub const STATIC_ROOT_ENV: &str = "STATIC_ROOT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: String,
}

/// Where unregistered paths are looked up on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Content root; request paths are appended to it verbatim
    pub root: PathBuf,
    /// Reject paths that resolve outside `root` (off unless asked for)
    pub contain_paths: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./static"),
            contain_paths: false,
        }
    }
}

impl Config {
    /// Loads the configuration from the file named by `LANTERN_CONFIG` (if any)
    /// and applies environment overrides on top.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var(STATIC_ROOT_ENV) {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg = serde_yaml::from_str(text).context("Failed to parse YAML config")?;
        Ok(cfg)
    }
}
