//! Client configuration.
//!
//! Reads/writes `~/.account/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Client configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (e.g. "http://localhost:8000").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Local storage database holding `access_token`.
    /// Empty means `~/.account/storage.redb`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage: String,
}

impl ClientConfig {
    /// Default config file path: ~/.account/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolved storage database path.
    pub fn storage_path(&self) -> PathBuf {
        if self.storage.is_empty() {
            dirs_path().join("storage.redb")
        } else {
            PathBuf::from(&self.storage)
        }
    }

    /// Server URL, or an error telling the operator how to set it.
    pub fn require_server(&self) -> anyhow::Result<&str> {
        if self.server.is_empty() {
            anyhow::bail!("No server URL set. Run `account config set --server <url>`.");
        }
        Ok(&self.server)
    }
}

/// Return the config directory (~/.account).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".account")
}
