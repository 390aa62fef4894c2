//! Client-side configuration.
//!
//! Reads/writes `~/.koma/config.toml`. The bearer token is not kept here;
//! it lives in its own file next to the config so the SDK's credential
//! store owns its lifecycle.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use koma_client::DEFAULT_BASE_URL;

/// Client configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Koma service.
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_server() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}

impl ClientConfig {
    /// Default config file path: `~/.koma/config.toml`.
    pub fn default_path() -> PathBuf {
        koma_dir().join("config.toml")
    }

    /// Load config from disk, or return default if the file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
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
}

/// Token file sitting next to the config file, so `--config` relocates
/// both together.
pub fn token_path(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) => parent.join("token"),
        None => PathBuf::from("token"),
    }
}

/// Return the Koma config directory (`~/.koma`).
fn koma_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".koma")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.server, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.server, DEFAULT_BASE_URL);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ClientConfig {
            server: "http://localhost:8080".to_string(),
        };
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.server, "http://localhost:8080");
    }

    #[test]
    fn token_sits_next_to_the_config_file() {
        let path = Path::new("/home/x/.koma/config.toml");
        assert_eq!(token_path(path), Path::new("/home/x/.koma/token"));
    }
}
