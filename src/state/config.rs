//! Persistent application settings.
//!
//! A small JSON settings file under the platform config directory stores
//! the selected cluster and the keypair path. Loading is infallible:
//! a missing or unreadable file falls back to defaults, so a fresh install
//! starts on devnet with the Solana CLI keypair location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Cluster, ForgeError};

const CONFIG_DIR_NAME: &str = "solforge";
const CONFIG_FILE_NAME: &str = "settings.json";

// ============================================================================
// App Config
// ============================================================================

/// Persistent settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// The cluster to connect to.
    #[serde(default)]
    pub cluster: Cluster,
    /// Keypair file override; `None` means the Solana CLI default path.
    #[serde(default)]
    pub keypair_path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads settings from disk, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed settings file: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persists the settings to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Parse`] wrapping the underlying IO or
    /// serialization failure.
    #[allow(dead_code)] // Part of the config API
    pub fn save(&self) -> Result<(), ForgeError> {
        let path = config_file_path()
            .ok_or_else(|| ForgeError::parse("could not resolve config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ForgeError::parse(format!("failed to create config dir: {e}")))?;
        }

        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| ForgeError::parse(format!("failed to serialize settings: {e}")))?;

        std::fs::write(&path, raw)
            .map_err(|e| ForgeError::parse(format!("failed to write settings: {e}")))
    }
}

/// Resolves the settings file location under the platform config dir.
fn config_file_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(CONFIG_DIR_NAME);
    path.push(CONFIG_FILE_NAME);
    Some(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert!(config.keypair_path.is_none());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = AppConfig {
            cluster: Cluster::Testnet,
            keypair_path: Some(PathBuf::from("/tmp/id.json")),
        };

        let raw = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        // A settings file written by an older version may lack fields.
        let restored: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, AppConfig::default());
    }
}
