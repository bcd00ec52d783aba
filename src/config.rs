// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Registry configuration.
//!
//! Values come from a YAML file (`GNB_REGISTRY_CONFIG`, default
//! `/etc/gnb-registry.yaml`) and are then overridden by `GNB_REGISTRY_DIR`
//! and `GNB_REGISTRY_KEY`. A missing or unreadable file falls back to
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::registry::GnbRegistry;
use crate::storage::{FileStore, RecordStore, StorageResult, DEFAULT_STORAGE_KEY};

pub const CONFIG_PATH_ENV: &str = "GNB_REGISTRY_CONFIG";
pub const STORAGE_DIR_ENV: &str = "GNB_REGISTRY_DIR";
pub const STORAGE_KEY_ENV: &str = "GNB_REGISTRY_KEY";
const DEFAULT_CONFIG_PATH: &str = "/etc/gnb-registry.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Directory holding the persisted snapshot.
    pub storage_dir: PathBuf,
    /// Key the gNB list is stored under.
    pub storage_key: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_dir: std::env::temp_dir().join("gnb-registry"),
            storage_key: DEFAULT_STORAGE_KEY.into(),
        }
    }
}

impl RegistryConfig {
    /// Parse a YAML config file. Keys left out keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the active configuration from file and environment.
    pub fn load_active() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut cfg = match Self::load_from(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {path}, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("using default registry config: {}", e);
                Self::default()
            }
        };
        cfg.apply_env();
        cfg
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(STORAGE_DIR_ENV) {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Ok(key) = std::env::var(STORAGE_KEY_ENV) {
            if !key.trim().is_empty() {
                self.storage_key = key;
            }
        }
    }

    /// Open the file-backed registry this configuration points at.
    pub fn open_registry(&self) -> StorageResult<GnbRegistry<FileStore>> {
        let store = FileStore::open(&self.storage_dir)?;
        Ok(GnbRegistry::open(RecordStore::with_key(store, self.storage_key.clone())))
    }
}
