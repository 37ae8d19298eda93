//! Configuration service implementation.
//!
//! Loads `FrontdeskConfig` from, in order of preference:
//! 1. an explicitly requested file (which must exist),
//! 2. `frontdesk.toml` in the base directory, if present,
//! 3. built-in defaults.

use std::fs;
use std::path::Path;

use frontdesk_core::config::FrontdeskConfig;
use frontdesk_core::error::{FrontdeskError, Result};

use crate::paths::FrontdeskPaths;

/// Resolves and parses the Front Desk configuration.
pub struct ConfigService {
    paths: FrontdeskPaths,
}

impl ConfigService {
    pub fn new(paths: FrontdeskPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &FrontdeskPaths {
        &self.paths
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// - `FrontdeskError::Config` if `explicit` names a file that does not exist
    /// - `FrontdeskError::Serialization` if the chosen file is not valid TOML
    pub fn load(&self, explicit: Option<&Path>) -> Result<FrontdeskConfig> {
        if let Some(path) = explicit {
            let path = self.paths.resolve(path);
            if !path.exists() {
                return Err(FrontdeskError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::read(&path);
        }

        let local = self.paths.local_config_file();
        if local.exists() {
            return Self::read(&local);
        }

        tracing::debug!("[ConfigService] No config file found, using defaults");
        Ok(FrontdeskConfig::default())
    }

    fn read(path: &Path) -> Result<FrontdeskConfig> {
        let content = fs::read_to_string(path)?;
        let config = FrontdeskConfig::from_toml_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {}", path.display());
        Ok(config)
    }
}
