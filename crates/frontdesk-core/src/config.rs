//! Application configuration models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BOOKINGS_FILE: &str = "hotel_bookings.json";

/// Root of `frontdesk.toml`.
///
/// ```toml
/// [storage]
/// data_dir = "data"
/// bookings_file = "hotel_bookings.json"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontdeskConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl FrontdeskConfig {
    /// Parses a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Where the bookings file lives.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the bookings file; relative paths resolve against
    /// the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_bookings_file")]
    pub bookings_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_bookings_file() -> String {
    DEFAULT_BOOKINGS_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bookings_file: default_bookings_file(),
        }
    }
}

impl StorageConfig {
    /// Storage rooted at `data_dir` with the default file name.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the bookings file.
    pub fn bookings_path(&self) -> PathBuf {
        self.data_dir.join(&self.bookings_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = FrontdeskConfig::default();
        assert_eq!(
            config.storage.bookings_path(),
            PathBuf::from("data").join("hotel_bookings.json")
        );
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = FrontdeskConfig::from_toml_str(
            r#"
            [storage]
            data_dir = "/var/lib/frontdesk"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/frontdesk"));
        assert_eq!(config.storage.bookings_file, "hotel_bookings.json");
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = FrontdeskConfig::from_toml_str("").unwrap();
        assert_eq!(config, FrontdeskConfig::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = FrontdeskConfig::from_toml_str("[storage\n").unwrap_err();
        assert!(matches!(err, crate::FrontdeskError::Serialization { .. }));
    }
}
