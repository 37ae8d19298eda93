//! Path resolution for Front Desk files.
//!
//! All paths are relative to a base directory (the process working
//! directory in the binary), matching how the desk has always kept its
//! `data/` folder next to where it is launched.
//!
//! # Directory Structure
//!
//! ```text
//! ./
//! ├── frontdesk.toml             # Optional configuration
//! └── data/                      # StorageConfig::data_dir
//!     ├── hotel_bookings.json    # Active bookings
//!     └── hotel_bookings.lock    # Held exclusively during an update
//! ```

use std::path::{Path, PathBuf};

use frontdesk_core::config::StorageConfig;

/// Unified path management for Front Desk.
pub struct FrontdeskPaths {
    base_dir: PathBuf,
}

impl FrontdeskPaths {
    pub const CONFIG_FILE_NAME: &'static str = "frontdesk.toml";

    /// Creates a resolver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a resolver rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves `path` against the base directory. Absolute paths are
    /// returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Returns the path to the implicit configuration file.
    pub fn local_config_file(&self) -> PathBuf {
        self.base_dir.join(Self::CONFIG_FILE_NAME)
    }

    /// Returns the bookings file described by `storage`, resolved against
    /// the base directory.
    pub fn bookings_file(&self, storage: &StorageConfig) -> PathBuf {
        self.resolve(&storage.bookings_path())
    }
}
