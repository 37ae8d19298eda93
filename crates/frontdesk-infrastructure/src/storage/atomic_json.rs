//! Atomic JSON file operations.
//!
//! Whole-file reads and writes with tmp file + rename, plus an exclusive
//! lock file around read-modify-write sequences.
//!
//! The lock file is created once and never removed. Every updater locks the
//! same inode, so a waiter that wakes up always holds the only lock.

use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use frontdesk_core::FrontdeskError;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// The file exists but does not hold the expected JSON document.
    Corrupt { path: PathBuf, message: String },
    /// JSON serialization error.
    SerializeError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::Corrupt { path, message } => {
                write!(f, "Malformed JSON in {}: {}", path.display(), message)
            }
            AtomicJsonError::SerializeError(e) => write!(f, "JSON serialization error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::SerializeError(e)
    }
}

impl From<AtomicJsonError> for FrontdeskError {
    fn from(e: AtomicJsonError) -> Self {
        match e {
            AtomicJsonError::IoError(e) => FrontdeskError::from(e),
            AtomicJsonError::Corrupt { path, message } => {
                FrontdeskError::corrupt_store(path.display().to_string(), message)
            }
            AtomicJsonError::SerializeError(e) => FrontdeskError::from(e),
            AtomicJsonError::LockError(message) => FrontdeskError::io(message),
        }
    }
}

/// A handle to a JSON file that is always replaced as a whole.
///
/// Provides:
/// - **Atomicity**: Writes go to a uniquely named tmp sibling, then rename over the target
/// - **Isolation**: `update` holds an exclusive lock on `<stem>.lock` for load + save
/// - **Durability**: Explicit fsync before rename
///
/// Output is pretty-printed with 4-space indentation.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the JSON file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err(AtomicJsonError::Corrupt)`: File content is not a valid `T`
    /// - `Err`: Failed to read the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content).map_err(|e| AtomicJsonError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(data))
    }

    /// Saves data to the JSON file atomically, creating the parent
    /// directory if needed.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        data.serialize(&mut serializer)?;

        let mut tmp_file = NamedTempFile::new_in(dir)?;
        tmp_file.write_all(&buffer)?;
        tmp_file.as_file().sync_all()?;
        tmp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Performs a locked load-modify-save.
    ///
    /// `f` receives the current data (or `default_value` if the file is
    /// missing). If `f` fails, the file is left untouched.
    pub fn update<F, E>(&self, default_value: T, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
        E: From<AtomicJsonError>,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load()?.unwrap_or(default_value);

        f(&mut data)?;

        self.save(&data)?;

        Ok(())
    }

    /// Directory holding the file; `.` for a bare file name.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicJsonError> {
        FileLock::acquire(&self.path)
    }
}

/// An exclusive lock on `<stem>.lock`, released when dropped.
///
/// The lock file itself stays on disk between updates.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Closing the handle also releases it
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    fn counter(count: u32) -> Counter {
        Counter {
            name: "front".to_string(),
            count,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("c.json"));

        file.save(&counter(42)).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, counter(42));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        file.save(&counter(1)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "{\n    \"name\": \"front\",\n    \"count\": 1\n}");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("missing.json"));

        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();

        let file = AtomicJsonFile::<Counter>::new(path);
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let file = AtomicJsonFile::<Counter>::new(path.clone());
        match file.load() {
            Err(AtomicJsonError::Corrupt { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Corrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("c.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        file.save(&counter(3)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_update() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        file.update(counter(0), |c| {
            c.count += 10;
            Ok::<(), AtomicJsonError>(())
        })
        .unwrap();
        file.update(counter(0), |c| {
            c.count += 5;
            Ok::<(), AtomicJsonError>(())
        })
        .unwrap();

        assert_eq!(file.load().unwrap().unwrap().count, 15);
        assert!(path.with_extension("lock").exists());
    }

    #[test]
    fn test_failed_update_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        file.save(&counter(7)).unwrap();

        let result = file.update(counter(0), |c| {
            c.count = 99;
            Err(AtomicJsonError::LockError("rejected".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(file.load().unwrap().unwrap().count, 7);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        file.save(&counter(42)).unwrap();
        file.save(&counter(43)).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("test.json")]);
    }

    #[test]
    fn test_save_in_working_directory_path() {
        let file = AtomicJsonFile::<Counter>::new(PathBuf::from("bare.json"));
        assert_eq!(file.parent_dir(), Path::new("."));
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.json");

        std::thread::scope(|scope| {
            for _ in 0..6 {
                let path = path.clone();
                scope.spawn(move || {
                    let file = AtomicJsonFile::<Counter>::new(path);
                    for _ in 0..20 {
                        file.update(counter(0), |c| {
                            c.count += 1;
                            Ok::<(), AtomicJsonError>(())
                        })
                        .unwrap();
                    }
                });
            }
        });

        let file = AtomicJsonFile::<Counter>::new(path);
        assert_eq!(file.load().unwrap().unwrap().count, 120);
    }

    #[test]
    fn test_corrupt_maps_to_corrupt_store() {
        let err: FrontdeskError = AtomicJsonError::Corrupt {
            path: PathBuf::from("data/hotel_bookings.json"),
            message: "expected value".to_string(),
        }
        .into();
        assert!(err.is_corrupt_store());
    }
}
