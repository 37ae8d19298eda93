//! JSON file booking repository.
//!
//! Stores every active booking in a single JSON file, rewritten as a whole
//! on each change.
//!
//! File location: `{data_dir}/{bookings_file}` (default `data/hotel_bookings.json`)

use std::path::{Path, PathBuf};

use frontdesk_core::booking::{BookingLedger, BookingRepository};
use frontdesk_core::config::StorageConfig;
use frontdesk_core::error::Result;

use crate::dto::{BookingDocument, decode_document, encode_document};
use crate::storage::AtomicJsonFile;

/// File-backed booking repository.
///
/// No state is cached: every call reads or writes the file. `update` holds
/// an exclusive lock file across load and save so concurrent processes
/// sharing the data directory do not lose each other's changes.
pub struct JsonBookingRepository {
    file: AtomicJsonFile<BookingDocument>,
}

impl JsonBookingRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a repository at the location described by `config`.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.bookings_path())
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn source(&self) -> String {
        self.path().display().to_string()
    }
}

impl BookingRepository for JsonBookingRepository {
    fn load_all(&self) -> Result<BookingLedger> {
        let ledger = match self.file.load()? {
            Some(document) => decode_document(document, &self.source())?,
            None => BookingLedger::new(),
        };
        tracing::debug!(
            "[JsonBookingRepository] Loaded {} booking(s) from {}",
            ledger.len(),
            self.path().display()
        );
        Ok(ledger)
    }

    fn save_all(&self, ledger: &BookingLedger) -> Result<()> {
        let document = encode_document(ledger)?;
        self.file.save(&document)?;
        tracing::debug!(
            "[JsonBookingRepository] Saved {} booking(s) to {}",
            ledger.len(),
            self.path().display()
        );
        Ok(())
    }

    fn update(&self, mutation: &mut dyn FnMut(&mut BookingLedger) -> Result<()>) -> Result<()> {
        let source = self.source();
        self.file.update(BookingDocument::new(), |document| {
            let mut ledger = decode_document(std::mem::take(document), &source)?;
            mutation(&mut ledger)?;
            *document = encode_document(&ledger)?;
            tracing::debug!(
                "[JsonBookingRepository] Updated {} ({} booking(s))",
                source,
                ledger.len()
            );
            Ok(())
        })
    }
}
