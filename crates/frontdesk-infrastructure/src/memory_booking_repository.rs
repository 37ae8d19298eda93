//! In-memory booking repository.

use std::sync::{Mutex, MutexGuard};

use frontdesk_core::booking::{BookingLedger, BookingRepository};
use frontdesk_core::error::{FrontdeskError, Result};

/// Booking repository that keeps the ledger in memory.
///
/// Used by tests and by embedders that do not want a file on disk.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    ledger: Mutex<BookingLedger>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `ledger`.
    pub fn with_ledger(ledger: BookingLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    /// Returns a copy of the current ledger.
    pub fn snapshot(&self) -> Result<BookingLedger> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BookingLedger>> {
        self.ledger
            .lock()
            .map_err(|e| FrontdeskError::internal(format!("Booking ledger lock poisoned: {}", e)))
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn load_all(&self) -> Result<BookingLedger> {
        self.snapshot()
    }

    fn save_all(&self, ledger: &BookingLedger) -> Result<()> {
        *self.lock()? = ledger.clone();
        Ok(())
    }

    fn update(&self, mutation: &mut dyn FnMut(&mut BookingLedger) -> Result<()>) -> Result<()> {
        let mut guard = self.lock()?;
        let mut ledger = guard.clone();
        mutation(&mut ledger)?;
        *guard = ledger;
        Ok(())
    }
}
