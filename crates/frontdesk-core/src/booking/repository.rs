//! Booking repository trait.

use super::ledger::BookingLedger;
use crate::error::Result;

/// Persistence for the set of active bookings.
///
/// Implementations read and write the whole ledger at once; nothing is
/// cached between calls, so two sequential calls always observe each
/// other's effects.
pub trait BookingRepository: Send + Sync {
    /// Loads every active booking. A store that was never written is empty.
    fn load_all(&self) -> Result<BookingLedger>;

    /// Replaces the stored bookings with `ledger`.
    fn save_all(&self, ledger: &BookingLedger) -> Result<()>;

    /// Loads the ledger, applies `mutation`, and saves the result.
    ///
    /// Nothing is written if `mutation` fails. Implementations that can
    /// lock the underlying store hold the lock for the whole sequence.
    fn update(&self, mutation: &mut dyn FnMut(&mut BookingLedger) -> Result<()>) -> Result<()> {
        let mut ledger = self.load_all()?;
        mutation(&mut ledger)?;
        self.save_all(&ledger)
    }
}
