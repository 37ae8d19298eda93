//! Booking file format.
//!
//! The bookings file is a JSON object keyed by room id:
//!
//! ```json
//! {
//!     "101": {
//!         "guest": "Alice",
//!         "days": 3,
//!         "total": 300
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use frontdesk_core::booking::{Booking, BookingLedger};
use frontdesk_core::error::{FrontdeskError, Result};

/// Whole-file document. Key order follows the file.
pub type BookingDocument = Map<String, Value>;

/// One booking as stored under its room id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecordDto {
    pub guest: String,
    pub days: u32,
    pub total: u64,
}

impl BookingRecordDto {
    /// Converts the stored record back into a domain booking for `room_id`.
    pub fn into_domain(self, room_id: impl Into<String>) -> Booking {
        Booking::new(room_id, self.guest, self.days, self.total)
    }
}

impl From<&Booking> for BookingRecordDto {
    fn from(booking: &Booking) -> Self {
        Self {
            guest: booking.guest_name.clone(),
            days: booking.days,
            total: booking.total,
        }
    }
}

/// Decodes a parsed document into a ledger.
///
/// `source` names the file in error messages.
pub fn decode_document(document: BookingDocument, source: &str) -> Result<BookingLedger> {
    let mut ledger = BookingLedger::new();
    for (room_id, value) in document {
        let record: BookingRecordDto = serde_json::from_value(value).map_err(|e| {
            FrontdeskError::corrupt_store(source, format!("room '{}': {}", room_id, e))
        })?;
        if record.days == 0 {
            return Err(FrontdeskError::corrupt_store(
                source,
                format!("room '{}': days must be positive", room_id),
            ));
        }
        ledger.insert(record.into_domain(room_id))?;
    }
    Ok(ledger)
}

/// Encodes a ledger as a document, preserving ledger order.
pub fn encode_document(ledger: &BookingLedger) -> Result<BookingDocument> {
    let mut document = BookingDocument::new();
    for booking in ledger.iter() {
        let value = serde_json::to_value(BookingRecordDto::from(booking))?;
        document.insert(booking.room_id.clone(), value);
    }
    Ok(document)
}
