//! Booking request models.

use serde::{Deserialize, Serialize};

use frontdesk_core::error::{FrontdeskError, Result};

/// Request to book a room, as entered at the desk.
///
/// `days` stays as raw text: turning it into a day count is the first
/// validation step of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: String,
    pub guest_name: String,
    pub days: String,
}

impl BookingRequest {
    pub fn new(
        room_id: impl Into<String>,
        guest_name: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            guest_name: guest_name.into(),
            days: days.into(),
        }
    }

    /// Builds a request from free-text form fields, trimming surrounding
    /// whitespace from each.
    pub fn from_form(room_id: &str, guest_name: &str, days: &str) -> Self {
        Self::new(room_id.trim(), guest_name.trim(), days.trim())
    }
}

/// Parses a day count.
///
/// Accepts an optionally signed decimal integer with surrounding whitespace.
///
/// # Errors
///
/// `FrontdeskError::InvalidDuration` if the input is not an integer, is not
/// strictly positive, or does not fit the day counter.
pub fn parse_days(input: &str) -> Result<u32> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| FrontdeskError::invalid_duration(input))?;
    if value <= 0 {
        return Err(FrontdeskError::invalid_duration(input));
    }
    u32::try_from(value).map_err(|_| FrontdeskError::invalid_duration(input))
}
