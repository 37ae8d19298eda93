//! Booking domain models.

use serde::{Deserialize, Serialize};

/// An active booking for one room.
///
/// `total` is computed from the catalog rate when the booking is created and
/// stored as-is; it is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub room_id: String,
    pub guest_name: String,
    pub days: u32,
    pub total: u64,
}

impl Booking {
    pub fn new(
        room_id: impl Into<String>,
        guest_name: impl Into<String>,
        days: u32,
        total: u64,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            guest_name: guest_name.into(),
            days,
            total,
        }
    }
}

/// Occupancy state of a catalog room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStatus {
    Free,
    Booked(Booking),
}

impl RoomStatus {
    pub fn is_free(&self) -> bool {
        matches!(self, RoomStatus::Free)
    }

    /// Returns the active booking, if the room is booked.
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            RoomStatus::Free => None,
            RoomStatus::Booked(booking) => Some(booking),
        }
    }
}
