use super::model::Booking;
use crate::error::{FrontdeskError, Result};

/// The full set of active bookings, keyed by room id.
///
/// Keeps insertion order so bookings are listed (and written back to disk)
/// in the order they were made. A room id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the booking for a room, if any.
    pub fn get(&self, room_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.room_id == room_id)
    }

    pub fn contains(&self, room_id: &str) -> bool {
        self.get(room_id).is_some()
    }

    /// Appends a booking.
    ///
    /// # Errors
    ///
    /// Returns `FrontdeskError::RoomAlreadyBooked` if the room already has a
    /// booking; the ledger is left unchanged.
    pub fn insert(&mut self, booking: Booking) -> Result<()> {
        if self.contains(&booking.room_id) {
            return Err(FrontdeskError::room_already_booked(booking.room_id));
        }
        self.bookings.push(booking);
        Ok(())
    }

    /// Removes and returns the booking for a room.
    pub fn remove(&mut self, room_id: &str) -> Option<Booking> {
        let position = self.bookings.iter().position(|b| b.room_id == room_id)?;
        Some(self.bookings.remove(position))
    }

    /// Iterates bookings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings
    }
}
