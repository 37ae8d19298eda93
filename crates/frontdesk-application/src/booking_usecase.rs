//! Booking use case implementation.
//!
//! This module provides the `BookingUseCase` which validates desk requests
//! against the `RoomCatalog` and applies them to the `BookingRepository`.

use std::sync::Arc;

use frontdesk_core::booking::{Booking, BookingRepository, RoomStatus};
use frontdesk_core::catalog::{Room, RoomCatalog};
use frontdesk_core::error::{FrontdeskError, Result};

use crate::request::{BookingRequest, parse_days};

/// Use case for booking, releasing and listing rooms.
///
/// Every operation loads the bookings from the repository, so consecutive
/// calls always see each other's effects. Mutations go through
/// `BookingRepository::update`; a rejected mutation writes nothing.
///
/// # Room states
///
/// Each catalog room is either Free (no booking) or Booked. `book` moves a
/// room from Free to Booked; `checkout` and `delete_booking` move it back.
pub struct BookingUseCase {
    /// Fixed set of bookable rooms
    catalog: Arc<RoomCatalog>,
    /// Persistence for active bookings
    repository: Arc<dyn BookingRepository>,
}

impl BookingUseCase {
    /// Creates a new `BookingUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Rooms that can be booked and their nightly rates
    /// * `repository` - Repository holding the active bookings
    pub fn new(catalog: Arc<RoomCatalog>, repository: Arc<dyn BookingRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// Books a room.
    ///
    /// Checks run in this order, each with its own error:
    /// 1. the day count must be a positive integer (`InvalidDuration`)
    /// 2. the room must be in the catalog (`UnknownRoom`)
    /// 3. the room must be free (`RoomAlreadyBooked`)
    ///
    /// On success the total price (`nightly_rate * days`) is fixed, the
    /// booking is persisted and returned.
    pub fn book(&self, request: &BookingRequest) -> Result<Booking> {
        let result = self.try_book(request);
        if let Err(e) = &result {
            log_rejection("Booking", &request.room_id, e);
        }
        result
    }

    fn try_book(&self, request: &BookingRequest) -> Result<Booking> {
        let days = parse_days(&request.days)?;

        let room = self
            .catalog
            .lookup(&request.room_id)
            .ok_or_else(|| FrontdeskError::unknown_room(&request.room_id))?;

        let total = room
            .nightly_rate
            .checked_mul(u64::from(days))
            .ok_or_else(|| FrontdeskError::invalid_duration(&request.days))?;

        let booking = Booking::new(&room.id, &request.guest_name, days, total);

        self.repository
            .update(&mut |ledger| ledger.insert(booking.clone()))?;

        tracing::info!(
            "[BookingUseCase] Room {} booked for '{}': {} day(s), total {}",
            booking.room_id,
            booking.guest_name,
            booking.days,
            booking.total
        );
        Ok(booking)
    }

    /// Checks a guest out, freeing the room. Returns the removed booking.
    ///
    /// Fails with `NoActiveBooking` if the room is free or unknown.
    pub fn checkout(&self, room_id: &str) -> Result<Booking> {
        self.release(room_id, "Checkout", "checked out")
    }

    /// Deletes a booking, freeing the room. Returns the removed booking.
    ///
    /// Has the same effect as `checkout`: no history is kept, so a
    /// departure and a cancelled booking are indistinguishable afterwards.
    pub fn delete_booking(&self, room_id: &str) -> Result<Booking> {
        self.release(room_id, "Delete", "deleted")
    }

    fn release(&self, room_id: &str, operation: &str, outcome: &str) -> Result<Booking> {
        let mut released = None;
        let result = self.repository.update(&mut |ledger| {
            let booking = ledger
                .remove(room_id)
                .ok_or_else(|| FrontdeskError::no_active_booking(room_id))?;
            released = Some(booking);
            Ok(())
        });

        if let Err(e) = result {
            log_rejection(operation, room_id, &e);
            return Err(e);
        }

        let booking = released.ok_or_else(|| {
            FrontdeskError::internal(format!("Room '{}' released without a booking", room_id))
        })?;
        tracing::info!(
            "[BookingUseCase] Booking for room {} ({}) {}",
            booking.room_id,
            booking.guest_name,
            outcome
        );
        Ok(booking)
    }

    /// Returns every free room in catalog order.
    pub fn list_available(&self) -> Result<Vec<Room>> {
        let ledger = self.repository.load_all()?;
        Ok(self
            .catalog
            .iter()
            .filter(|room| !ledger.contains(&room.id))
            .cloned()
            .collect())
    }

    /// Returns every active booking in the order they were made.
    ///
    /// An empty list means no room is booked; how to say so is up to the
    /// caller.
    pub fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.repository.load_all()?.into_bookings())
    }

    /// Returns whether a catalog room is free or booked.
    pub fn room_status(&self, room_id: &str) -> Result<RoomStatus> {
        if !self.catalog.contains(room_id) {
            return Err(FrontdeskError::unknown_room(room_id));
        }
        let ledger = self.repository.load_all()?;
        Ok(match ledger.get(room_id) {
            Some(booking) => RoomStatus::Booked(booking.clone()),
            None => RoomStatus::Free,
        })
    }
}

/// Logs a failed operation: operator errors at info, everything else at warn.
fn log_rejection(operation: &str, room_id: &str, error: &FrontdeskError) {
    if error.is_operator_error() {
        tracing::info!(
            "[BookingUseCase] {} of room '{}' rejected: {}",
            operation,
            room_id,
            error
        );
    } else {
        tracing::warn!(
            "[BookingUseCase] {} of room '{}' failed: {}",
            operation,
            room_id,
            error
        );
    }
}
