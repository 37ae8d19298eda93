//! Booking domain models and repository traits.
//!
//! A booking is the record of one guest occupying one room for a fixed
//! number of days at a fixed total price. A room is either Free (no booking)
//! or Booked (exactly one booking).

mod ledger;
mod model;
mod repository;

pub use ledger::BookingLedger;
pub use model::{Booking, RoomStatus};
pub use repository::BookingRepository;
