//! Application layer for Front Desk.
//!
//! This crate provides the booking use case that coordinates the room
//! catalog and the booking repository.

pub mod booking_usecase;
pub mod request;

pub use booking_usecase::BookingUseCase;
pub use request::{BookingRequest, parse_days};
