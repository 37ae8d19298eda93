//! Room catalog domain models.
//!
//! The catalog is the fixed set of bookable rooms and their nightly rates.
//! It is built once at startup and only ever read afterwards.

mod model;
mod room_catalog;

pub use model::{Room, RoomCategory};
pub use room_catalog::RoomCatalog;
