//! Domain layer for the Front Desk booking manager: the room catalog, the
//! booking ledger, the repository seam, configuration and errors.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;

// Re-export common error type
pub use error::FrontdeskError;
