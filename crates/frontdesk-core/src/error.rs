//! Error types for the Front Desk application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Front Desk workspace.
///
/// The first four variants are booking-rule violations the operator can fix
/// by changing their input. The rest are environmental failures (disk,
/// configuration, a damaged bookings file).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontdeskError {
    /// The day count is not a positive integer.
    #[error("Invalid duration: '{input}' is not a positive number of days")]
    InvalidDuration { input: String },

    /// The room id is not part of the catalog.
    #[error("Unknown room: '{room_id}'")]
    UnknownRoom { room_id: String },

    /// The room already has an active booking.
    #[error("Room already booked: '{room_id}'")]
    RoomAlreadyBooked { room_id: String },

    /// Checkout or delete on a room without an active booking.
    #[error("No active booking for room '{room_id}'")]
    NoActiveBooking { room_id: String },

    /// The bookings file exists but could not be understood.
    #[error("Corrupt booking store at {path}: {message}")]
    CorruptStore { path: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FrontdeskError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidDuration error
    pub fn invalid_duration(input: impl Into<String>) -> Self {
        Self::InvalidDuration {
            input: input.into(),
        }
    }

    /// Creates an UnknownRoom error
    pub fn unknown_room(room_id: impl Into<String>) -> Self {
        Self::UnknownRoom {
            room_id: room_id.into(),
        }
    }

    /// Creates a RoomAlreadyBooked error
    pub fn room_already_booked(room_id: impl Into<String>) -> Self {
        Self::RoomAlreadyBooked {
            room_id: room_id.into(),
        }
    }

    /// Creates a NoActiveBooking error
    pub fn no_active_booking(room_id: impl Into<String>) -> Self {
        Self::NoActiveBooking {
            room_id: room_id.into(),
        }
    }

    /// Creates a CorruptStore error
    pub fn corrupt_store(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidDuration error
    pub fn is_invalid_duration(&self) -> bool {
        matches!(self, Self::InvalidDuration { .. })
    }

    /// Check if this is an UnknownRoom error
    pub fn is_unknown_room(&self) -> bool {
        matches!(self, Self::UnknownRoom { .. })
    }

    /// Check if this is a RoomAlreadyBooked error
    pub fn is_room_already_booked(&self) -> bool {
        matches!(self, Self::RoomAlreadyBooked { .. })
    }

    /// Check if this is a NoActiveBooking error
    pub fn is_no_active_booking(&self) -> bool {
        matches!(self, Self::NoActiveBooking { .. })
    }

    /// Check if this is a CorruptStore error
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true for errors caused by operator input rather than the
    /// environment: the four booking-rule violations.
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration { .. }
                | Self::UnknownRoom { .. }
                | Self::RoomAlreadyBooked { .. }
                | Self::NoActiveBooking { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FrontdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FrontdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FrontdeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FrontdeskError>`.
pub type Result<T> = std::result::Result<T, FrontdeskError>;
