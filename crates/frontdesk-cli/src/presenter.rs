//! Operator-facing messages.
//!
//! Every result of a desk action becomes a `Notice`: a severity, a short
//! title and a body. Rendering adds color; the wording lives here only.

use colored::Colorize;

use frontdesk_core::FrontdeskError;
use frontdesk_core::booking::{Booking, RoomStatus};
use frontdesk_core::catalog::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: &'static str,
    pub body: String,
}

impl Notice {
    fn new(level: Level, title: &'static str, body: impl Into<String>) -> Self {
        Self {
            level,
            title,
            body: body.into(),
        }
    }

    pub fn booked(booking: &Booking) -> Self {
        Self::new(
            Level::Info,
            "Booked",
            format!(
                "Room {} booked for {}.\nTotal: ${}",
                booking.room_id, booking.guest_name, booking.total
            ),
        )
    }

    pub fn bookings(bookings: &[Booking]) -> Self {
        if bookings.is_empty() {
            return Self::new(Level::Info, "Bookings", "No current bookings.");
        }
        let lines: Vec<String> = bookings.iter().map(booking_line).collect();
        Self::new(Level::Info, "Current Bookings", lines.join("\n"))
    }

    pub fn checked_out(booking: &Booking) -> Self {
        Self::new(
            Level::Info,
            "Checked Out",
            format!("Room {} is now available.", booking.room_id),
        )
    }

    pub fn deleted(booking: &Booking) -> Self {
        Self::new(
            Level::Info,
            "Deleted",
            format!("Booking for room {} has been deleted.", booking.room_id),
        )
    }

    pub fn room_status(room_id: &str, status: &RoomStatus) -> Self {
        let body = match status.booking() {
            Some(booking) => booking_line(booking),
            None => format!("Room {} is available.", room_id),
        };
        Self::new(Level::Info, "Status", body)
    }

    pub fn from_error(error: &FrontdeskError) -> Self {
        match error {
            FrontdeskError::InvalidDuration { .. } => Self::new(
                Level::Error,
                "Invalid Input",
                "Enter a valid number of days.",
            ),
            FrontdeskError::UnknownRoom { .. } => {
                Self::new(Level::Error, "Error", "Room does not exist.")
            }
            FrontdeskError::RoomAlreadyBooked { .. } => {
                Self::new(Level::Warning, "Unavailable", "Room already booked.")
            }
            FrontdeskError::NoActiveBooking { .. } => Self::new(
                Level::Warning,
                "Error",
                "Room not booked or doesn't exist.",
            ),
            FrontdeskError::CorruptStore { path, message } => Self::new(
                Level::Error,
                "Error",
                format!("The bookings file {} is damaged: {}", path, message),
            ),
            other => Self::new(Level::Error, "Error", other.to_string()),
        }
    }

    /// Plain `Title: body` text.
    #[cfg(test)]
    pub fn plain(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }

    /// Text with the title colored by severity.
    pub fn render(&self) -> String {
        let title = match self.level {
            Level::Info => self.title.green().bold(),
            Level::Warning => self.title.yellow().bold(),
            Level::Error => self.title.red().bold(),
        };
        format!("{}: {}", title, self.body)
    }

    pub fn is_error(&self) -> bool {
        self.level != Level::Info
    }
}

/// `Room 101 - Guest: Alice - Days: 3 - Total: $300`
pub fn booking_line(booking: &Booking) -> String {
    format!(
        "Room {} - Guest: {} - Days: {} - Total: ${}",
        booking.room_id, booking.guest_name, booking.days, booking.total
    )
}

/// `101 - Single - $100`
pub fn room_line(room: &Room) -> String {
    format!("{} - {} - ${}", room.id, room.category, room.nightly_rate)
}

/// The available-rooms panel.
pub fn available_rooms(rooms: &[Room]) -> String {
    let mut out = String::from("Available Rooms");
    if rooms.is_empty() {
        out.push_str("\n(none)");
    }
    for room in rooms {
        out.push('\n');
        out.push_str(&room_line(room));
    }
    out
}
