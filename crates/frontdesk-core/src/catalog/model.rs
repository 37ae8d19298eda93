//! Room domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room category label shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    Single,
    Double,
    Suite,
}

impl RoomCategory {
    /// Returns the display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Single => "Single",
            RoomCategory::Double => "Double",
            RoomCategory::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Opaque unique identifier (a 3-digit room number in the standard catalog).
    pub id: String,
    /// Category label.
    pub category: RoomCategory,
    /// Price per night in whole currency units.
    pub nightly_rate: u64,
}

impl Room {
    /// Creates a new room entry.
    pub fn new(id: impl Into<String>, category: RoomCategory, nightly_rate: u64) -> Self {
        Self {
            id: id.into(),
            category,
            nightly_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(RoomCategory::Single.to_string(), "Single");
        assert_eq!(RoomCategory::Suite.as_str(), "Suite");
    }

    #[test]
    fn test_room_new() {
        let room = Room::new("101", RoomCategory::Double, 150);
        assert_eq!(room.id, "101");
        assert_eq!(room.category, RoomCategory::Double);
        assert_eq!(room.nightly_rate, 150);
    }
}
