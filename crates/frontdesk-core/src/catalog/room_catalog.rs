use std::collections::HashMap;

use super::model::{Room, RoomCategory};
use crate::error::{FrontdeskError, Result};

/// Rooms of the standard deployment: id, category, nightly rate.
const STANDARD_ROOMS: [(&str, RoomCategory, u64); 12] = [
    ("101", RoomCategory::Single, 100),
    ("102", RoomCategory::Double, 150),
    ("103", RoomCategory::Single, 100),
    ("104", RoomCategory::Double, 150),
    ("105", RoomCategory::Suite, 250),
    ("106", RoomCategory::Suite, 250),
    ("201", RoomCategory::Single, 100),
    ("202", RoomCategory::Double, 150),
    ("203", RoomCategory::Single, 100),
    ("204", RoomCategory::Double, 150),
    ("205", RoomCategory::Suite, 250),
    ("206", RoomCategory::Suite, 250),
];

/// The immutable set of bookable rooms.
///
/// Iteration follows the order rooms were given at construction, which is
/// also the order available rooms are listed in.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl RoomCatalog {
    /// Builds a catalog from the given rooms.
    ///
    /// # Errors
    ///
    /// Returns `FrontdeskError::Config` if two rooms share an id or a room
    /// has a zero nightly rate.
    pub fn new(rooms: Vec<Room>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rooms.len());
        for (position, room) in rooms.iter().enumerate() {
            if room.nightly_rate == 0 {
                return Err(FrontdeskError::config(format!(
                    "Room '{}' must have a positive nightly rate",
                    room.id
                )));
            }
            if index.insert(room.id.clone(), position).is_some() {
                return Err(FrontdeskError::config(format!(
                    "Duplicate room id '{}' in catalog",
                    room.id
                )));
            }
        }
        Ok(Self { rooms, index })
    }

    /// The 12-room catalog used by the front desk.
    pub fn standard() -> Self {
        let rooms: Vec<Room> = STANDARD_ROOMS
            .iter()
            .map(|&(id, category, rate)| Room::new(id, category, rate))
            .collect();
        let index = rooms
            .iter()
            .enumerate()
            .map(|(position, room)| (room.id.clone(), position))
            .collect();
        Self { rooms, index }
    }

    /// Looks up a room by id.
    pub fn lookup(&self, room_id: &str) -> Option<&Room> {
        self.index.get(room_id).map(|&position| &self.rooms[position])
    }

    pub fn contains(&self, room_id: &str) -> bool {
        self.index.contains_key(room_id)
    }

    /// Iterates rooms in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = RoomCatalog::standard();
        assert_eq!(catalog.len(), 12);

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids[0], "101");
        assert_eq!(ids[6], "201");
        assert_eq!(ids[11], "206");
    }

    #[test]
    fn test_lookup() {
        let catalog = RoomCatalog::standard();

        let suite = catalog.lookup("205").unwrap();
        assert_eq!(suite.category, RoomCategory::Suite);
        assert_eq!(suite.nightly_rate, 250);

        assert!(catalog.lookup("999").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(!catalog.contains(" 101"));
    }

    #[test]
    fn test_custom_catalog_keeps_order() {
        let catalog = RoomCatalog::new(vec![
            Room::new("B", RoomCategory::Double, 80),
            Room::new("A", RoomCategory::Single, 50),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(catalog.lookup("A").unwrap().nightly_rate, 50);
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let result = RoomCatalog::new(vec![
            Room::new("101", RoomCategory::Single, 100),
            Room::new("101", RoomCategory::Suite, 250),
        ]);
        assert!(matches!(result, Err(FrontdeskError::Config(_))));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let result = RoomCatalog::new(vec![Room::new("101", RoomCategory::Single, 0)]);
        assert!(matches!(result, Err(FrontdeskError::Config(_))));
    }
}
