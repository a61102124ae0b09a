//! Room types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookable room.
///
/// `room_number` and `category` are fixed at construction. Availability is
/// only flipped through [`RoomInventory::set_availability`].
///
/// [`RoomInventory::set_availability`]: super::RoomInventory::set_availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_number: u32,
    category: String,
    available: bool,
}

impl Room {
    /// Create an available room
    pub fn new(room_number: u32, category: impl Into<String>) -> Self {
        Self {
            room_number,
            category: category.into(),
            available: true,
        }
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Case-insensitive category match
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub(super) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - {}",
            self.room_number,
            self.category,
            if self.available { "Available" } else { "Booked" }
        )
    }
}

/// Configured room definition: a number and its category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomSpec {
    pub number: u32,
    pub category: String,
}

impl RoomSpec {
    pub fn new(number: u32, category: impl Into<String>) -> Self {
        Self {
            number,
            category: category.into(),
        }
    }
}

/// The seed inventory: 101/Standard, 102/Deluxe, 103/Suite.
pub fn default_rooms() -> Vec<RoomSpec> {
    vec![
        RoomSpec::new(101, "Standard"),
        RoomSpec::new(102, "Deluxe"),
        RoomSpec::new(103, "Suite"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_available() {
        let room = Room::new(101, "Standard");
        assert!(room.is_available());
        assert_eq!(room.room_number(), 101);
        assert_eq!(room.category(), "Standard");
    }

    #[test]
    fn test_category_match_ignores_case() {
        let room = Room::new(102, "Deluxe");
        assert!(room.matches_category("deluxe"));
        assert!(room.matches_category("DELUXE"));
        assert!(!room.matches_category(" Deluxe "));
        assert!(!room.matches_category("Suite"));
    }

    #[test]
    fn test_display() {
        let mut room = Room::new(103, "Suite");
        assert_eq!(room.to_string(), "Room 103 (Suite) - Available");
        room.set_available(false);
        assert_eq!(room.to_string(), "Room 103 (Suite) - Booked");
    }
}
