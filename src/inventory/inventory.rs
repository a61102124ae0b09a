//! Fixed room inventory with availability flags.

use std::collections::HashSet;

use super::errors::{InventoryError, InventoryResult};
use super::room::{default_rooms, Room, RoomSpec};

/// Ordered set of rooms. Rooms cannot be added or removed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Builds an inventory from room definitions, in the given order.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, a room number is zero or repeated, or a
    /// category is blank.
    pub fn from_specs(specs: &[RoomSpec]) -> InventoryResult<Self> {
        if specs.is_empty() {
            return Err(InventoryError::Empty);
        }

        let mut seen = HashSet::with_capacity(specs.len());
        let mut rooms = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.number == 0 {
                return Err(InventoryError::ZeroRoomNumber);
            }
            if !seen.insert(spec.number) {
                return Err(InventoryError::DuplicateRoom(spec.number));
            }
            if spec.category.trim().is_empty() {
                return Err(InventoryError::EmptyCategory(spec.number));
            }
            rooms.push(Room::new(spec.number, spec.category.trim()));
        }

        Ok(Self { rooms })
    }

    /// Every room in inventory order, booked or not.
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, room_number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_number() == room_number)
    }

    /// Available rooms in inventory order.
    pub fn list_available(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_available())
    }

    /// First available room whose category matches, ignoring case.
    pub fn find_available_by_category(&self, category: &str) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.is_available() && r.matches_category(category))
    }

    /// Flips a room's availability. Unknown room numbers are ignored.
    pub fn set_availability(&mut self, room_number: u32, available: bool) {
        if let Some(room) = self
            .rooms
            .iter_mut()
            .find(|r| r.room_number() == room_number)
        {
            room.set_available(available);
        }
    }
}

impl Default for RoomInventory {
    fn default() -> Self {
        Self {
            rooms: default_rooms()
                .into_iter()
                .map(|spec| Room::new(spec.number, spec.category))
                .collect(),
        }
    }
}
