//! Ordered collection of active bookings.

use super::booking::Booking;

/// Active bookings in insertion order. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Removes and returns the first booking for `name`, ignoring case.
    ///
    /// Later bookings under the same name stay until the earlier ones are gone.
    pub fn remove_first_by_customer(&mut self, name: &str) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.is_for_customer(name))?;
        Some(self.bookings.remove(index))
    }

    pub fn find_by_customer(&self, name: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.is_for_customer(name))
    }

    /// Whether any active booking holds `room_number`.
    pub fn references_room(&self, room_number: u32) -> bool {
        self.bookings.iter().any(|b| b.room_number == room_number)
    }

    pub fn list_all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
