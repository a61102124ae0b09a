//! Booking record

use std::fmt;

/// An active booking of one room by one customer.
///
/// `category` is a copy of the room's category at booking time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub customer_name: String,
    pub room_number: u32,
    pub category: String,
}

impl Booking {
    pub fn new(
        customer_name: impl Into<String>,
        room_number: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            room_number,
            category: category.into(),
        }
    }

    /// Case-insensitive customer name match
    pub fn is_for_customer(&self, name: &str) -> bool {
        same_customer(&self.customer_name, name)
    }
}

/// Customer names compare case-insensitively everywhere: in memory and on disk.
pub fn same_customer(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking: {} - Room {} ({})",
            self.customer_name, self.room_number, self.category
        )
    }
}
