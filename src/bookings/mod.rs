//! Active bookings
//!
//! Bookings are kept in insertion order. Customer names are the lookup key
//! for cancellation and are matched case-insensitively; they are not unique.

mod booking;
mod store;

pub use booking::{same_customer, Booking};
pub use store::BookingStore;
