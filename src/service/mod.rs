//! Booking service
//!
//! Orchestrates the room inventory, the booking store and the booking file.
//! Rooms move between two states only:
//!
//! ```text
//! Available --book--> Booked --cancel--> Available
//! ```
//!
//! Startup replays the booking file before any request is accepted.

mod errors;
#[allow(clippy::module_inception)]
mod service;

pub use errors::{ServiceError, ServiceResult};
pub use service::BookingService;
