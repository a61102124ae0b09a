//! # Booking Service Errors

use thiserror::Error;

/// Result type for booking operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Booking request failures. Each leaves rooms and bookings unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("No available rooms in category: {0}")]
    NoAvailableRoom(String),

    #[error("No booking found for: {0}")]
    BookingNotFound(String),
}

impl ServiceError {
    /// Stable error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NoAvailableRoom(_) => "HOTEL_NO_AVAILABLE_ROOM",
            ServiceError::BookingNotFound(_) => "HOTEL_BOOKING_NOT_FOUND",
        }
    }
}
