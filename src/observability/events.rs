//! Observable events for hotelbook
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in a booking session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Session startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Booking file replayed into memory
    BookingsLoaded,
    /// Session ending
    Shutdown,

    /// A room moved from Available to Booked
    RoomBooked,
    /// A booking was removed and its room freed
    BookingCancelled,
    /// A booking request found no free room
    NoRoomAvailable,
    /// A cancel request matched no booking
    BookingNotFound,

    /// Booking file rewritten without a cancelled record
    CompactionComplete,
    /// A malformed record line was skipped on load
    RecordSkipped,
    /// A file operation failed; in-memory state was kept
    PersistenceWarning,
}

impl Event {
    /// Returns the event name as emitted in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BookingsLoaded => "BOOKINGS_LOADED",
            Event::Shutdown => "SHUTDOWN",
            Event::RoomBooked => "ROOM_BOOKED",
            Event::BookingCancelled => "BOOKING_CANCELLED",
            Event::NoRoomAvailable => "NO_ROOM_AVAILABLE",
            Event::BookingNotFound => "BOOKING_NOT_FOUND",
            Event::CompactionComplete => "COMPACTION_COMPLETE",
            Event::RecordSkipped => "RECORD_SKIPPED",
            Event::PersistenceWarning => "PERSISTENCE_WARNING",
        }
    }

    /// Returns whether this event reports a degraded condition
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::PersistenceWarning)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::BookingsLoaded,
            Event::Shutdown,
            Event::RoomBooked,
            Event::BookingCancelled,
            Event::NoRoomAvailable,
            Event::BookingNotFound,
            Event::CompactionComplete,
            Event::RecordSkipped,
            Event::PersistenceWarning,
        ];
        for event in events {
            let name = event.as_str();
            assert!(name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_only_persistence_is_warning() {
        assert!(Event::PersistenceWarning.is_warning());
        assert!(!Event::RoomBooked.is_warning());
        assert!(!Event::RecordSkipped.is_warning());
    }
}
