//! Observability for hotelbook
//!
//! Structured one-line JSON logs for session lifecycle, booking
//! transitions and persistence warnings. Logging is read-only with respect
//! to booking state and never fails an operation.
//!
//! # Usage
//!
//! ```ignore
//! use hotelbook::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RoomBooked, &[("room", "101")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at
pub fn severity_for(event: Event) -> Severity {
    if event.is_warning() {
        Severity::Warn
    } else if event == Event::RecordSkipped {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
