//! Booking service: keeps rooms, bookings and the booking file in step.

use crate::bookings::{Booking, BookingStore};
use crate::inventory::{Room, RoomInventory};
use crate::observability::{log_event_with_fields, Event};
use crate::persistence::{BookingFile, PersistenceError};

use super::errors::{ServiceError, ServiceResult};

/// Owns the inventory, the active bookings and their persistence.
///
/// A room is Booked iff an active booking references it. Persistence
/// failures never undo an in-memory change: they are logged and queued for
/// the caller in [`take_warnings`](Self::take_warnings).
#[derive(Debug)]
pub struct BookingService {
    inventory: RoomInventory,
    bookings: BookingStore,
    file: BookingFile,
    warnings: Vec<PersistenceError>,
}

impl BookingService {
    /// Replays the booking file into `inventory` and returns a ready service.
    ///
    /// Every loaded booking marks its room Booked. Bookings for rooms not in
    /// the inventory are kept as-is. A read error stops the replay; the
    /// bookings read so far are kept and the error is queued as a warning.
    pub fn open(inventory: RoomInventory, file: BookingFile) -> Self {
        let mut service = Self {
            inventory,
            bookings: BookingStore::new(),
            file,
            warnings: Vec::new(),
        };

        let report = service.file.load_all();
        for booking in report.bookings {
            service.inventory.set_availability(booking.room_number, false);
            service.bookings.add(booking);
        }

        log_event_with_fields(
            Event::BookingsLoaded,
            &[
                ("count", &service.bookings.len().to_string()),
                ("path", &service.file.path().display().to_string()),
                ("skipped", &report.skipped.to_string()),
            ],
        );

        if let Some(e) = report.error {
            service.warn("load", e);
        }

        service
    }

    /// Books the first available room in `category` (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ServiceError::NoAvailableRoom`] if every room in the category is
    /// booked or the category does not exist. Nothing changes in that case.
    pub fn book(&mut self, customer_name: &str, category: &str) -> ServiceResult<Booking> {
        let Some(room) = self.inventory.find_available_by_category(category) else {
            log_event_with_fields(Event::NoRoomAvailable, &[("category", category)]);
            return Err(ServiceError::NoAvailableRoom(category.to_string()));
        };

        let booking = Booking::new(customer_name, room.room_number(), room.category());
        self.inventory.set_availability(booking.room_number, false);
        self.bookings.add(booking.clone());

        log_event_with_fields(
            Event::RoomBooked,
            &[
                ("category", &booking.category),
                ("customer", &booking.customer_name),
                ("room", &booking.room_number.to_string()),
            ],
        );

        if let Err(e) = self.file.append(&booking) {
            self.warn("book", e);
        }

        Ok(booking)
    }

    /// Cancels the first booking held by `customer_name` (case-insensitive)
    /// and frees its room once no other booking references it.
    ///
    /// # Errors
    ///
    /// [`ServiceError::BookingNotFound`] if no active booking matches.
    pub fn cancel(&mut self, customer_name: &str) -> ServiceResult<Booking> {
        let Some(booking) = self.bookings.remove_first_by_customer(customer_name) else {
            log_event_with_fields(Event::BookingNotFound, &[("customer", customer_name)]);
            return Err(ServiceError::BookingNotFound(customer_name.to_string()));
        };

        // A loaded file may hold two records for one room
        if !self.bookings.references_room(booking.room_number) {
            self.inventory.set_availability(booking.room_number, true);
        }

        log_event_with_fields(
            Event::BookingCancelled,
            &[
                ("customer", &booking.customer_name),
                ("room", &booking.room_number.to_string()),
            ],
        );

        // Match on the stored name so the file drops the same record memory did
        if let Err(e) = self.file.remove_by_customer(&booking.customer_name) {
            self.warn("cancel", e);
        }

        Ok(booking)
    }

    /// Available rooms in inventory order.
    pub fn list_available(&self) -> Vec<&Room> {
        self.inventory.list_available().collect()
    }

    /// Active bookings in booking order.
    pub fn list_bookings(&self) -> &[Booking] {
        self.bookings.list_all()
    }

    /// Every room with its current status.
    pub fn rooms(&self) -> &[Room] {
        self.inventory.all()
    }

    /// First active booking for `customer_name`, ignoring case.
    pub fn booking_for(&self, customer_name: &str) -> Option<&Booking> {
        self.bookings.find_by_customer(customer_name)
    }

    pub fn persistence(&self) -> &BookingFile {
        &self.file
    }

    /// Drains persistence warnings raised since the last call.
    pub fn take_warnings(&mut self) -> Vec<PersistenceError> {
        std::mem::take(&mut self.warnings)
    }

    fn warn(&mut self, operation: &str, error: PersistenceError) {
        log_event_with_fields(
            Event::PersistenceWarning,
            &[
                ("code", error.code().code()),
                ("error", &error.to_string()),
                ("operation", operation),
            ],
        );
        self.warnings.push(error);
    }
}
