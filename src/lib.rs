//! hotelbook - a single-tenant hotel room booking utility
//!
//! Rooms, bookings and a flat booking file, kept consistent by one
//! explicitly constructed [`service::BookingService`].

pub mod bookings;
pub mod cli;
pub mod inventory;
pub mod observability;
pub mod persistence;
pub mod service;
