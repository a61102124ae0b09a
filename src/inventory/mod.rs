//! Room inventory
//!
//! A fixed, ordered set of rooms. Each room is either Available or Booked;
//! the booking service is the only writer of that flag.

mod errors;
#[allow(clippy::module_inception)]
mod inventory;
mod room;

pub use errors::{InventoryError, InventoryResult};
pub use inventory::RoomInventory;
pub use room::{default_rooms, Room, RoomSpec};
