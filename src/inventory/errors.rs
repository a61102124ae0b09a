//! # Inventory Errors

use thiserror::Error;

/// Result type for inventory construction
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised while building a room inventory from configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Inventory has no rooms")]
    Empty,

    #[error("Room number must be positive")]
    ZeroRoomNumber,

    #[error("Duplicate room number: {0}")]
    DuplicateRoom(u32),

    #[error("Room {0} has an empty category")]
    EmptyCategory(u32),
}
