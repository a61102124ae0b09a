//! CRC32 checksums for booking records
//!
//! Uses CRC32 (IEEE polynomial). A record whose stored checksum does not
//! match is treated as malformed and skipped on load.

use crc32fast::Hasher;

const FIELD_SEPARATOR: u8 = 0x1f;

/// Checksum over a booking's fields, separated by the ASCII unit separator.
pub fn record_checksum(customer_name: &str, room_number: u32, category: &str) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(customer_name.as_bytes());
    hasher.update(&[FIELD_SEPARATOR]);
    hasher.update(room_number.to_string().as_bytes());
    hasher.update(&[FIELD_SEPARATOR]);
    hasher.update(category.as_bytes());
    hasher.finalize()
}
