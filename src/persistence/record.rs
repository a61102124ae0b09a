//! Booking record encodings
//!
//! One record per line, newline-terminated. Two encodings exist:
//!
//! ```text
//! csv:   Alice,101,Standard
//! json:  {"customer":"Alice","room":101,"category":"Standard","crc":1234567890}
//! ```
//!
//! The CSV form has no quoting, so it refuses fields containing a comma or a
//! line break. The JSON form escapes everything and carries a CRC32 over the
//! three fields. Decoding accepts either form on any line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::record_checksum;
use super::errors::{PersistenceError, PersistenceResult};
use crate::bookings::Booking;

/// Encoding used when writing booking records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Comma-separated `customer,room,category`
    Csv,
    /// Checksummed JSON object per line
    #[default]
    Json,
}

impl RecordFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Json => "json",
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(RecordFormat::Csv),
            "json" => Ok(RecordFormat::Json),
            other => Err(format!("unknown record format '{}', expected csv or json", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonRecord {
    customer: String,
    room: u32,
    category: String,
    crc: u32,
}

/// Encodes a booking as one line, without the trailing newline.
pub fn encode(booking: &Booking, format: RecordFormat) -> PersistenceResult<String> {
    match format {
        RecordFormat::Csv => encode_csv(booking),
        RecordFormat::Json => encode_json(booking),
    }
}

fn encode_csv(booking: &Booking) -> PersistenceResult<String> {
    check_csv_field("customer_name", &booking.customer_name)?;
    // A leading brace would be decoded as JSON
    if booking.customer_name.starts_with('{') {
        return Err(PersistenceError::unencodable(
            "customer_name",
            "names starting with '{' need the json record format",
        ));
    }
    check_csv_field("category", &booking.category)?;
    Ok(format!(
        "{},{},{}",
        booking.customer_name, booking.room_number, booking.category
    ))
}

fn check_csv_field(field: &str, value: &str) -> PersistenceResult<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(PersistenceError::unencodable(
            field,
            format!("'{}' contains a comma or line break; use the json record format", value),
        ));
    }
    Ok(())
}

fn encode_json(booking: &Booking) -> PersistenceResult<String> {
    let record = JsonRecord {
        customer: booking.customer_name.clone(),
        room: booking.room_number,
        category: booking.category.clone(),
        crc: record_checksum(&booking.customer_name, booking.room_number, &booking.category),
    };
    serde_json::to_string(&record).map_err(|e| {
        PersistenceError::unencodable("record", format!("JSON encoding failed: {}", e))
    })
}

/// Decodes one line. Returns `None` for a malformed record.
///
/// A line starting with `{` is read as JSON, anything else as CSV.
pub fn decode(line: &str) -> Option<Booking> {
    if line.starts_with('{') {
        decode_json(line)
    } else {
        decode_csv(line)
    }
}

fn decode_json(line: &str) -> Option<Booking> {
    let record: JsonRecord = serde_json::from_str(line).ok()?;
    if record_checksum(&record.customer, record.room, &record.category) != record.crc {
        return None;
    }
    Some(Booking::new(record.customer, record.room, record.category))
}

fn decode_csv(line: &str) -> Option<Booking> {
    let mut fields: Vec<&str> = line.split(',').collect();
    // Trailing empty fields do not count toward the field total
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let [customer, room, category] = fields.as_slice() else {
        return None;
    };
    let room_number = room.parse::<u32>().ok()?;
    Some(Booking::new(*customer, room_number, *category))
}
