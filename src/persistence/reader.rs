//! Line-oriented reader over the booking file
//!
//! A missing file is an empty file. Every line comes back with its raw bytes
//! and, when it decodes, the booking it holds. A line that is not valid UTF-8
//! is a malformed record like any other. Only I/O errors stop the scan.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::errors::{PersistenceError, PersistenceResult};
use super::record;
use crate::bookings::Booking;

/// One line of the booking file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// Line bytes without the line terminator
    pub raw: Vec<u8>,
    /// Decoded booking, `None` for a malformed line
    pub booking: Option<Booking>,
}

impl RecordLine {
    pub fn is_malformed(&self) -> bool {
        self.booking.is_none()
    }

    /// Line text, with undecodable bytes replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

/// Sequential reader over booking records.
pub struct RecordReader {
    reader: BufReader<File>,
    line_number: usize,
}

impl RecordReader {
    /// Opens the booking file for reading.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn open(path: &Path) -> PersistenceResult<Option<Self>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PersistenceError::read_failed(
                    format!("Failed to open booking file: {}", path.display()),
                    e,
                ))
            }
        };

        Ok(Some(Self {
            reader: BufReader::new(file),
            line_number: 0,
        }))
    }

    /// 1-based number of the last line returned.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next line.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(line))` if a line was read
    /// - `Ok(None)` at end of file
    /// - `Err(HOTEL_PERSISTENCE_READ_FAILED)` on an I/O error
    pub fn read_next(&mut self) -> PersistenceResult<Option<RecordLine>> {
        let mut raw = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut raw)
            .map_err(|e| PersistenceError::read_failed_at_line(self.line_number + 1, e))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let booking = std::str::from_utf8(&raw).ok().and_then(record::decode);
        Ok(Some(RecordLine { raw, booking }))
    }
}
