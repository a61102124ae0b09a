//! The booking file: durable record of active bookings.

use std::path::{Path, PathBuf};

use super::errors::{PersistenceError, PersistenceResult};
use super::reader::RecordReader;
use super::record::RecordFormat;
use super::writer;
use crate::bookings::Booking;
use crate::observability::{log_event_with_fields, Event};

/// Outcome of replaying the booking file.
///
/// Loading stops at the first I/O error; whatever was read before it is
/// kept in `bookings` and the error is returned alongside.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Well-formed records in file order
    pub bookings: Vec<Booking>,
    /// Number of malformed lines skipped
    pub skipped: usize,
    /// I/O error that cut the load short
    pub error: Option<PersistenceError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Flat-file persistence for bookings.
#[derive(Debug, Clone)]
pub struct BookingFile {
    path: PathBuf,
    format: RecordFormat,
}

impl BookingFile {
    /// No I/O happens until the first operation.
    pub fn new(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoding used for new records.
    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Scratch file used during compaction.
    pub fn temp_path(&self) -> PathBuf {
        writer::temp_path_for(&self.path)
    }

    /// Appends one record.
    ///
    /// # Errors
    ///
    /// `HOTEL_PERSISTENCE_UNENCODABLE` if the booking cannot be written in the
    /// configured format, `HOTEL_PERSISTENCE_WRITE_FAILED` on I/O failure.
    pub fn append(&self, booking: &Booking) -> PersistenceResult<()> {
        writer::append_record(&self.path, booking, self.format)
    }

    /// Rewrites the file without the first record for `customer_name`.
    ///
    /// Returns whether a record was removed. No file means nothing to do.
    pub fn remove_by_customer(&self, customer_name: &str) -> PersistenceResult<bool> {
        let removed = writer::compact_without(&self.path, customer_name)?;
        if removed {
            log_event_with_fields(
                Event::CompactionComplete,
                &[("path", &self.path.display().to_string())],
            );
        }
        Ok(removed)
    }

    /// Reads every well-formed record. Malformed lines are skipped.
    pub fn load_all(&self) -> LoadReport {
        let mut report = LoadReport::default();

        let mut reader = match RecordReader::open(&self.path) {
            Ok(Some(reader)) => reader,
            Ok(None) => return report,
            Err(e) => {
                report.error = Some(e);
                return report;
            }
        };

        loop {
            match reader.read_next() {
                Ok(Some(line)) => match line.booking {
                    Some(booking) => report.bookings.push(booking),
                    None => {
                        report.skipped += 1;
                        log_event_with_fields(
                            Event::RecordSkipped,
                            &[("line", &reader.line_number().to_string())],
                        );
                    }
                },
                Ok(None) => break,
                Err(e) => {
                    report.error = Some(e);
                    break;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = BookingFile::new(temp_dir.path().join("bookings.txt"), RecordFormat::Json);

        let report = file.load_all();
        assert!(report.bookings.is_empty());
        assert_eq!(report.skipped, 0);
        assert!(report.is_complete());
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.txt");
        fs::write(&path, "Carol,102,Deluxe\ngarbage\nDan,abc,Suite\n\nErin,103,Suite\n").unwrap();

        let report = BookingFile::new(&path, RecordFormat::Csv).load_all();
        assert!(report.is_complete());
        assert_eq!(report.skipped, 3);
        assert_eq!(
            report.bookings,
            vec![
                Booking::new("Carol", 102, "Deluxe"),
                Booking::new("Erin", 103, "Suite"),
            ]
        );
    }

    #[test]
    fn test_load_stops_at_read_error_and_keeps_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.txt");
        fs::write(&path, b"Carol,102,Deluxe\n\xff,101,Standard\nErin,103,Suite\n").unwrap();

        let report = BookingFile::new(&path, RecordFormat::Csv).load_all();
        assert!(!report.is_complete());
        assert_eq!(report.bookings, vec![Booking::new("Carol", 102, "Deluxe")]);
    }

    #[test]
    fn test_load_directory_reports_error() {
        let temp_dir = TempDir::new().unwrap();

        let report = BookingFile::new(temp_dir.path(), RecordFormat::Csv).load_all();
        assert!(report.bookings.is_empty());
        assert!(report.error.is_some());
    }

    #[test]
    fn test_mixed_formats_load_together() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.txt");
        fs::write(&path, "Carol,102,Deluxe\n").unwrap();

        let file = BookingFile::new(&path, RecordFormat::Json);
        file.append(&Booking::new("Smith, J", 101, "Standard")).unwrap();

        let report = file.load_all();
        assert_eq!(
            report.bookings,
            vec![
                Booking::new("Carol", 102, "Deluxe"),
                Booking::new("Smith, J", 101, "Standard"),
            ]
        );
    }

    #[test]
    fn test_remove_by_customer() {
        let temp_dir = TempDir::new().unwrap();
        let file = BookingFile::new(temp_dir.path().join("bookings.txt"), RecordFormat::Json);
        file.append(&Booking::new("Alice", 101, "Standard")).unwrap();
        file.append(&Booking::new("Bob", 102, "Deluxe")).unwrap();

        assert!(file.remove_by_customer("alice").unwrap());
        assert!(!file.remove_by_customer("alice").unwrap());
        assert_eq!(file.load_all().bookings, vec![Booking::new("Bob", 102, "Deluxe")]);
        assert!(!file.temp_path().exists());
    }
}
