//! Booking file writes: append and compaction
//!
//! Appends open the file in append mode, write one record and sync before
//! the handle is dropped.
//!
//! Compaction rewrites the whole file without one record:
//! 1. Stream every kept line into `<file>.tmp`
//! 2. fsync the temp file
//! 3. Rename the temp file over the original
//!
//! The original is never deleted first, so a crash mid-rewrite leaves either
//! the old file or the new one in place.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::errors::{PersistenceError, PersistenceResult};
use super::reader::RecordReader;
use super::record::{self, RecordFormat};
use crate::bookings::Booking;

/// Appends one booking record to the file, creating it if missing.
pub fn append_record(path: &Path, booking: &Booking, format: RecordFormat) -> PersistenceResult<()> {
    let mut line = record::encode(booking, format)?;
    line.push('\n');

    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PersistenceError::write_failed(
                format!("Failed to open booking file: {}", path.display()),
                e,
            )
        })?;

    file.write_all(line.as_bytes()).map_err(|e| {
        PersistenceError::write_failed(
            format!("Failed to save booking for: {}", booking.customer_name),
            e,
        )
    })?;

    file.sync_data().map_err(|e| {
        PersistenceError::write_failed(
            format!("fsync failed after saving booking for: {}", booking.customer_name),
            e,
        )
    })?;

    Ok(())
}

/// Path of the temporary file used while compacting `path`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Rewrites the file without the first record for `customer_name`.
///
/// Names compare case-insensitively, as in the in-memory store. Lines that
/// do not decode are carried over unchanged. Returns whether a record was
/// dropped; a missing file is a no-op returning `false`.
pub fn compact_without(path: &Path, customer_name: &str) -> PersistenceResult<bool> {
    let Some(reader) = RecordReader::open(path)? else {
        return Ok(false);
    };

    let temp_path = temp_path_for(path);
    // The reader is consumed so the original is closed before the rename
    let removed = match write_compacted(reader, &temp_path, customer_name) {
        Ok(removed) => removed,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PersistenceError::io_error(
            format!("Failed to replace booking file: {}", path.display()),
            e,
        )
    })?;

    sync_parent_dir(path);

    Ok(removed)
}

fn write_compacted(
    mut reader: RecordReader,
    temp_path: &Path,
    customer_name: &str,
) -> PersistenceResult<bool> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| {
            PersistenceError::write_failed(
                format!("Failed to create temp file: {}", temp_path.display()),
                e,
            )
        })?;
    let mut writer = BufWriter::new(file);
    let mut removed = false;

    while let Some(line) = reader.read_next()? {
        if !removed
            && line
                .booking
                .as_ref()
                .is_some_and(|b| b.is_for_customer(customer_name))
        {
            removed = true;
            continue;
        }
        // Bytes are copied as read so undecodable lines survive untouched
        writer
            .write_all(&line.raw)
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|e| PersistenceError::write_failed("Failed to write temp file", e))?;
    }

    let file = writer.into_inner().map_err(|e| {
        PersistenceError::write_failed("Failed to flush temp file", e.into_error())
    })?;
    file.sync_all()
        .map_err(|e| PersistenceError::write_failed("fsync failed on temp file", e))?;

    Ok(removed)
}

fn ensure_parent_dir(path: &Path) -> PersistenceResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                PersistenceError::write_failed(
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })
        }
        _ => Ok(()),
    }
}

// Best effort: make the rename durable
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn booking_file(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("bookings.txt")
    }

    #[test]
    fn test_append_creates_file_and_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("bookings.txt");

        append_record(&path, &Booking::new("Alice", 101, "Standard"), RecordFormat::Csv).unwrap();
        append_record(&path, &Booking::new("Bob", 102, "Deluxe"), RecordFormat::Csv).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Alice,101,Standard\nBob,102,Deluxe\n"
        );
    }

    #[test]
    fn test_append_unencodable_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = booking_file(&temp_dir);

        let err = append_record(&path, &Booking::new("Smith, J", 101, "Standard"), RecordFormat::Csv)
            .unwrap_err();
        assert_eq!(err.code().code(), "HOTEL_PERSISTENCE_UNENCODABLE");
        assert!(!path.exists());
    }

    #[test]
    fn test_append_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = append_record(temp_dir.path(), &Booking::new("Alice", 101, "Standard"), RecordFormat::Json)
            .unwrap_err();
        assert_eq!(err.code().code(), "HOTEL_PERSISTENCE_WRITE_FAILED");
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path_for(Path::new("data/bookings.txt")),
            PathBuf::from("data/bookings.txt.tmp")
        );
    }

    #[test]
    fn test_compact_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = booking_file(&temp_dir);

        assert!(!compact_without(&path, "Alice").unwrap());
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_compact_removes_first_match_ignoring_case() {
        let temp_dir = TempDir::new().unwrap();
        let path = booking_file(&temp_dir);
        fs::write(&path, "Alice,101,Standard\nBob,102,Deluxe\nalice,103,Suite\n").unwrap();

        assert!(compact_without(&path, "ALICE").unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Bob,102,Deluxe\nalice,103,Suite\n"
        );
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_compact_keeps_malformed_lines_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = booking_file(&temp_dir);
        fs::write(&path, "# legacy header\nAlice,101,Standard\nAlice,xx,Suite\n").unwrap();

        assert!(compact_without(&path, "alice").unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# legacy header\nAlice,xx,Suite\n"
        );
    }

    #[test]
    fn test_compact_without_match_keeps_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = booking_file(&temp_dir);
        append_record(&path, &Booking::new("Bob", 102, "Deluxe"), RecordFormat::Json).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(!compact_without(&path, "Alice").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
