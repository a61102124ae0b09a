//! Booking persistence
//!
//! Active bookings are kept in a flat file, one record per line. The file is
//! appended to on every booking, compacted (rewritten without the record) on
//! every cancellation, and replayed on startup.
//!
//! # Design Principles
//!
//! - One record per line, newline-terminated
//! - Malformed lines are skipped on load, never fatal
//! - Compaction replaces the file by rename; the original is never deleted first
//! - Every file handle is closed before an operation returns
//! - Errors are returned, never printed; the caller decides how to report them

mod checksum;
mod errors;
mod file;
mod reader;
mod record;
mod writer;

pub use checksum::record_checksum;
pub use errors::{PersistenceError, PersistenceErrorCode, PersistenceResult};
pub use file::{BookingFile, LoadReport};
pub use reader::{RecordLine, RecordReader};
pub use record::{decode, encode, RecordFormat};
