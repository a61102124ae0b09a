//! Persistence error types
//!
//! Error codes:
//! - HOTEL_PERSISTENCE_IO_ERROR
//! - HOTEL_PERSISTENCE_WRITE_FAILED
//! - HOTEL_PERSISTENCE_READ_FAILED
//! - HOTEL_PERSISTENCE_UNENCODABLE
//!
//! None of these are fatal. The booking service logs them as warnings and
//! keeps its in-memory state.

use std::fmt;
use std::io;

/// Persistence-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorCode {
    /// Filesystem failure outside a plain read or write (rename, metadata)
    IoError,
    /// Appending or rewriting the booking file failed
    WriteFailed,
    /// Reading the booking file failed
    ReadFailed,
    /// A field cannot be represented in the configured record format
    Unencodable,
}

impl PersistenceErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            PersistenceErrorCode::IoError => "HOTEL_PERSISTENCE_IO_ERROR",
            PersistenceErrorCode::WriteFailed => "HOTEL_PERSISTENCE_WRITE_FAILED",
            PersistenceErrorCode::ReadFailed => "HOTEL_PERSISTENCE_READ_FAILED",
            PersistenceErrorCode::Unencodable => "HOTEL_PERSISTENCE_UNENCODABLE",
        }
    }
}

impl fmt::Display for PersistenceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Persistence error with context
#[derive(Debug)]
pub struct PersistenceError {
    code: PersistenceErrorCode,
    message: String,
    details: Option<String>,
    source: Option<io::Error>,
}

impl PersistenceError {
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: PersistenceErrorCode::IoError,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: PersistenceErrorCode::WriteFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: PersistenceErrorCode::ReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Read failure at a given 1-based line of the booking file
    pub fn read_failed_at_line(line: usize, source: io::Error) -> Self {
        Self {
            code: PersistenceErrorCode::ReadFailed,
            message: "Failed to read booking file".to_string(),
            details: Some(format!("line: {}", line)),
            source: Some(source),
        }
    }

    pub fn unencodable(field: &str, reason: impl Into<String>) -> Self {
        Self {
            code: PersistenceErrorCode::Unencodable,
            message: reason.into(),
            details: Some(format!("field: {}", field)),
            source: None,
        }
    }

    pub fn code(&self) -> PersistenceErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
