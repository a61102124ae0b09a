//! Configuration file
//!
//! ```json
//! {
//!   "bookings_file": "bookings.txt",
//!   "record_format": "json",
//!   "log_level": "warn",
//!   "rooms": [{"number": 101, "category": "Standard"}]
//! }
//! ```
//!
//! Every field is optional. Without a config file the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::inventory::{default_rooms, RoomInventory, RoomSpec};
use crate::observability::Severity;
use crate::persistence::{BookingFile, RecordFormat};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Booking file, relative to the working directory unless absolute
    #[serde(default = "default_bookings_file")]
    pub bookings_file: PathBuf,

    /// Encoding for new records (default "json")
    #[serde(default)]
    pub record_format: RecordFormat,

    /// Minimum log severity written to stderr (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Room inventory (default 101/Standard, 102/Deluxe, 103/Suite)
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomSpec>,
}

fn default_bookings_file() -> PathBuf {
    PathBuf::from("bookings.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bookings_file: default_bookings_file(),
            record_format: RecordFormat::default(),
            log_level: default_log_level(),
            rooms: default_rooms(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.bookings_file.as_os_str().is_empty() {
            return Err(CliError::config_error("bookings_file must not be empty"));
        }

        self.log_severity()?;
        RoomInventory::from_specs(&self.rooms)?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(e))
    }

    /// Builds the room inventory described by `rooms`
    pub fn inventory(&self) -> CliResult<RoomInventory> {
        Ok(RoomInventory::from_specs(&self.rooms)?)
    }

    pub fn booking_file(&self) -> BookingFile {
        BookingFile::new(&self.bookings_file, self.record_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
        let path = temp_dir.path().join("hotelbook.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None).unwrap();
        assert_eq!(config.bookings_file, PathBuf::from("bookings.txt"));
        assert_eq!(config.record_format, RecordFormat::Json);
        assert_eq!(config.log_severity().unwrap(), Severity::Warn);
        assert_eq!(config.inventory().unwrap().len(), 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, r#"{"record_format": "csv"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.record_format, RecordFormat::Csv);
        assert_eq!(config.rooms, default_rooms());
    }

    #[test]
    fn test_custom_rooms() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"{"rooms": [{"number": 201, "category": "Twin"}, {"number": 202, "category": "Twin"}]}"#,
        );

        let inventory = Config::load(&path).unwrap().inventory().unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get(202).unwrap().category(), "Twin");
    }

    #[test]
    fn test_rejects_bad_config() {
        let temp_dir = TempDir::new().unwrap();

        for content in [
            r#"{"bookings_file": ""}"#,
            r#"{"log_level": "loud"}"#,
            r#"{"record_format": "xml"}"#,
            r#"{"rooms": []}"#,
            r#"{"rooms": [{"number": 1, "category": "A"}, {"number": 1, "category": "B"}]}"#,
            r#"{"unknown_key": true}"#,
            "not json",
        ] {
            let path = write_config(&temp_dir, content);
            let err = Config::load(&path).unwrap_err();
            assert_eq!(err.code_str(), "HOTEL_CLI_CONFIG_ERROR", "accepted: {}", content);
        }
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::resolve(Some(&temp_dir.path().join("missing.json"))).unwrap_err();
        assert_eq!(err.code_str(), "HOTEL_CLI_CONFIG_ERROR");
    }
}
