//! CLI module for hotelbook
//!
//! Provides command-line interface for:
//! - menu: interactive booking session (default)
//! - rooms, book, cancel, bookings: one-shot requests with JSON output

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod menu;

pub use args::{Cli, Command};
pub use commands::{boot, execute, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
pub use menu::{ChoiceError, Menu, MenuChoice};
