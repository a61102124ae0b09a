//! CLI command implementations
//!
//! Every command follows the same boot sequence:
//! 1. Configuration load
//! 2. Logger threshold
//! 3. Booking file replay (BookingService::open)
//!
//! Then either the interactive menu runs or one request is served and its
//! result printed as a single JSON object.

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::bookings::Booking;
use crate::inventory::Room;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::service::{BookingService, ServiceResult};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};
use super::menu::Menu;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Boots a session from parsed arguments and runs the requested command
pub fn run_command(cli: Cli) -> CliResult<()> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(path) = cli.bookings_file {
        config.bookings_file = path;
    }

    let mut service = boot(&config)?;
    let command = cli.command.unwrap_or(Command::Menu);

    let stdout = io::stdout();
    let result = match command {
        Command::Menu => Menu::new(&mut service, io::stdin().lock(), stdout.lock()).run(),
        other => execute(&mut service, &other, &mut stdout.lock()),
    };

    log_event(Event::Shutdown);
    result
}

/// Applies configuration and replays the booking file.
pub fn boot(config: &Config) -> CliResult<BookingService> {
    Logger::set_min_severity(config.log_severity()?);
    log_event(Event::BootStart);

    let inventory = config.inventory()?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("bookings_file", &config.bookings_file.display().to_string()),
            ("record_format", config.record_format.as_str()),
            ("rooms", &inventory.len().to_string()),
        ],
    );

    Ok(BookingService::open(inventory, config.booking_file()))
}

/// Serves one non-interactive command, writing one JSON response.
///
/// `Command::Menu` is refused with `HOTEL_CLI_INVALID_INPUT`; it runs
/// through [`Menu`] instead.
pub fn execute<W: Write>(
    service: &mut BookingService,
    command: &Command,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Command::Menu => Err(CliError::invalid_input(
            "the menu is interactive and cannot be served as a one-shot command",
        )),
        Command::Rooms { all } => {
            let rooms: Vec<Value> = if *all {
                service.rooms().iter().map(room_json).collect()
            } else {
                service.list_available().into_iter().map(room_json).collect()
            };
            write_response(out, json!({ "rooms": rooms }))
        }
        Command::Bookings => {
            let bookings: Vec<Value> = service.list_bookings().iter().map(booking_json).collect();
            write_response(out, json!({ "bookings": bookings }))
        }
        Command::Book { name, category } => {
            let result = service.book(name, category);
            write_outcome(service, result, out)
        }
        Command::Cancel { name } => {
            let result = service.cancel(name);
            write_outcome(service, result, out)
        }
    }
}

fn write_outcome<W: Write>(
    service: &mut BookingService,
    result: ServiceResult<Booking>,
    out: &mut W,
) -> CliResult<()> {
    let warnings: Vec<String> = service
        .take_warnings()
        .iter()
        .map(ToString::to_string)
        .collect();

    match result {
        Ok(booking) => write_response(
            out,
            json!({ "booking": booking_json(&booking), "warnings": warnings }),
        ),
        Err(e) => write_error(out, e.code(), &e.to_string()),
    }
}

fn room_json(room: &Room) -> Value {
    json!({
        "number": room.room_number(),
        "category": room.category(),
        "available": room.is_available(),
    })
}

fn booking_json(booking: &Booking) -> Value {
    json!({
        "customer": booking.customer_name,
        "room": booking.room_number,
        "category": booking.category,
    })
}
