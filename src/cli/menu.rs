//! Interactive menu loop
//!
//! ```text
//! 1. View Available Rooms
//! 2. Book Room
//! 3. Cancel Booking
//! 4. View Bookings
//! 5. Exit
//! ```
//!
//! Reads from any `BufRead` and writes to any `Write` so sessions can be
//! scripted. End of input behaves like "Exit".

use std::io::{BufRead, Write};

use super::errors::CliResult;
use crate::service::BookingService;

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAvailable,
    Book,
    Cancel,
    ViewBookings,
    Exit,
}

/// Why a typed line is not a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// A number outside 1-5
    OutOfRange,
    /// Not a number at all
    NotANumber,
}

impl MenuChoice {
    /// Maps a typed line to a choice.
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::ViewAvailable),
            Ok(2) => Ok(MenuChoice::Book),
            Ok(3) => Ok(MenuChoice::Cancel),
            Ok(4) => Ok(MenuChoice::ViewBookings),
            Ok(5) => Ok(MenuChoice::Exit),
            Ok(_) => Err(ChoiceError::OutOfRange),
            Err(_) => Err(ChoiceError::NotANumber),
        }
    }
}

/// Menu session over an explicit service, input and output.
pub struct Menu<'a, R, W> {
    service: &'a mut BookingService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut BookingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until "Exit" or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::ViewAvailable) => self.view_available()?,
                Ok(MenuChoice::Book) => {
                    if !self.book()? {
                        break;
                    }
                }
                Ok(MenuChoice::Cancel) => {
                    if !self.cancel()? {
                        break;
                    }
                }
                Ok(MenuChoice::ViewBookings) => self.view_bookings()?,
                Ok(MenuChoice::Exit) => break,
                Err(ChoiceError::OutOfRange) => writeln!(self.output, "Invalid option.")?,
                Err(ChoiceError::NotANumber) => {
                    writeln!(self.output, "Please enter a number between 1 and 5.")?
                }
            }
            self.print_warnings()?;
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> CliResult<()> {
        write!(
            self.output,
            "\nHotel Booking System\n\
             1. View Available Rooms\n\
             2. Book Room\n\
             3. Cancel Booking\n\
             4. View Bookings\n\
             5. Exit\n\
             Choose option: "
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn view_available(&mut self) -> CliResult<()> {
        let rooms = self.service.list_available();
        if rooms.is_empty() {
            writeln!(self.output, "No rooms available.")?;
        }
        for room in rooms {
            writeln!(self.output, "{}", room)?;
        }
        Ok(())
    }

    fn view_bookings(&mut self) -> CliResult<()> {
        let bookings = self.service.list_bookings();
        if bookings.is_empty() {
            writeln!(self.output, "No bookings yet.")?;
        }
        for booking in bookings {
            writeln!(self.output, "{}", booking)?;
        }
        Ok(())
    }

    // Returns false when input ended mid-prompt
    fn book(&mut self) -> CliResult<bool> {
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Enter room category (Standard/Deluxe/Suite): ")? else {
            return Ok(false);
        };

        match self.service.book(&name, &category) {
            Ok(booking) => {
                writeln!(self.output, "Payment successful. Room booked!")?;
                writeln!(self.output, "{}", booking)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn cancel(&mut self) -> CliResult<bool> {
        let Some(name) = self.prompt("Enter your name to cancel: ")? else {
            return Ok(false);
        };

        match self.service.cancel(&name) {
            Ok(_) => writeln!(self.output, "Booking cancelled.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn print_warnings(&mut self) -> CliResult<()> {
        for warning in self.service.take_warnings() {
            writeln!(self.output, "Warning: {}", warning)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::RoomInventory;
    use crate::persistence::{BookingFile, RecordFormat};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(temp_dir: &TempDir, script: &str) -> (BookingService, String) {
        let file = BookingFile::new(temp_dir.path().join("bookings.txt"), RecordFormat::Csv);
        let mut service = BookingService::open(RoomInventory::default(), file);
        let mut output = Vec::new();
        Menu::new(&mut service, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        (service, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1\n"), Ok(MenuChoice::ViewAvailable));
        assert_eq!(MenuChoice::parse(" 5 "), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("-1"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("two"), Err(ChoiceError::NotANumber));
        assert_eq!(MenuChoice::parse(""), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_book_and_view() {
        let temp_dir = TempDir::new().unwrap();
        let (service, output) = run_script(&temp_dir, "2\nAlice\nstandard\n4\n1\n5\n");

        assert!(output.contains("Payment successful. Room booked!"));
        assert!(output.contains("Booking: Alice - Room 101 (Standard)"));
        assert!(output.contains("Room 102 (Deluxe) - Available"));
        assert!(!output.contains("Room 101 (Standard) - Available"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(service.list_bookings().len(), 1);
    }

    #[test]
    fn test_failures_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_script(&temp_dir, "3\nNobody\n2\nBob\nPenthouse\n4\n5\n");

        assert!(output.contains("No booking found for: Nobody"));
        assert!(output.contains("No available rooms in category: Penthouse"));
        assert!(output.contains("No bookings yet."));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_script(&temp_dir, "7\nabc\n5\n");

        assert!(output.contains("Invalid option."));
        assert!(output.contains("Please enter a number between 1 and 5."));
        assert_eq!(output.matches("Choose option: ").count(), 3);
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_script(&temp_dir, "2\nAlice\n");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_persistence_warning_is_printed() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_script(&temp_dir, "2\nSmith, J\nSuite\n5\n");
        assert!(output.contains("Payment successful. Room booked!"));
        assert!(output.contains("Warning: HOTEL_PERSISTENCE_UNENCODABLE"));
    }
}
