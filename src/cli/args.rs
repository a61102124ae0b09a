//! CLI argument definitions using clap
//!
//! Commands:
//! - hotelbook [menu]
//! - hotelbook rooms [--all]
//! - hotelbook book --name <name> --category <category>
//! - hotelbook cancel --name <name>
//! - hotelbook bookings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hotelbook - book and cancel hotel rooms from the terminal
#[derive(Parser, Debug)]
#[command(name = "hotelbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Booking file, overriding the configured one
    #[arg(long, global = true)]
    pub bookings_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default)
    Menu,

    /// List available rooms
    Rooms {
        /// Include booked rooms
        #[arg(long)]
        all: bool,
    },

    /// Book a room by category
    Book {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Room category, e.g. Standard, Deluxe, Suite
        #[arg(long)]
        category: String,
    },

    /// Cancel the booking held by a customer
    Cancel {
        /// Customer name
        #[arg(long)]
        name: String,
    },

    /// List active bookings
    Bookings,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
