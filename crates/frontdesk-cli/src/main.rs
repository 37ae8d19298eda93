use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use frontdesk_application::BookingRequest;
use frontdesk_infrastructure::FrontdeskPaths;

mod bootstrap;
mod commands;
mod logging;
mod presenter;

use commands::actions::{self, Action};

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Front Desk - hotel room booking manager", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./frontdesk.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the bookings file (overrides the configuration)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a room
    Book {
        /// Room number
        room: String,
        /// Number of days
        #[arg(allow_hyphen_values = true)]
        days: String,
        /// Guest name
        #[arg(num_args = 0.., trailing_var_arg = true)]
        guest: Vec<String>,
    },
    /// View current bookings
    Bookings,
    /// Check out the guest in a room
    Checkout {
        /// Room number
        room: String,
    },
    /// Delete the booking for a room
    Delete {
        /// Room number
        room: String,
    },
    /// List available rooms
    Available,
    /// Show whether a room is free or booked
    Status {
        /// Room number
        room: String,
    },
    /// Open the interactive desk prompt
    Desk,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let desk = bootstrap::build_desk(
        FrontdeskPaths::from_current_dir()?,
        cli.config.as_deref(),
        cli.data_dir.as_deref(),
    )?;

    let action = match cli.command {
        Commands::Desk => {
            commands::desk::run(&desk)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Book { room, days, guest } => {
            Action::Book(BookingRequest::from_form(&room, &guest.join(" "), &days))
        }
        Commands::Bookings => Action::Bookings,
        Commands::Checkout { room } => Action::Checkout(room.trim().to_string()),
        Commands::Delete { room } => Action::Delete(room.trim().to_string()),
        Commands::Available => Action::Available,
        Commands::Status { room } => Action::Status(room.trim().to_string()),
    };

    let output = actions::perform(&desk.usecase, &action);
    if output.is_error() {
        eprintln!("{}", output.render());
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", output.render());
    Ok(ExitCode::SUCCESS)
}
