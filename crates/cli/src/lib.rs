//! Interactive console reservation desk.
//!
//! Loads the room catalog, builds the hotel, and runs one booking session
//! over stdin/stdout.

pub mod catalog;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod session;

use std::io;

pub use catalog::RoomCatalog;
pub use config::Config;
pub use error::CliError;
pub use session::{Session, SessionOutcome};

/// Runs one booking session against the configured catalog on stdin/stdout.
pub fn run(config: &Config) -> Result<SessionOutcome, CliError> {
    let mut hotel = RoomCatalog::load(config)?.into_hotel()?;
    tracing::info!(
        hotel = hotel.name(),
        rooms = hotel.rooms().len(),
        "inventory loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut hotel, stdin.lock(), stdout.lock());
    session.run()
}
