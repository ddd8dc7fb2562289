//! Contact Book - Main entry point
//!
//! This is the main executable for the contact book assistant: a
//! line-oriented command loop over a single in-memory address book.

use anyhow::Result;
use contact_book::models::AddressBook;
use contact_book::{repl, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting contact book");

    // One address book for the lifetime of the process; nothing persists.
    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = repl::run(&mut book, stdin.lock(), &mut stdout, &config.prompt) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
