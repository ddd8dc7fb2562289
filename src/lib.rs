//! Contact Book - a command-line assistant for names, phones, and birthdays.
//!
//! This library provides a validated contact store behind a small
//! line-oriented command surface: add a contact, change a phone, look up
//! a contact's numbers, or list everything.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phones, birthdays)
//! - **models**: the `Record` and `AddressBook` data model
//! - **commands**: keyword parsing and command handlers
//! - **repl**: the interactive read-eval-print loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{execute, parse, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::{AddressBook, Record};
