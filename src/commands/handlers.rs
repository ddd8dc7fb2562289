//! Command handlers and the error-to-message adapter.
//!
//! Each handler translates validated user arguments into address book
//! operations and returns a human-readable reply. [`execute`] is the
//! uniform boundary between the validated core and the interactive loop:
//! it converts every [`CommandError`] into its message, so the loop only
//! ever sees a reply line.

use crate::commands::Command;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const UNKNOWN: &str = "Invalid command. Please try again.";

/// Run `command` against `book`, converting any error into its message.
///
/// This never panics and never propagates an error to the caller.
pub fn execute(book: &mut AddressBook, command: Command, args: &[String]) -> String {
    debug!(?command, args = args.len(), "executing command");

    let result = match command {
        Command::Add => add_contact(book, args),
        Command::ChangePhone => change_phone(book, args),
        Command::ShowPhone => show_phone(book, args),
        Command::ShowAll => Ok(book.to_string()),
        Command::Hello => Ok(GREETING.to_string()),
        Command::Exit => Ok(FAREWELL.to_string()),
        Command::Unknown => Ok(UNKNOWN.to_string()),
    };

    result.unwrap_or_else(|err| err.to_string())
}

/// Fetch the argument at `idx` or fail with the argument's name.
fn arg<'a>(args: &'a [String], idx: usize, name: &'static str) -> CommandResult<&'a str> {
    args.get(idx)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(name))
}

/// `add <name> <phone> <birthday>` — create-or-extend a contact.
///
/// An existing contact gains the phone (the birthday argument is still
/// validated but the stored one is kept); a new contact is created with
/// both.
fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = ContactName::new(arg(args, 0, "name")?)?;
    let phone = PhoneNumber::new(arg(args, 1, "phone")?)?;
    let birthday = Birthday::new(arg(args, 2, "birthday")?)?;

    if let Some(record) = book.get_mut(name.as_str()) {
        return Ok(record.add_phone(phone));
    }

    let record = Record::new(name, Some(phone), Some(birthday));
    Ok(book.add_record(record))
}

/// `change <name> <old phone> <new phone>` — replace one phone in place.
fn change_phone(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = ContactName::new(arg(args, 0, "name")?)?;
    let old_phone = PhoneNumber::new(arg(args, 1, "old phone")?)?;
    let new_phone = PhoneNumber::new(arg(args, 2, "new phone")?)?;

    match book.get_mut(name.as_str()) {
        Some(record) => Ok(record.change_phone(&old_phone, new_phone)),
        None => Ok(format!("No contact {} in address book", name)),
    }
}

/// `phone <name>` — list a contact's phone numbers.
fn show_phone(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = ContactName::new(arg(args, 0, "name")?)?;

    let record = book
        .get(name.as_str())
        .ok_or_else(|| CommandError::ContactNotFound(name.as_str().to_string()))?;

    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "The phone number(s) for '{}' is/are: {}.",
        name, phones
    ))
}
