//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a command.
///
/// Every variant is caught at the command-handler boundary and rendered
/// as a reply line; none of them ever reaches the interactive loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command requires an existing contact, but none matched
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// Too few words were supplied for the command
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ContactNotFound("Bill".to_string());
        assert_eq!(err.to_string(), "Contact 'Bill' not found.");

        let err = CommandError::MissingArgument("phone");
        assert_eq!(err.to_string(), "Missing argument: phone");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_PROMPT".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_PROMPT: Cannot be empty"
        );
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err = CommandError::from(ValidationError::InvalidPhone("123".to_string()));
        assert_eq!(err.to_string(), "Invalid phone number: 123");
    }
}
