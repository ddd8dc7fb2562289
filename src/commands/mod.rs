//! Command parsing and execution.
//!
//! This module provides two pieces:
//! - **parser**: keyword dispatch from a raw input line to a [`Command`]
//! - **handlers**: the command implementations plus the uniform
//!   error-to-message adapter, [`execute`]

pub mod handlers;
pub mod parser;

pub use handlers::execute;
pub use parser::{parse, Command};
