//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::commands::CommandKind;
use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while parsing or executing a command.
///
/// None of these ever leave the command router: each one is rendered into
/// a user-facing message at the command boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An empty contact name was supplied
    #[error("Invalid name: {0}")]
    InvalidName(ValidationError),

    /// A phone number was not exactly 12 digits
    #[error("Invalid phone: {0}")]
    InvalidPhone(ValidationError),

    /// The line does not match the grammar of the command it was routed to
    #[error("Malformed `{command}` command")]
    GrammarMismatch { command: CommandKind },

    /// The referenced contact does not exist
    #[error("Contact not found: {name}")]
    NotFound { name: String },
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::InvalidName(err),
            ValidationError::InvalidPhone(_) => Self::InvalidPhone(err),
        }
    }
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
