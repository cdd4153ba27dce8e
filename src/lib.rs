//! Address Book - an interactive command-line contact directory.
//!
//! Contacts hold a name and one or more 12-digit phone numbers and live in
//! process memory only.
//!
//! # Architecture
//!
//! - **domain**: Validated `Name` and `PhoneNumber` value objects
//! - **models**: The `Record` type (a name plus its phones)
//! - **book**: The in-memory `AddressBook` directory
//! - **commands**: Command parsing, execution and error rendering
//! - **session**: The read-route-print loop driven by the binary
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use book::{AddressBook, PhoneChange};
pub use commands::{Command, CommandKind, CommandRouter, Flow, Reply};
pub use config::Config;
pub use domain::{Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
