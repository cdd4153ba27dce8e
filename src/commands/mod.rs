//! Command parsing and execution.
//!
//! A raw input line is first parsed into a typed [`Command`], then executed
//! against the [`AddressBook`](crate::book::AddressBook) by the
//! [`CommandRouter`]. Every failure is turned into user-facing text at a
//! single boundary so a malformed line can never end the session.

pub mod messages;
mod parser;
mod router;

pub use parser::{Command, CommandKind};
pub use router::{render_error, CommandRouter, Flow, Reply};
