//! Command execution and the error boundary that renders failures.

use super::messages;
use super::parser::{Command, CommandKind};
use crate::book::{AddressBook, PhoneChange};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// Whether the session should keep reading after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Output of one command: the lines to print and what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Reply {
    fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            flow: Flow::Continue,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    fn silent() -> Self {
        Self::lines(Vec::<String>::new())
    }

    fn exit(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            flow: Flow::Exit,
        }
    }
}

/// Turns input lines into address book operations.
///
/// The router owns the address book for the lifetime of a session and is
/// otherwise stateless between lines.
#[derive(Debug, Default)]
pub struct CommandRouter {
    book: AddressBook,
}

impl CommandRouter {
    /// Create a router over an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and run one line. Never fails: errors become reply text.
    pub fn handle(&mut self, line: &str) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(err) => {
                debug!(error = %err, "Command rejected");
                Reply::lines(render_error(&err))
            }
        }
    }

    /// Run an already-parsed command.
    ///
    /// # Errors
    ///
    /// Returns the `CommandError` raised by the command; callers outside
    /// [`handle`](Self::handle) should pass it through [`render_error`].
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        debug!(command = ?command, "Executing command");

        match command {
            Command::Hello => Ok(Reply::line(messages::GREETING)),
            Command::Add { name, phone } => {
                let reply = messages::added(name.as_str());
                self.book.add_record(Record::new(name, phone));
                Ok(Reply::line(reply))
            }
            Command::ShowAll => Ok(self.show_all()),
            Command::Remove { name } => {
                if self.book.remove_record(&name) {
                    Ok(Reply::line(messages::removed(&name)))
                } else {
                    Err(CommandError::NotFound { name })
                }
            }
            Command::Find { query } => Ok(self.find(&query)),
            Command::Change { name, old, new } => {
                match self.book.change_phone(&name, &old, &new)? {
                    PhoneChange::Changed { old, new } => Ok(Reply::line(
                        messages::phone_changed(&name, old.as_str(), new.as_str()),
                    )),
                    PhoneChange::Unchanged => Ok(Reply::silent()),
                }
            }
            Command::Exit => Ok(Reply::exit(messages::FAREWELL)),
            Command::Unknown => Ok(Reply::line(messages::NOT_UNDERSTOOD)),
        }
    }

    fn show_all(&self) -> Reply {
        if self.book.is_empty() {
            return Reply::line(messages::NO_CONTACTS);
        }
        Reply::lines(self.book.records().flat_map(Record::display_lines))
    }

    fn find(&self, query: &str) -> Reply {
        let mut matches = self.book.find_by_name(query);
        for record in self.book.find_by_phone(query) {
            if !matches.iter().any(|m| m.name() == record.name()) {
                matches.push(record);
            }
        }

        if matches.is_empty() {
            return Reply::line(messages::NOTHING_FOUND);
        }

        let mut lines = vec![messages::CONTACTS_FOUND.to_string()];
        lines.extend(matches.into_iter().flat_map(Record::display_lines));
        Reply::lines(lines)
    }
}

/// Render a command failure as the lines shown to the user.
///
/// This is the only place errors are turned into text.
pub fn render_error(err: &CommandError) -> Vec<String> {
    match err {
        CommandError::NotFound { name } => vec![messages::no_such_contact(name)],
        CommandError::GrammarMismatch {
            command: CommandKind::Find,
        } => vec![messages::LOOKUP_FAILED.to_string()],
        CommandError::GrammarMismatch {
            command: CommandKind::Remove,
        } => Vec::new(),
        CommandError::GrammarMismatch { .. }
        | CommandError::InvalidName(_)
        | CommandError::InvalidPhone(_) => messages::FORMAT_GUIDANCE
            .iter()
            .map(|line| line.to_string())
            .collect(),
    }
}
