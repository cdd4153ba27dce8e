//! Line parsing: routes raw input to a typed [`Command`].

use crate::domain::{Name, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ADD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:add)\s+(\w+)\s+(\S+)").expect("Failed to compile add regex")
});

static REMOVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:remove)\s+(\w+)").expect("Failed to compile remove regex")
});

static FIND_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:find)\s+(\w+)").expect("Failed to compile find regex"));

static CHANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:change)\s+(\w+)\s+(\S+)\s+(\S+)").expect("Failed to compile change regex")
});

// Patterns are anchored at the start only: text after a complete command
// is ignored. Phones are captured as whole tokens so a 13-digit value is
// rejected rather than truncated.

const EXIT_WORDS: [&str; 3] = ["exit", "close", "good bye"];

/// Commands that take arguments, and so can fail their grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Remove,
    Find,
    Change,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Find => "find",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed input line.
///
/// `Add` carries already-validated fields. `Change` keeps its numbers raw
/// because the contact must be looked up before they are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: Name, phone: PhoneNumber },
    ShowAll,
    Remove { name: String },
    Find { query: String },
    Change { name: String, old: String, new: String },
    Exit,
    Unknown,
}

impl Command {
    /// Route a line to its command kind and parse its arguments.
    ///
    /// Keywords are matched case-insensitively, the first rule that applies
    /// wins. `add`, `remove`, `find` and `change` route on prefix, so a line
    /// like `add Mike` still reaches the add grammar and fails there.
    ///
    /// # Errors
    ///
    /// - `CommandError::GrammarMismatch` if the arguments do not fit the
    ///   routed command.
    /// - `CommandError::InvalidName` / `CommandError::InvalidPhone` if an
    ///   `add` field fails validation.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if lowered == "hello" {
            Ok(Self::Hello)
        } else if lowered.starts_with("add") {
            Self::parse_add(line)
        } else if lowered == "show all" {
            Ok(Self::ShowAll)
        } else if lowered.starts_with("remove") {
            let caps = REMOVE_REGEX
                .captures(line)
                .ok_or(CommandError::GrammarMismatch { command: CommandKind::Remove })?;
            Ok(Self::Remove {
                name: caps[1].to_string(),
            })
        } else if lowered.starts_with("find") {
            let caps = FIND_REGEX
                .captures(line)
                .ok_or(CommandError::GrammarMismatch { command: CommandKind::Find })?;
            Ok(Self::Find {
                query: caps[1].to_string(),
            })
        } else if lowered.starts_with("change") {
            let caps = CHANGE_REGEX
                .captures(line)
                .ok_or(CommandError::GrammarMismatch { command: CommandKind::Change })?;
            Ok(Self::Change {
                name: caps[1].to_string(),
                old: caps[2].to_string(),
                new: caps[3].to_string(),
            })
        } else if EXIT_WORDS.contains(&lowered.as_str()) {
            Ok(Self::Exit)
        } else {
            Ok(Self::Unknown)
        }
    }

    fn parse_add(line: &str) -> CommandResult<Self> {
        let caps = ADD_REGEX
            .captures(line)
            .ok_or(CommandError::GrammarMismatch { command: CommandKind::Add })?;

        let name = Name::new(&caps[1])?;
        let phone = PhoneNumber::new(&caps[2])?;
        Ok(Self::Add { name, phone })
    }
}
