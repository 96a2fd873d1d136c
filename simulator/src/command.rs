//! Command grammar for exam line scripts.
//!
//! A script is a count line `N` followed by N command lines. Each command
//! line is whitespace-tokenized and the first token selects the command:
//!
//! - `READY <id>` - participant `<id>` joins the back of the line
//! - `PASSED` - the front participant is dismissed
//! - `EXTRA` - the front participant requeues at the back
//!
//! Tokens past the ones a command consumes are ignored, as are lines past
//! the declared count. A script that fails to parse aborts the run before
//! any simulation happens, so malformed input never produces partial
//! dismissal output.

use thiserror::Error;

/// Errors raised while parsing a command line or a whole script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first token of a command line is not in the grammar.
    #[error("line {line_no}: unknown command '{token}'")]
    UnknownCommand { line_no: usize, token: String },

    /// A `READY` line has no identifier token.
    #[error("line {line_no}: READY requires a participant identifier")]
    MissingIdentifier { line_no: usize },

    /// A command line contains no tokens at all.
    #[error("line {line_no}: empty command line")]
    EmptyCommand { line_no: usize },

    /// The count header is not a base-10 count.
    #[error("invalid command count '{token}'")]
    InvalidCount { token: String },

    /// The script ends before the declared number of command lines.
    #[error("script declares {expected} commands but only {found} lines follow")]
    UnexpectedEndOfScript { expected: usize, found: usize },
}

/// A single line-event in an exam line script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A new participant joins the back of the waiting line.
    Ready { id: String },

    /// The front participant is dismissed and recorded.
    Passed,

    /// The front participant forfeits their turn and requeues at the back.
    Extra,
}

impl Command {
    /// Parse one command line.
    ///
    /// `line_no` is the 1-based script line number, used only for
    /// diagnostics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exam_line_core::Command;
    ///
    /// let command = Command::parse(2, "READY alice").unwrap();
    /// assert_eq!(command, Command::Ready { id: "alice".to_string() });
    /// ```
    pub fn parse(line_no: usize, line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();

        let keyword = tokens.next().ok_or(CommandError::EmptyCommand { line_no })?;

        match keyword {
            "READY" => {
                let id = tokens
                    .next()
                    .ok_or(CommandError::MissingIdentifier { line_no })?;
                Ok(Command::Ready { id: id.to_string() })
            }
            "PASSED" => Ok(Command::Passed),
            "EXTRA" => Ok(Command::Extra),
            other => Err(CommandError::UnknownCommand {
                line_no,
                token: other.to_string(),
            }),
        }
    }

    /// Keyword this command was written with, for diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Ready { .. } => "READY",
            Command::Passed => "PASSED",
            Command::Extra => "EXTRA",
        }
    }
}

/// Parse a whole script: a count line `N` followed by N command lines.
///
/// Reads exactly N command lines; anything after them is ignored. Fewer
/// than N command lines is an error.
///
/// # Example
///
/// ```rust
/// use exam_line_core::{parse_script, Command};
///
/// let commands = parse_script("2\nREADY alice\nPASSED\n").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[1], Command::Passed);
/// ```
pub fn parse_script(input: &str) -> Result<Vec<Command>, CommandError> {
    let mut lines = input.lines();

    let header = lines.next().unwrap_or("").trim();
    let count: usize = header.parse().map_err(|_| CommandError::InvalidCount {
        token: header.to_string(),
    })?;

    let mut commands = Vec::with_capacity(count);
    for (offset, line) in lines.take(count).enumerate() {
        // Command lines start at script line 2, after the count header.
        commands.push(Command::parse(offset + 2, line)?);
    }

    if commands.len() < count {
        return Err(CommandError::UnexpectedEndOfScript {
            expected: count,
            found: commands.len(),
        });
    }

    Ok(commands)
}
