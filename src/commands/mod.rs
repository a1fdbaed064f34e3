//! Command dispatch for the assistant.
//!
//! A line of input is parsed into a [`Command`] plus arguments, routed to its
//! handler, and the result turned into exactly one response. Errors from
//! every handler pass through [`render_error`], so no command can abort the
//! session.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use tracing::warn;

/// Per-command inputs that do not come from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Reference date for the `birthdays` report.
    pub today: NaiveDate,
    /// Look-ahead for the `birthdays` report, in days.
    pub window_days: i64,
}

impl CommandContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the response and read the next command.
    Continue(String),
    /// Print the response, save, and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }
}

/// The one-line message shown for a failed command.
///
/// Validation failures already read as user-facing text, so their `Display`
/// is used as is.
pub fn render_error(error: &BookError) -> String {
    match error {
        BookError::Validation(error) => error.to_string(),
        BookError::ContactNotFound(_) => "Contact not found.".to_string(),
        BookError::PhoneNotFound(_) => "Phone not found.".to_string(),
        BookError::MissingArguments => {
            "Incomplete command. Please provide all necessary arguments.".to_string()
        }
    }
}

/// Run `command` against `book` and produce the response.
pub fn dispatch(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    context: &CommandContext,
) -> Outcome {
    if *command == Command::Exit {
        return Outcome::Exit("Good bye!".to_string());
    }

    let message = execute(command, args, book, context).unwrap_or_else(|error| {
        warn!(command = %command, error = %error, "Command failed");
        render_error(&error)
    });
    Outcome::Continue(message)
}

/// Parse and dispatch a raw input line. Blank lines yield `None`.
pub fn dispatch_line(line: &str, book: &mut AddressBook, context: &CommandContext) -> Option<Outcome> {
    let (command, args) = parse_input(line)?;
    Some(dispatch(&command, &args, book, context))
}

fn execute(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    context: &CommandContext,
) -> BookResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(book, context.today, context.window_days),
        Command::Delete => handlers::delete_contact(args, book),
        Command::Help => handlers::help(),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Unknown(_) => Ok("Invalid command.".to_string()),
    }
}
