//! Interactive session loop.
//!
//! Reads commands line by line, writes one response per command, and saves
//! the address book when the user leaves (or input ends). [`run_session`]
//! works over any reader and is what piped input uses; [`run_interactive`]
//! puts a line editor in front of the same dispatcher for terminals.

use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::commands::{dispatch_line, CommandContext, Outcome};
use crate::repositories::BookRepository;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Settings for one session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Look-ahead for the `birthdays` command, in days.
    pub window_days: i64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

fn load_book(repository: &dyn BookRepository) -> Result<AddressBook> {
    let book = repository
        .load()
        .context("Failed to load address book")?;
    info!(records = book.len(), "Session started");
    Ok(book)
}

fn save_book(repository: &dyn BookRepository, book: &AddressBook) -> Result<()> {
    repository
        .save(book)
        .context("Failed to save address book")?;
    info!(records = book.len(), "Session ended");
    Ok(())
}

/// Run a session over `input`/`output`, loading and saving through `repository`.
///
/// `today` is consulted per command so a session left open past midnight
/// reports birthdays for the new day. Bytes that are not valid UTF-8 are
/// replaced rather than ending the session. If reading fails outright the
/// book is still saved before the error is returned.
pub fn run_session<R, W, F>(
    mut input: R,
    mut output: W,
    repository: &dyn BookRepository,
    today: F,
    options: SessionOptions,
) -> Result<AddressBook>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let mut book = load_book(repository)?;

    writeln!(output, "{}", GREETING)?;

    let mut buffer = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buffer.clear();
        match input.read_until(b'\n', &mut buffer) {
            Ok(0) => {
                info!("Input closed");
                writeln!(output)?;
                break;
            }
            Ok(_) => {}
            Err(error) => {
                warn!(error = %error, "Failed to read command");
                save_book(repository, &book)?;
                return Err(error).context("Failed to read command");
            }
        }

        let line = String::from_utf8_lossy(&buffer);
        let context = CommandContext::new(today()).with_window_days(options.window_days);
        match dispatch_line(&line, &mut book, &context) {
            Some(Outcome::Continue(message)) => writeln!(output, "{}", message)?,
            Some(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                break;
            }
            None => continue,
        }
    }

    save_book(repository, &book)?;
    Ok(book)
}

/// Run a session on the terminal with line editing and in-session history.
///
/// Ctrl-C abandons the current line, Ctrl-D leaves like `exit`. The book is
/// saved however the loop ends.
pub fn run_interactive<F>(
    repository: &dyn BookRepository,
    today: F,
    options: SessionOptions,
) -> Result<AddressBook>
where
    F: Fn() -> NaiveDate,
{
    let mut book = load_book(repository)?;
    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;

    println!("{}", GREETING);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                info!("Input closed");
                break;
            }
            Err(error) => {
                warn!(error = %error, "Failed to read command");
                break;
            }
        };

        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.trim());
        }

        let context = CommandContext::new(today()).with_window_days(options.window_days);
        match dispatch_line(&line, &mut book, &context) {
            Some(Outcome::Continue(message)) => println!("{}", message),
            Some(Outcome::Exit(message)) => {
                println!("{}", message);
                break;
            }
            None => continue,
        }
    }

    save_book(repository, &book)?;
    Ok(book)
}
