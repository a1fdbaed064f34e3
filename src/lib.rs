//! Contact Book - an interactive command-line address book.
//!
//! Stores contact names, phone numbers, and birthdays, keeps them in a file
//! between sessions, and reports whose birthday falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact [`Record`]
//! - **book**: The [`AddressBook`] and the upcoming birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **commands**: Command parsing, handlers, and error messages
//! - **session**: The interactive read-dispatch-print loop

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, dispatch_line, parse_input, render_error, Command, CommandContext, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::{run_interactive, run_session, SessionOptions};
