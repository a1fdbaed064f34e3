//! One handler per command.
//!
//! Handlers take the raw argument list and the address book and return the
//! text to show, or a [`BookError`]. They never print and never format
//! errors; that happens once in [`super::dispatch`].

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

use super::parser::Command;

/// Positional argument `index`, or `MissingArguments`.
fn arg(args: &[String], index: usize) -> BookResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArguments)
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`
///
/// Creates the contact when it is new, then appends the phone. The record is
/// stored before the phone is validated, so a bad phone for a new name still
/// leaves the (phoneless) contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };

    find_record_mut(book, name)?.add_phone(phone)?;
    debug!(contact = name, phone, "Phone added");
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = find_record_mut(book, name)?;
    record.find_phone(old_phone)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let record = find_record(book, name)?;
    Ok(format!("{}'s phone numbers: {}", record.name(), record.phone_list()))
}

/// `all`
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("No contacts available.".to_string());
    }
    Ok(book
        .records()
        .map(Record::describe)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let date = arg(args, 1)?;

    find_record_mut(book, name)?.add_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    Ok(match find_record(book, name)?.birthday() {
        Some(birthday) => format!("{}'s birthday is on {}.", name, birthday.to_iso_string()),
        None => format!("{} doesn't have a birthday set.", name),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// `help`
pub fn help() -> BookResult<String> {
    let commands: Vec<String> = Command::ALL
        .iter()
        .map(|command| match command.usage() {
            "" => command.to_string(),
            usage => format!("{} {}", command, usage),
        })
        .collect();
    Ok(format!("Commands: {}", commands.join(", ")))
}
