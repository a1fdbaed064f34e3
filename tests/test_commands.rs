//! Command-level tests for the assistant.
//!
//! These drive the dispatcher with raw input lines, the way the session loop
//! does, and check both the response text and the resulting address book.

use chrono::NaiveDate;
use contact_book::{dispatch_line, AddressBook, CommandContext, Outcome, Record};

fn context() -> CommandContext {
    // Friday
    CommandContext::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
}

/// Run one line and return the response text.
fn run(book: &mut AddressBook, line: &str) -> String {
    dispatch_line(line, book, &context())
        .expect("line should not be blank")
        .message()
        .to_string()
}

#[test]
fn test_add_contact_to_empty_book() {
    let mut book = AddressBook::new();

    assert_eq!(run(&mut book, "add alice 1234567890"), "Contact added.");

    let alice = book.find("alice").expect("alice should be stored");
    let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["1234567890"]);
}

#[test]
fn test_change_phone() {
    let mut book = AddressBook::new();
    run(&mut book, "add bob 0000000000");

    assert_eq!(
        run(&mut book, "change bob 0000000000 1111111111"),
        "Phone number updated."
    );
    assert_eq!(book.find("bob").unwrap().phone_list(), "1111111111");
}

#[test]
fn test_change_to_invalid_phone_loses_old_number() {
    let mut book = AddressBook::new();
    run(&mut book, "add bob 0000000000");

    assert_eq!(
        run(&mut book, "change bob 0000000000 12"),
        "Invalid phone number format."
    );
    assert!(book.find("bob").unwrap().phones().is_empty());
}

#[test]
fn test_add_and_show_birthday() {
    let mut book = AddressBook::new();
    run(&mut book, "add carol 5555555555");

    assert_eq!(
        run(&mut book, "add-birthday carol 15.03.1990"),
        "Birthday added for carol."
    );
    assert_eq!(
        run(&mut book, "show-birthday carol"),
        "carol's birthday is on 1990-03-15."
    );
}

#[test]
fn test_birthdays_report_moves_saturday_to_monday() {
    let mut book = AddressBook::new();
    run(&mut book, "add dave 1234567890");
    run(&mut book, "add-birthday dave 15.06.1988");

    assert_eq!(run(&mut book, "birthdays"), "dave - 17.06.2024");
}

#[test]
fn test_delete_missing_contact() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "delete nobody"), "Contact not found.");
}

#[test]
fn test_delete_contact() {
    let mut book = AddressBook::new();
    run(&mut book, "add alice 1234567890");

    assert_eq!(run(&mut book, "delete alice"), "Contact deleted.");
    assert!(book.find("alice").is_none());
    assert_eq!(run(&mut book, "all"), "No contacts available.");
}

#[test]
fn test_phone_lists_all_numbers() {
    let mut book = AddressBook::new();
    run(&mut book, "add alice 1234567890");
    assert_eq!(run(&mut book, "add alice 0987654321"), "Contact updated.");

    assert_eq!(
        run(&mut book, "phone alice"),
        "alice's phone numbers: 1234567890, 0987654321"
    );
}

#[test]
fn test_all_lists_in_insertion_order() {
    let mut book = AddressBook::new();
    run(&mut book, "add zoe 1111111111");
    run(&mut book, "add adam 2222222222");
    run(&mut book, "add-birthday adam 01.01.2000");

    assert_eq!(
        run(&mut book, "all"),
        "Contact name: zoe, phones: 1111111111, birthday: not set\n\
         Contact name: adam, phones: 2222222222, birthday: 01.01.2000"
    );
}

#[test]
fn test_missing_arguments() {
    let mut book = AddressBook::new();
    let incomplete = "Incomplete command. Please provide all necessary arguments.";

    assert_eq!(run(&mut book, "add alice"), incomplete);
    assert_eq!(run(&mut book, "change alice 1234567890"), incomplete);
    assert_eq!(run(&mut book, "phone"), incomplete);
    assert_eq!(run(&mut book, "add-birthday alice"), incomplete);
    assert_eq!(run(&mut book, "show-birthday"), incomplete);
    assert_eq!(run(&mut book, "delete"), incomplete);
}

#[test]
fn test_unknown_contact_lookups() {
    let mut book = AddressBook::new();
    for line in [
        "phone ghost",
        "change ghost 1234567890 0987654321",
        "add-birthday ghost 01.01.2000",
        "show-birthday ghost",
    ] {
        assert_eq!(run(&mut book, line), "Contact not found.", "line: {}", line);
    }
}

#[test]
fn test_validation_messages() {
    let mut book = AddressBook::new();
    run(&mut book, "add alice 1234567890");

    assert_eq!(run(&mut book, "add alice 12345"), "Invalid phone number format.");
    assert_eq!(
        run(&mut book, "add-birthday alice 1990-03-15"),
        "Invalid date format. Use DD.MM.YYYY"
    );
    assert_eq!(
        run(&mut book, "add-birthday alice 31.04.1990"),
        "Invalid date format. Use DD.MM.YYYY"
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add alice 1234567890 extra"), "Contact added.");
    assert_eq!(book.find("alice").unwrap().phones().len(), 1);
}

#[test]
fn test_no_upcoming_birthdays() {
    let mut book = AddressBook::new();
    run(&mut book, "add alice 1234567890");
    assert_eq!(run(&mut book, "birthdays"), "No upcoming birthdays.");

    run(&mut book, "add-birthday alice 01.01.1990");
    assert_eq!(run(&mut book, "birthdays"), "No upcoming birthdays.");
}

#[test]
fn test_birthdays_respects_custom_window() {
    let mut book = AddressBook::new();
    let mut record = Record::new("erin").unwrap();
    record.add_birthday("30.06.1995").unwrap(); // Sunday in 2024
    book.add_record(record);

    let narrow = context();
    let wide = context().with_window_days(30);

    assert_eq!(
        dispatch_line("birthdays", &mut book, &narrow).unwrap().message(),
        "No upcoming birthdays."
    );
    assert_eq!(
        dispatch_line("birthdays", &mut book, &wide).unwrap().message(),
        "erin - 01.07.2024"
    );
}

#[test]
fn test_exit_commands() {
    let mut book = AddressBook::new();
    assert_eq!(
        dispatch_line("close", &mut book, &context()),
        Some(Outcome::Exit("Good bye!".to_string()))
    );
    assert_eq!(
        dispatch_line("exit", &mut book, &context()),
        Some(Outcome::Exit("Good bye!".to_string()))
    );
}

#[test]
fn test_commands_are_case_insensitive() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "HELLO"), "How can I help you?");
    assert_eq!(run(&mut book, "Add Alice 1234567890"), "Contact added.");
    assert!(book.find("Alice").is_some());
    assert!(book.find("alice").is_none());
}
