//! The address book: every record of the session keyed by contact name.
//!
//! Records are kept in insertion order so listings and birthday reports come
//! out in the order contacts were first added.

pub mod birthdays;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Keyed collection of contact records.
///
/// Only domain operations are exposed; there is no generic map access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced outright (phone
    /// lists are not merged) and keeps its position in the listing order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            debug!(name = %key, "Replaced existing record");
        } else {
            debug!(name = %key, "Added record");
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        debug!(name = %name, "Deleted record");
        Ok(record)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(move |key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Contacts to congratulate within the next week of `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate within `window_days` of `today`.
    ///
    /// See [`birthdays::congratulation_date`] for the date rule.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = birthdays::congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: date,
                })
            })
            .collect()
    }
}

#[derive(Serialize)]
struct BookRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookData {
    #[serde(default)]
    records: Vec<Record>,
}

// Serde support - records as an ordered list
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BookRef {
            records: self.records().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = BookData::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in data.records {
            book.add_record(record);
        }
        Ok(book)
    }
}
