//! Data models for the address book.
//!
//! A [`Record`] holds one contact's validated fields. The keyed collection of
//! records lives in [`crate::book`].

pub mod record;

pub use record::Record;
