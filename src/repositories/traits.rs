use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the whole address book.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (file, mock).
pub trait BookRepository {
    /// Load the saved address book.
    ///
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Save the full address book, replacing any earlier state.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
