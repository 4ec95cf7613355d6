//! Record store interface
//!
//! The operations in [`crate::service`] only talk to storage through
//! [`RecordStore`]. [`crate::storage::SqliteStore`] is the production
//! implementation.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = SqliteStore::open(&config)?;
//!
//! let book = store.insert_book(&NewBook::new().with_title("Dune"))?;
//! let all = store.all_books()?; // ascending id
//! ```

use crate::models::{Book, BookId, NewBook};
use crate::storage::StorageResult;

/// Persistence for book records
///
/// Collections are always returned in ascending id order so that page
/// slicing is deterministic.
pub trait RecordStore {
    /// All books, ordered by ascending id
    fn all_books(&self) -> StorageResult<Vec<Book>>;

    /// Look up a single book
    fn get_book(&self, id: BookId) -> StorageResult<Option<Book>>;

    /// Insert a book, returning it with its store-assigned id
    fn insert_book(&mut self, book: &NewBook) -> StorageResult<Book>;

    /// Overwrite the stored fields of an existing book
    ///
    /// Returns `false` if no book has this id.
    fn update_book(&mut self, book: &Book) -> StorageResult<bool>;

    /// Delete a book
    ///
    /// Returns `false` if no book has this id.
    fn delete_book(&mut self, id: BookId) -> StorageResult<bool>;

    /// Number of stored books
    fn count_books(&self) -> StorageResult<usize>;
}
