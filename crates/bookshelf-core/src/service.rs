//! Book operations
//!
//! [`BookService`] is the request context: it owns the record store and every
//! operation goes through it. Mutating operations recompute the page the
//! caller asked for from the post-mutation collection, so a response always
//! reflects the store as the operation left it.
//!
//! Each operation folds its failures into a single reported kind:
//!
//! | Operation | Missing book | Anything else |
//! |-----------|--------------|---------------|
//! | list      | -            | NotFound      |
//! | update    | NotFound     | NotFound      |
//! | delete    | NotFound     | Unprocessable |
//! | create    | -            | Unprocessable |

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::error::{BookError, BookResult, OperationError, OperationResult};
use crate::models::{as_object, coerce_rating, parse_body, BookId, NewBook};
use crate::pagination::{paginate, Page};
use crate::response::{CreateResponse, DeleteResponse, ListResponse, UpdateResponse};
use crate::storage::{StorageError, StorageResult};
use crate::store::RecordStore;

/// Shared context holding the record store
pub struct BookService<S> {
    store: Mutex<S>,
}

impl<S: RecordStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Lock the store for the duration of one operation
    fn store(&self) -> StorageResult<MutexGuard<'_, S>> {
        self.store.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// List one page of books
    ///
    /// Fails with `NotFound` when the page is empty, even if other pages
    /// hold books.
    pub fn list_books(&self, page: Page) -> OperationResult<ListResponse> {
        let books = self
            .store()
            .and_then(|store| store.all_books())
            .map_err(OperationError::not_found)?;

        let current = paginate(&books, page);
        debug!(
            "Listing page {}: {} of {} books",
            page.number(),
            current.len(),
            books.len()
        );

        if current.is_empty() {
            return Err(OperationError::not_found(BookError::EmptyPage(page.number())));
        }

        Ok(ListResponse::new(current))
    }

    /// Set a book's rating from a `{"rating": ...}` body
    ///
    /// Only `rating` is read; a body without it leaves the book unchanged.
    pub fn update_book(&self, id: BookId, body: &[u8]) -> OperationResult<UpdateResponse> {
        self.try_update(id, body).map_err(OperationError::not_found)
    }

    fn try_update(&self, id: BookId, body: &[u8]) -> BookResult<UpdateResponse> {
        let mut store = self.store()?;
        let mut book = store.get_book(id)?.ok_or(BookError::NotFound(id))?;

        let body = parse_body(body)?;
        if let Some(rating) = as_object(&body)?.get("rating") {
            book.set_rating(coerce_rating(rating)?);
        }

        if !store.update_book(&book)? {
            return Err(BookError::NotFound(id));
        }

        info!("Updated book {} (rating={:?})", id, book.rating);
        Ok(UpdateResponse::new(book.id))
    }

    /// Delete a book and return the requested page of what remains
    pub fn delete_book(&self, id: BookId, page: Page) -> OperationResult<DeleteResponse> {
        let mut store = self.store().map_err(OperationError::unprocessable)?;

        match store.get_book(id) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(OperationError::not_found(BookError::NotFound(id))),
            Err(e) => return Err(OperationError::unprocessable(e)),
        }

        let deleted = store
            .delete_book(id)
            .map_err(OperationError::unprocessable)?;
        if !deleted {
            return Err(OperationError::not_found(BookError::NotFound(id)));
        }
        info!("Deleted book {}", id);

        let remaining = store.all_books().map_err(OperationError::unprocessable)?;
        Ok(DeleteResponse {
            success: true,
            deleted: id,
            books: paginate(&remaining, page),
            total_books: remaining.len(),
        })
    }

    /// Insert a book from a `{"title", "author", "rating"}` body and return
    /// the requested page of the updated collection
    pub fn create_book(&self, body: &[u8], page: Page) -> OperationResult<CreateResponse> {
        self.try_create(body, page)
            .map_err(OperationError::unprocessable)
    }

    fn try_create(&self, body: &[u8], page: Page) -> BookResult<CreateResponse> {
        let new_book = NewBook::from_json(&parse_body(body)?)?;

        let mut store = self.store()?;
        let created = store.insert_book(&new_book)?;
        info!("Created book {}", created.id);

        let books = store.all_books()?;
        Ok(CreateResponse {
            success: true,
            created: created.id,
            books: paginate(&books, page),
            total_books: books.len(),
        })
    }

    /// Number of books in the store
    pub fn count_books(&self) -> StorageResult<usize> {
        self.store()?.count_books()
    }
}
