//! SQLite record store
//!
//! ## Tables
//!
//! - `books` - Book records, id assigned by SQLite
//! - `schema_info` - Schema version

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::config::Config;
use crate::models::{Book, BookId, NewBook};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::schema::{init_schema, needs_init};
use crate::store::RecordStore;

const SELECT_BOOK: &str = "SELECT id, title, author, rating FROM books";

/// SQLite-backed [`RecordStore`]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the SQLite database
    pub fn open(config: &Config) -> StorageResult<Self> {
        let path = config.sqlite_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
        }

        let conn = Connection::open(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;

        if needs_init(&conn) {
            init_schema(&conn)?;
        }

        debug!("Opened book store at {:?}", path);
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteStore {
    fn all_books(&self) -> StorageResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_BOOK))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<Result<Vec<Book>, _>>()?;
        Ok(books)
    }

    fn get_book(&self, id: BookId) -> StorageResult<Option<Book>> {
        let book = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?", SELECT_BOOK),
                params![id],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    fn insert_book(&mut self, book: &NewBook) -> StorageResult<Book> {
        self.conn.execute(
            "INSERT INTO books (title, author, rating) VALUES (?, ?, ?)",
            params![book.title, book.author, book.rating],
        )?;

        Ok(Book {
            id: self.conn.last_insert_rowid(),
            title: book.title.clone(),
            author: book.author.clone(),
            rating: book.rating,
        })
    }

    fn update_book(&mut self, book: &Book) -> StorageResult<bool> {
        let changed = self.conn.execute(
            "UPDATE books SET title = ?, author = ?, rating = ? WHERE id = ?",
            params![book.title, book.author, book.rating, book.id],
        )?;
        Ok(changed > 0)
    }

    fn delete_book(&mut self, id: BookId) -> StorageResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?", params![id])?;
        Ok(changed > 0)
    }

    fn count_books(&self) -> StorageResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        rating: row.get(3)?,
    })
}
