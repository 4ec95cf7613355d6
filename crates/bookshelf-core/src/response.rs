//! # Response Formatting
//!
//! Payloads returned by the book operations, serialized as-is by the HTTP
//! layer.

use serde::Serialize;

use crate::error::ErrorKind;
use crate::models::{Book, BookId};

/// `GET /books`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListResponse {
    pub success: bool,
    pub books: Vec<Book>,
    /// Number of books on this page, not in the whole collection
    pub total_books: usize,
}

impl ListResponse {
    pub fn new(books: Vec<Book>) -> Self {
        let total_books = books.len();
        Self {
            success: true,
            books,
            total_books,
        }
    }
}

/// `PATCH /books/{id}`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateResponse {
    pub success: bool,
    pub id: BookId,
}

impl UpdateResponse {
    pub fn new(id: BookId) -> Self {
        Self { success: true, id }
    }
}

/// `DELETE /books/{id}`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: BookId,
    pub books: Vec<Book>,
    /// Books remaining in the whole collection
    pub total_books: usize,
}

/// `POST /books`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateResponse {
    pub success: bool,
    pub created: BookId,
    pub books: Vec<Book>,
    /// Books in the whole collection, the new one included
    pub total_books: usize,
}

/// Uniform error envelope
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<ErrorKind> for ErrorResponse {
    fn from(kind: ErrorKind) -> Self {
        Self {
            success: false,
            error: kind.code(),
            message: kind.message().to_string(),
        }
    }
}
