//! Operation errors
//!
//! Failures are tracked internally as [`BookError`], which keeps the cause
//! apart (missing record, empty page, bad input, storage). At the boundary of
//! each operation the cause is folded into one of two externally visible
//! kinds, carried by [`OperationError`].

use thiserror::Error;

use crate::models::BookId;
use crate::storage::StorageError;

/// Internal failure causes
#[derive(Error, Debug)]
pub enum BookError {
    /// No book with this id
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// Path segment is not a book id
    #[error("Invalid book id: '{0}'")]
    InvalidId(String),

    /// The requested page holds no books
    #[error("Page {0} contains no books")]
    EmptyPage(i64),

    /// The request could not be read (bad path encoding, oversized body)
    #[error("Unreadable request: {0}")]
    UnreadableRequest(String),

    /// Request body is not valid JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Request body is JSON but not an object
    #[error("Request body must be a JSON object")]
    InvalidBody,

    /// A field could not be read from the request body
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Record store failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for internal book operations
pub type BookResult<T> = Result<T, BookError>;

/// Externally visible error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Resource or page absent (404)
    NotFound,
    /// Operation could not complete (422)
    Unprocessable,
}

impl ErrorKind {
    /// Numeric code reported in the error envelope and as the HTTP status
    pub fn code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Unprocessable => 422,
        }
    }

    /// Fixed message reported in the error envelope
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Resource Not Found",
            ErrorKind::Unprocessable => "Resource Unprocessable",
        }
    }
}

/// A failed operation: the reported kind plus the internal cause
#[derive(Error, Debug)]
#[error("{}: {source}", .kind.message())]
pub struct OperationError {
    pub kind: ErrorKind,
    #[source]
    pub source: BookError,
}

impl OperationError {
    pub fn new(kind: ErrorKind, source: impl Into<BookError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    pub fn not_found(source: impl Into<BookError>) -> Self {
        Self::new(ErrorKind::NotFound, source)
    }

    pub fn unprocessable(source: impl Into<BookError>) -> Self {
        Self::new(ErrorKind::Unprocessable, source)
    }
}

/// Result type for the public operations
pub type OperationResult<T> = Result<T, OperationError>;
