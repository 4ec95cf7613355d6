//! Bookshelf Core Library
//!
//! This crate provides the core functionality for Bookshelf, a small
//! paginated CRUD service over book records.
//!
//! # Architecture
//!
//! - **SQLite**: Record store for books, ids assigned on insert
//! - **BookService**: list / update / delete / create, each returning the
//!   requested page of the collection as the operation left it
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let service = BookService::new(SqliteStore::open(&config)?);
//!
//! let created = service.create_book(br#"{"title": "Dune"}"#, Page::FIRST)?;
//! let page = service.list_books(Page::FIRST)?;
//! ```
//!
//! # Modules
//!
//! - `service`: The four operations (main entry point)
//! - `pagination`: Page numbers and slicing
//! - `models`: Book records and request body coercion
//! - `store`: Record store trait
//! - `storage`: SQLite implementation
//! - `response`: Response payloads and the error envelope
//! - `error`: Internal failure causes and reported error kinds
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod response;
pub mod service;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{BookError, ErrorKind, OperationError, OperationResult};
pub use models::{Book, BookId, NewBook};
pub use pagination::{paginate, Page, BOOKS_PER_SHELF};
pub use response::{CreateResponse, DeleteResponse, ErrorResponse, ListResponse, UpdateResponse};
pub use service::BookService;
pub use storage::{SqliteStore, StorageError};
pub use store::RecordStore;
