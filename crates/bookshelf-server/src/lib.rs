//! Bookshelf HTTP server
//!
//! Exposes [`bookshelf_core::BookService`] over HTTP.
//!
//! # Endpoints
//!
//! - `GET /books?page=N` - One page of books
//! - `POST /books?page=N` - Create a book
//! - `PATCH /books/{id}` - Set a book's rating
//! - `DELETE /books/{id}?page=N` - Delete a book
//! - `GET /health` - Health check

pub mod error;
pub mod logging;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, serve};
