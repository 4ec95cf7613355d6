//! Storage layer
//!
//! Book records live in a single SQLite table. The schema is created on
//! first open and tagged with a version in `schema_info`.

pub mod error;
pub mod schema;
pub mod sqlite;

pub use error::{StorageError, StorageResult};
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};
pub use sqlite::SqliteStore;
