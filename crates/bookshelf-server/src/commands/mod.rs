//! Command handlers

pub mod config;
pub mod serve;
pub mod status;

use anyhow::Result;

use bookshelf_core::{Config, SqliteStore};

/// Open the configured book store, with a hint on failure
pub fn open_store(config: &Config) -> Result<SqliteStore> {
    SqliteStore::open(config).map_err(|e| {
        if let Some(hint) = e.recovery_suggestion() {
            eprintln!("Hint: {}", hint);
        }
        anyhow::Error::new(e).context(format!(
            "Failed to open book store at {:?}",
            config.sqlite_path()
        ))
    })
}
