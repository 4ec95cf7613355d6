//! Status command handler

use anyhow::{Context, Result};

use bookshelf_core::{Config, RecordStore};

use super::open_store;
use crate::output::{Output, OutputFormat};

/// Show database location and book count
pub fn show(config: &Config, output: &Output) -> Result<()> {
    let store = open_store(config)?;
    let count = store.count_books().context("Failed to count books")?;
    let path = config.sqlite_path();
    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "database": path,
                    "database_size": size,
                    "books": count,
                    "address": config.socket_addr()
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", count);
        }
        OutputFormat::Human => {
            println!("Bookshelf Status");
            println!("================");
            println!();
            println!("Storage:");
            println!("  Database: {}", path.display());
            println!("  Size:     {} bytes", size);
            println!();
            println!("Server:");
            println!("  Address:  http://{}", config.socket_addr());
            println!();
            println!("Contents:");
            println!("  Books: {}", count);
        }
    }

    Ok(())
}
