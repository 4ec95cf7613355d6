//! Serve command handler

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use bookshelf_core::{BookService, Config};
use bookshelf_server::{build_router, serve};

use super::open_store;

/// Open the store and serve the HTTP API
pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = open_store(&config)?;
    info!("Using database {:?}", config.sqlite_path());

    let service = Arc::new(BookService::new(store));
    serve(build_router(service), &config.socket_addr()).await
}
