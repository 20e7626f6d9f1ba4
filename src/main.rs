//! Books API
//!
//! Read-only REST server over a fixed in-memory book catalog: filtering,
//! lookup, search, random picks and aggregate listings.

use books_api::config::Config;
use books_api::server::{catalog_router, init_tracing, serve};
use books_api::state::Catalog;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let catalog = Arc::new(Catalog::seeded()?);
    info!("Loaded {} books", catalog.len());

    let app = catalog_router(catalog);

    info!("Books API running on port {}", config.server.port);
    info!("Try: http://localhost:{}/api/books", config.server.port);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    serve(app, &config).await
}
