//! User Directory
//!
//! Serves a welcome message and the fixed user list.

use books_api::config::Config;
use books_api::server::{directory_router, init_tracing, serve};
use books_api::state::Directory;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let directory = Arc::new(Directory::seeded());
    let app = directory_router(directory);

    info!("User directory running on port {}", config.server.port);

    serve(app, &config).await
}
