//! Router assembly, middleware and server lifecycle
//!
//! Both binaries build their router here and run it through [`serve`], so
//! logging, request ids, fallback handling and shutdown behave the same in
//! the catalog and the directory service.

use crate::api::{
    books, catalog,
    fallback::{handle_panic, route_not_found},
    users, SharedCatalog, SharedDirectory,
};
use crate::config::Config;
use axum::{
    extract::Request,
    handler::Handler,
    middleware::Next,
    response::Response,
    routing::{get, MethodRouter},
    Router, ServiceExt,
};
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, normalize_path::NormalizePath,
    trace::TraceLayer,
};
use tracing::{info, info_span, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// A finished service: router plus middleware, behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Install the global tracing subscriber
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

/// GET (and HEAD) route; any other method gets the route-not-found response
fn read_only<H, T, S>(handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    get(handler).fallback(route_not_found)
}

/// Wrap a router in the middleware stack shared by both services
///
/// Layer order matters: panics are caught innermost so the request id and
/// trace layers still see and log the resulting 500. Trailing slashes are
/// trimmed outside the router because `Router::layer` runs after routing,
/// so `/api/books/` is served as `/api/books`.
pub fn apply_middleware(router: Router) -> App {
    let router = router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive());

    NormalizePath::trim_trailing_slash(router)
}

/// Full catalog service: book routes, fallback and middleware
pub fn catalog_router(shared: SharedCatalog) -> App {
    let routes = Router::new()
        .route("/api/books", read_only(books::list_books))
        .route("/api/books/random", read_only(books::random_book))
        .route("/api/books/:id", read_only(books::get_book))
        .route("/api/books/genre/:genre", read_only(books::books_by_genre))
        .route("/api/books/author/:author", read_only(books::books_by_author))
        .route("/api/books/search/:title", read_only(books::search_books))
        .route("/api/genres", read_only(catalog::list_genres))
        .route("/api/authors", read_only(catalog::list_authors))
        .route("/api/health", read_only(catalog::health_check))
        .fallback(route_not_found)
        .with_state(shared);

    apply_middleware(routes)
}

/// Full directory service: welcome, user listing, fallback and middleware
pub fn directory_router(shared: SharedDirectory) -> App {
    let routes = Router::new()
        .route("/", read_only(users::welcome))
        .route("/users", read_only(users::list_users))
        .fallback(route_not_found)
        .with_state(shared);

    apply_middleware(routes)
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(app: App, config: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
