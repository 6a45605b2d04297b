//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the book API
//! (with OpenAPI/Swagger UI). The workspace's main `bookshelf-run` binary
//! is the normal entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState, HttpServerConfig};
use bookshelf_core::BookService;

/// Main entry point for the Bookshelf REST API server
///
/// # Environment Variables
/// - `BOOKSHELF_REST_ADDR`: Server address (default: "0.0.0.0:8787")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpServerConfig::from_env();

    tracing::info!("-- Starting Bookshelf REST API on {}", config.socket_addr());

    let state = AppState::new(BookService::new());

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
