use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState, HttpServerConfig};
use bookshelf_core::BookService;

/// Main entry point for the Bookshelf application
///
/// Starts the REST server that backs the book-catalog clients.
///
/// # Environment Variables
/// - `BOOKSHELF_REST_ADDR`: REST server address (default: "0.0.0.0:8787")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("bookshelf_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpServerConfig::from_env();

    tracing::info!("++ Starting Bookshelf REST on {}", config.socket_addr());

    let state = AppState::new(BookService::new());

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
