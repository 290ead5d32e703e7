use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use outline_core::{
    config::{fetch_timeout_from_env_value, wiki_base_url_from_env_value},
    CoreConfig, OutlineService,
};

/// Main entry point for the outline server
///
/// Resolves configuration once, then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `OUTLINE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `OUTLINE_WIKI_BASE_URL`: base address topics are appended to
///   (default: "https://en.wikipedia.org/wiki/")
/// - `OUTLINE_FETCH_TIMEOUT_SECS`: upstream fetch timeout in seconds (default: 10)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration values are invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("outline_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("outline_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("OUTLINE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let wiki_base_url = wiki_base_url_from_env_value(std::env::var("OUTLINE_WIKI_BASE_URL").ok());
    let fetch_timeout =
        fetch_timeout_from_env_value(std::env::var("OUTLINE_FETCH_TIMEOUT_SECS").ok())?;

    let cfg = Arc::new(CoreConfig::new(wiki_base_url, fetch_timeout)?);
    tracing::info!(
        base_url = cfg.wiki_base_url(),
        timeout_secs = cfg.fetch_timeout().as_secs(),
        "-- Outline source configured"
    );

    let app = api_rest::router(AppState::new(OutlineService::new(cfg)));

    tracing::info!("++ Starting outline REST API on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
