use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

use langchart::catalog::LanguageCatalog;
use langchart::config::Config;
use langchart::detector::WhatlangIdentifier;
use langchart::web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langchart=info".parse()?),
        )
        .init();

    info!("Starting language detection server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Build the catalog before the first request is served
    let catalog = LanguageCatalog::global();
    info!("Loaded {} catalog languages", catalog.len());

    let identifier = WhatlangIdentifier::new(config.min_num_bytes, config.max_num_bytes);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::new(config, identifier, catalog));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✓ Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
