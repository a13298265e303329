use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use datamatch_storage::{DatasetStore, RunStore};

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datamatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DataMatch server");

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!("Configuration loaded");

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tokio::fs::create_dir_all(&config.runs_dir).await?;

    // Build application state
    let state = datamatch_api::AppState::new(
        DatasetStore::new(&config.upload_dir),
        RunStore::new(&config.runs_dir),
        config.user_name.clone(),
    );

    let app = datamatch_api::routes(state)
        .route("/health", axum::routing::get(health_check))
        .layer(TraceLayer::new_for_http())
        // The desktop shell's webview talks to us from its own origin.
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
