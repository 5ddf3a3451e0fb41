mod catalog;
mod config;
mod errors;
mod models;
mod render;
mod routes;
mod routine;
mod state;
mod storage;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::ProductCatalog;
use crate::config::{Config, StorageConfig};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::S3ReportStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a half-configured storage block)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting timetable service v{}", env!("CARGO_PKG_VERSION"));

    // Product knowledge base, shared read-only across requests
    let catalog = Arc::new(
        ProductCatalog::standard().context("built-in product catalog is incomplete")?,
    );
    info!("Product catalog loaded ({} serums)", catalog.serum_count());

    let mut state = AppState::new(config.clone(), catalog);

    // Optional delivery storage (S3 / MinIO)
    match &config.storage {
        Some(storage) => {
            let s3 = build_s3_client(storage).await;
            state = state.with_store(Arc::new(S3ReportStore::new(
                s3,
                storage.bucket.clone(),
                storage.key_prefix.clone(),
            )));
            info!("Report delivery enabled (bucket: {})", storage.bucket);
        }
        None => info!("Report delivery disabled (S3_BUCKET not set)"),
    }

    info!("Render timeout: {}s", config.render_timeout_secs);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(storage: &StorageConfig) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &storage.access_key_id,
        &storage.secret_access_key,
        None,
        None,
        "timetable-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(storage.region.clone()))
        .credentials_provider(credentials)
        .endpoint_url(&storage.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
