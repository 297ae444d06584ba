use std::sync::Arc;

use cinematch_api::{
    api::{create_router, AppState},
    config::Config,
    services::OmdbProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let catalog = config.catalog();
    let settings = config.scan_settings();

    let provider = OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
        config.lookup_timeout(),
    )?;

    tracing::info!(
        catalog_size = catalog.len(),
        scan_concurrency = settings.concurrency,
        request_timeout_ms = settings.request_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    let state = AppState::new(Arc::new(provider), catalog, settings);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
