//! Samosa booking HTTP server.

use samosa::config::Config;
use samosa::server::{AppState, build_router};
use samosa_gateway::RemoteGateway;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "samosa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        remote_url = %config.remote.url,
        host = %config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    let gateway = Arc::new(RemoteGateway::new(
        config.remote.url.clone(),
        config.remote.anon_key.clone(),
    ));
    let state = AppState::new(gateway);
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
