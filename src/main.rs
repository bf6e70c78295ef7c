use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod upstream;

use api::AppState;
use config::RelayConfig;
use upstream::{OpenRouterClient, UpstreamClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting NEURALSYNC chat relay...");

    // -----------------------------
    // Configuration (read once, shared read-only)
    // -----------------------------
    let config = Arc::new(RelayConfig::from_env());

    match config.api_key_prefix() {
        Some(prefix) => info!("API key loaded ({prefix}…)"),
        None => warn!("OPENROUTER_API_KEY is not set; POST /api/chat will return 500"),
    }
    info!(
        origins = ?config.allowed_origins,
        echo_request_origin = config.echo_request_origin,
        "cross-origin policy"
    );

    // -----------------------------
    // Router
    // -----------------------------
    let upstream: Arc<dyn UpstreamClient> = Arc::new(OpenRouterClient::new(&config));
    let state = AppState {
        config: config.clone(),
        upstream,
    };

    let app = api::router()
        .layer(api::cors_layer(&config))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);

    println!("🌐 HTTP listening on http://{addr}");
    println!("💬 Chat relay at http://{addr}/api/chat");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
