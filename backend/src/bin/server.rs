//! Chart worker HTTP server binary.
//!
//! Loads the configuration, builds the ephemeris engine and serves the
//! router.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin chart-server
//!
//! # Explicit origins, German sign names
//! CORS_ALLOW_ORIGINS=https://app.example SIGN_LOCALE=de cargo run --bin chart-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CORS_ALLOW_ORIGINS`: Comma-separated origins, `*` for any (default: `*`)
//! - `SIGN_LOCALE`: `en` or `de` (default: en)
//! - `CHART_ENGINE`: `native` or `fixture` (default: native)
//! - `CHART_WORKER_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use chart_worker::config::ServerConfig;
use chart_worker::engine::create_engine;
use chart_worker::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting chart worker");

    let config = ServerConfig::load()?;
    info!(
        "Configuration: engine={:?} sign_locale={:?} cors={:?}",
        config.engine, config.sign_locale, config.cors_allow_origins
    );
    if config.allows_any_origin() {
        warn!("CORS allows any origin");
    }

    let engine = create_engine(config.engine);
    info!(
        "Ephemeris engine {} {}",
        engine.name(),
        engine.version().unwrap_or_else(|| "unknown".to_string())
    );

    let state = AppState::new(engine).with_sign_locale(config.sign_locale);
    let app = create_router(state, &config);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
