//! HealthMate AI demo backend.
//!
//! This is the application entry point. It initializes tracing, loads optional
//! configuration from a TOML file, builds the Axum router, and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthmate::config::{AppConfig, DEFAULT_LOG_FILTER, SERVICE_NAME};
use healthmate::http::start_server;
use healthmate::{create_router, AppState};

/// HealthMate AI: demo backend answering health queries with canned responses
#[derive(Parser, Debug)]
#[command(name = "healthmate", version, about)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "healthmate=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config comes first so the log format is known before tracing starts
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "HealthMate AI backend starting"
    );
    tracing::info!(
        "API will be available at: http://localhost:{}",
        config.http.port
    );
    tracing::info!(
        origins = ?config.cors.allowed_origins,
        "Cross-origin access allowed"
    );
    tracing::warn!("This is a DEMO backend: answers come from a fixed keyword table");

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
