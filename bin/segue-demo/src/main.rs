//! Segue demo - GraphQL pagination over an in-memory track catalog.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults
//! segue-demo
//!
//! # Start with environment overrides
//! GRAPHQL_PORT=8080 LOG_LEVEL=debug segue-demo
//! ```

mod catalog;
mod schema;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use segue_graphql::{serve, ServerConfig};

use crate::schema::{build_schema, CatalogContext};

/// Segue demo server CLI.
#[derive(Parser, Debug)]
#[command(name = "segue-demo")]
#[command(about = "Segue demo - Relay-style pagination over a track catalog")]
#[command(version)]
struct Cli {
    /// Host to bind the GraphQL server on.
    #[arg(long, env = "GRAPHQL_HOST", default_value = "0.0.0.0")]
    host: String,

    /// GraphQL server port.
    #[arg(long, env = "GRAPHQL_PORT", default_value = "4000")]
    port: u16,

    /// Disable the GraphiQL playground at the root path.
    #[arg(long)]
    no_playground: bool,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    info!("🚀 Starting Segue demo");

    let tracks = catalog::seed();
    info!("🎵 Catalog seeded with {} tracks", tracks.len());

    let catalog = Arc::new(CatalogContext::new(tracks));
    let schema = build_schema(catalog);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        enable_playground: !cli.no_playground,
    };

    info!("✅ Segue demo ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    info!("   Press Ctrl+C to stop");

    serve(schema, config, shutdown_signal())
        .await
        .context("GraphQL server error")?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    debug!("Shutdown signal received");
}
