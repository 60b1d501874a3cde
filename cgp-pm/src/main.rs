//! cgp-pm (Plan Matcher) - Carson-branded plan matcher web page
//!
//! Serves the themed form on `/` and a JSON equivalent on `/api/match`.
//! Configuration: CLI > CGP_* environment > TOML file > compiled defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cgp_common::config::{ConfigOverrides, ConfigResolver};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

use cgp_pm::{build_router, AppState};

/// Command-line arguments for cgp-pm
#[derive(Parser, Debug)]
#[command(name = "cgp-pm")]
#[command(about = "Carson-branded plan matcher web page")]
#[command(version)]
struct Args {
    /// TOML configuration file (default: <config_dir>/cgp/cgp-pm.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Simulated processing delay in milliseconds (0 disables it)
    #[arg(long)]
    processing_delay_ms: Option<u64>,

    /// Default log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            config_file: args.config,
            host: args.host,
            port: args.port,
            processing_delay_ms: args.processing_delay_ms,
            log_level: args.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new("cgp-pm")
        .resolve(args.into())
        .context("Failed to resolve configuration")?;

    cgp_common::logging::init_tracing(&config.log_level)
        .context("Failed to initialize logging")?;

    // Build identification first, before anything that can stall
    info!(
        "Starting CGP Plan Matcher (cgp-pm) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.config_file {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => warn!("No configuration file found, using defaults"),
    }
    info!("Processing delay: {:?}", config.processing_delay);

    let state = AppState::new(config.processing_delay);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("cgp-pm listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
