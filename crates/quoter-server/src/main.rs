use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use quoter_core::{QuoteConfig, QuoteService};
use quoter_server::telemetry::init_tracing;
use quoter_server::{app_router, AppState};

/// Cryptocurrency price service converting a ticker into target currencies.
#[derive(Debug, Parser)]
#[command(name = "quoter", version, about)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, env = "QUOTER_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Abort requests still running after this many seconds.
    #[arg(long, env = "QUOTER_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = QuoteConfig::from_env().context("failed to load configuration")?;
    let args = Args::parse();
    init_tracing();

    info!(
        base_currency = %config.base_currency,
        targets = ?config.target_currencies,
        "quote service configured"
    );

    let state = AppState::new(QuoteService::from_config(&config));
    let router = app_router(state, Duration::from_secs(args.request_timeout_secs));

    info!("Listening on {}", args.listen);
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    axum::serve(listener, router).await?;
    Ok(())
}
