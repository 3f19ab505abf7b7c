//! Preview server for the INTELIK site bundle
//!
//! Serves `dist/` on port 8080 by default. See [`site_server::config`] for settings.

use anyhow::Context;
use shared::footer::FOOTER;
use site_server::{start_server, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_tracing(&config.log_level)?;

    info!("log level: {}", config.log_level);

    FOOTER
        .validate()
        .context("footer content failed validation")?;
    config.validate()?;

    start_server(config).await
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = match level {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(level),
        _ => EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")?;
    Ok(())
}
