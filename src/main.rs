//! Storefront shell server
//!
//! Serves the built `storefront-ui` bundle and the routing API.
//!
//! Run with: cargo run --bin storefront [-- --config storefront.toml]
//!
//! # Configuration
//!
//! Without `--config` the default locations are searched (see
//! [`Config::load_default`]); environment variables override file values:
//! - `STOREFRONT_HOST`, `STOREFRONT_PORT`
//! - `STOREFRONT_STATIC_DIR`
//! - `STOREFRONT_LOG_LEVEL`, `STOREFRONT_LOG_FORMAT`
//! - `RUST_LOG`: full filter, overrides the log level

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use storefront::api::{serve, AppState};
use storefront::config::Config;
use storefront::logging::init_logging;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Storefront shell server")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, report) = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging).context("initializing logging")?;

    tracing::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));
    report.log();
    tracing::info!("Static bundle: {:?}", config.server.static_dir);

    if !config.server.index_path().exists() {
        tracing::warn!(
            "No bundle at {:?}; build storefront-ui with trunk before serving pages",
            config.server.index_path()
        );
    }

    let state = AppState::new(config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Storefront stopped");
    Ok(())
}
