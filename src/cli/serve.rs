//! Start the news REST API.

use crate::cli;
use crate::config::Config;
use crate::rest::{self, AppState};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the serve command. An explicit `--port` beats the `PORT` env var.
pub async fn run(port_override: Option<u16>) -> Result<()> {
    cli::init_tracing();

    let config = Config::from_env();
    let port = port_override.unwrap_or(config.port);

    if config.zyte_api_key.is_none() {
        warn!("ZYTE_API_KEY is not set; /news will serve empty headline lists");
    }

    info!("starting tokenpress v{}", env!("CARGO_PKG_VERSION"));

    let state = Arc::new(AppState {
        scraper: cli::build_scraper(&config),
    });
    rest::start(port, state).await
}
