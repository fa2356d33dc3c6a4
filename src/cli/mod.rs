//! CLI subcommand implementations for the tokenpress binary.

pub mod doctor;
pub mod fetch_cmd;
pub mod serve;

use crate::config::Config;
use crate::news::NewsScraper;
use crate::renderer::zyte::ZyteRenderer;
use std::sync::Arc;

/// Initialize tracing with an env-filter, defaulting this crate to info.
pub(crate) fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tokenpress=info".parse().unwrap()),
        )
        .init();
}

/// Wire up the scraping pipeline from configuration.
pub(crate) fn build_scraper(config: &Config) -> NewsScraper {
    let renderer = Arc::new(ZyteRenderer::new(config.zyte_api_key.clone()));
    NewsScraper::new(renderer)
}
