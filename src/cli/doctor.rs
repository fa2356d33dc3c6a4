//! Environment readiness check.

use crate::config::Config;
use anyhow::Result;

/// Check credential and port configuration.
pub async fn run() -> Result<()> {
    let config = Config::from_env();

    println!("Tokenpress Doctor");
    println!("=================");
    println!();

    if config.zyte_api_key.is_some() {
        println!("[OK] ZYTE_API_KEY is set");
    } else {
        println!("[!!] ZYTE_API_KEY is NOT set — /news will serve empty headline lists");
    }

    println!("[OK] Listen port: {}", config.port);

    println!();
    if config.zyte_api_key.is_some() {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
        println!("  Put ZYTE_API_KEY in the environment or a .env file.");
    }

    Ok(())
}
