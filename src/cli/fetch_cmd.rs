//! `tokenpress fetch <token>` — one-shot scrape printed to stdout.

use crate::cli;
use crate::config::Config;
use anyhow::Result;

/// Run the fetch command.
pub async fn run(token: &str, json: bool) -> Result<()> {
    cli::init_tracing();

    let config = Config::from_env();
    let headlines = cli::build_scraper(&config).scrape(token).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&headlines)?);
    } else if headlines.is_empty() {
        println!("No headlines found for '{token}'.");
    } else {
        for (i, headline) in headlines.iter().enumerate() {
            println!("{}. {}", i + 1, headline.title);
            println!("   {}", headline.url);
        }
    }

    Ok(())
}
