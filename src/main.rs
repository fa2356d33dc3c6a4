// Copyright 2026 Tokenpress Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tokenpress::cli;

#[derive(Parser)]
#[command(
    name = "tokenpress",
    about = "Tokenpress — token news gateway serving CoinTelegraph headlines as JSON",
    version,
    after_help = "Run 'tokenpress <command> --help' for details on each command."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the news REST API
    Serve {
        /// Listen port (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch headlines for one token and print them
    Fetch {
        /// Token name (e.g. "Wrapped BTC")
        token: String,
        /// Output as JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env so the API credential survives outside containers.
    dotenv::dotenv().ok();

    let args = Cli::parse();

    let result = match args.command {
        Commands::Serve { port } => cli::serve::run(port).await,
        Commands::Fetch { token, json } => cli::fetch_cmd::run(&token, json).await,
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tokenpress", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
