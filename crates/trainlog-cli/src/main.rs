//! trainlog CLI - interactive workout journal

mod cli;
mod commands;
mod config;
mod errors;
mod interactive;
mod output;
mod session;

use clap::Parser;
use cli::Cli;

fn main() {
    // Logs go to stderr so they never mix with prompts or JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = commands::execute(cli) {
        errors::from_anyhow(error).display();
        std::process::exit(1);
    }
}
