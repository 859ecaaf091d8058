//! Command implementations

mod journal;
mod show_config;

use crate::cli::Cli;
use crate::config::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute the CLI invocation
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(cli.config.as_deref(), cli.config_overrides())?;

    if cli.show_config {
        show_config::execute(&config, &output)
    } else {
        journal::execute(&config, &output)
    }
}
