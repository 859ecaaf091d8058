//! Interactive journal command

use crate::interactive::TerminalPrompter;
use crate::output::OutputWriter;
use crate::session::{Session, SessionSettings, BANNER};
use anyhow::{Context, Result};
use std::sync::Arc;
use trainlog_core::config::LayeredConfig;
use trainlog_store::JsonFileStore;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if !output.is_json() {
        println!("{}", BANNER);
    }

    let settings = SessionSettings {
        data_dir: config.data_dir.value.clone(),
        on_corrupt: config.on_corrupt.value,
    };
    let mut session = Session::new(TerminalPrompter::new(), Arc::new(JsonFileStore::new()), settings);

    let athlete = session.run()?;

    output
        .emit(&athlete.to_document()?, |out| athlete.display_workouts(out))
        .context("Failed to print workout history")?;

    if config.pause_on_exit.value {
        if let Err(e) = session.pause() {
            tracing::debug!("Skipped exit prompt: {:#}", e);
        }
    }

    Ok(())
}
