//! Effective configuration report

use crate::output::{write_kv, write_section, OutputWriter};
use anyhow::Result;
use serde_json::{json, Map, Value};
use trainlog_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut entries: Vec<_> = config.to_inspection_map().into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let data: Map<String, Value> = entries
        .iter()
        .map(|(key, (value, source))| (key.clone(), json!({ "value": value, "source": source })))
        .collect();

    output.emit(&data, |out| {
        write_section(out, "Configuration")?;
        for (key, (value, source)) in &entries {
            write_kv(out, key, format!("{} ({:?})", value, source))?;
        }
        Ok(())
    })
}
