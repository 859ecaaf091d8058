use anyhow::Result;
use console::style;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::io::{self, StdoutLock, Write};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Writes a command's final result to stdout in the selected format
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print `data` as a JSON success envelope, or run `human` to print the console view
    pub fn emit<T, F>(&self, data: &T, human: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&mut StdoutLock<'static>) -> io::Result<()>,
    {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Human => human(&mut stdout)?,
            OutputFormat::Json => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&envelope(data)?)?)?
            }
        }
        stdout.flush()?;
        Ok(())
    }
}

/// `{"status": "success", "data": ...}`
pub fn envelope<T: Serialize>(data: &T) -> Result<Value> {
    Ok(serde_json::json!({
        "status": "success",
        "data": serde_json::to_value(data)?,
    }))
}

/// Blank line, then an underlined heading
pub fn write_section<W: Write>(out: &mut W, title: impl Display) -> io::Result<()> {
    writeln!(out, "\n{}", style(title).bold().underlined())
}

/// `key: value` with the key in bold
pub fn write_kv<W: Write>(out: &mut W, key: impl Display, value: impl Display) -> io::Result<()> {
    writeln!(out, "{}: {}", style(key).bold(), value)
}
