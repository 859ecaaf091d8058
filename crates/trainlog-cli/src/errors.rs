use console::style;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use trainlog_core::TrainlogError;

/// Error report with suggestions, printed once before the process exits
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a workout file that exists but cannot be parsed
pub fn corrupt_workout_file(path: &Path, reason: &str) -> CliError {
    CliError::new("Workout file is corrupt")
        .with_context(format!(
            "The workout file exists but could not be read as a workout history.\n\nPath: {}\nReason: {}",
            path.display(),
            reason
        ))
        .with_suggestion("Fix the JSON by hand, or restore it from a backup")
        .with_suggestion("Or start over: trainlog --on-corrupt reset (the file is overwritten on the next save)")
        .with_help("Run: trainlog --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check trainlog.toml for syntax errors")
        .with_suggestion("Inspect the effective settings: trainlog --show-config")
        .with_help("Run: trainlog --help")
}

/// Create error for a data directory or file that cannot be written
pub fn permission_denied(message: &str) -> CliError {
    CliError::new("Permission denied")
        .with_context(format!("Error: {}", message))
        .with_suggestion("Check permissions of the data directory")
        .with_suggestion("Or choose another one: trainlog --data-dir <DIR>")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let message = format!("{:#}", error);

    match error.chain().find_map(|cause| cause.downcast_ref::<TrainlogError>()) {
        Some(TrainlogError::CorruptRecord { path, reason }) => corrupt_workout_file(path, reason),
        Some(TrainlogError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        Some(TrainlogError::Io(io)) if io.kind() == ErrorKind::PermissionDenied => {
            permission_denied(&message)
        }
        _ => CliError::new(message),
    }
}
