use clap::Parser;
use std::path::PathBuf;
use trainlog_core::config::{CliConfigOverrides, CorruptPolicy};

/// trainlog - Workout journal with a per-athlete history
#[derive(Parser, Debug)]
#[command(name = "trainlog")]
#[command(about = "Record workouts and replay them with a calorie estimate", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the `<name>_workouts.json` files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to ./trainlog.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to do when an existing workout file cannot be parsed
    #[arg(long, value_enum)]
    pub on_corrupt: Option<CorruptPolicyArg>,

    /// Exit without waiting for Enter at the end
    #[arg(long)]
    pub no_pause: bool,

    /// Print the final history as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Corrupt workout file policy
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CorruptPolicyArg {
    /// Stop with an error and leave the file alone
    Fail,
    /// Start from an empty history and overwrite the file on the next save
    Reset,
}

impl From<CorruptPolicyArg> for CorruptPolicy {
    fn from(arg: CorruptPolicyArg) -> Self {
        match arg {
            CorruptPolicyArg::Fail => CorruptPolicy::Fail,
            CorruptPolicyArg::Reset => CorruptPolicy::Reset,
        }
    }
}

impl Cli {
    /// Settings given on the command line, for the highest configuration layer
    pub fn config_overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            data_dir: self.data_dir.clone(),
            on_corrupt: self.on_corrupt.map(CorruptPolicy::from),
            pause_on_exit: self.no_pause.then_some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_no_overrides() {
        let cli = Cli::parse_from(["trainlog"]);
        let overrides = cli.config_overrides();
        assert!(overrides.data_dir.is_none());
        assert!(overrides.on_corrupt.is_none());
        assert!(overrides.pause_on_exit.is_none());
    }

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::parse_from([
            "trainlog",
            "--data-dir",
            "journal",
            "--on-corrupt",
            "reset",
            "--no-pause",
        ]);
        let overrides = cli.config_overrides();
        assert_eq!(overrides.data_dir, Some(PathBuf::from("journal")));
        assert_eq!(overrides.on_corrupt, Some(CorruptPolicy::Reset));
        assert_eq!(overrides.pause_on_exit, Some(false));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["trainlog", "--on-corrupt", "ignore"]).is_err());
    }
}
