use std::path::PathBuf;

use clap::Parser;

use crate::inject::FailureMode;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity for debugging purposes.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Keep processing the remaining configuration files when one of them fails.
    #[arg(long)]
    pub continue_on_error: bool,

    /// The directory to append to PATH.
    pub path: Option<PathBuf>,
}

impl Cli {
    pub fn failure_mode(&self) -> FailureMode {
        if self.continue_on_error {
            FailureMode::ContinueOnError
        } else {
            FailureMode::FailFast
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
