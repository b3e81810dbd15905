//! CLI entrypoint module structure.
use std::ffi::OsString;

use clap::{error::ErrorKind, Parser};
use tracing::warn;

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{
    parse_bool_flag, resolve_bool_flag, resolve_timeout, LaunchSettings, TimeoutMinutes,
    DEFAULT_KIOSK_MODE, DEFAULT_PORT, DEFAULT_SHOULD_REBUILD, DEFAULT_TIMEOUT_MINUTES,
};

/// Usage line printed for help and malformed invocations.
pub const USAGE: &str = "urban5-launcher -build <should rebuild> -timeout <timeout length> -kiosk <is kiosk mode> -port <port number>";
/// Exit status for malformed invocations.
pub const USAGE_EXIT_STATUS: u8 = 2;

/// Why argument parsing stopped before producing `LaunchArgs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageExit {
    /// `-h/--help`: print and exit successfully.
    Help(String),
    /// Unknown flag, missing value, or malformed option.
    Invalid,
}

impl UsageExit {
    /// Text to print on stdout.
    pub fn message(&self) -> &str {
        match self {
            UsageExit::Help(text) => text,
            UsageExit::Invalid => USAGE,
        }
    }

    pub const fn exit_status(&self) -> u8 {
        match self {
            UsageExit::Help(_) => 0,
            UsageExit::Invalid => USAGE_EXIT_STATUS,
        }
    }
}

/// Parse the process arguments.
pub fn parse_args() -> Result<LaunchArgs, UsageExit> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argument list (first item is the program name).
pub fn parse_args_from<I, T>(argv: I) -> Result<LaunchArgs, UsageExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    LaunchArgs::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp => UsageExit::Help(err.render().to_string()),
        kind => {
            let detail = err.render().to_string();
            warn!(
                target: "urban5_launcher::cli",
                kind = %kind,
                detail = %detail.trim_end(),
                "Rejected command-line arguments"
            );
            UsageExit::Invalid
        }
    })
}
