//! CLI argument definitions and `LaunchSettings` construction.
use std::ffi::OsString;

use clap::{ArgAction, Parser};
use tracing::info;

use super::{
    resolve_bool_flag, resolve_timeout, LaunchSettings, DEFAULT_KIOSK_MODE, DEFAULT_PORT,
    DEFAULT_SHOULD_REBUILD, USAGE,
};
use crate::lib::errors::LaunchError;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "urban5-launcher",
    about = "Build, configure, and serve the URBAN5 front-end, then open it in Chrome",
    long_about = None,
    override_usage = USAGE,
    infer_long_args = true,
    args_override_self = true
)]
pub struct LaunchArgs {
    /// Create a fresh build before serving (yes/no, true/false, t/f, y/n, 1/0).
    #[arg(short = 'b', long = "build", value_name = "BOOL", action = ArgAction::Append)]
    pub build: Vec<String>,
    /// Open the app in kiosk mode with cursor and hotkeys disabled.
    #[arg(short = 'k', long = "kiosk", value_name = "BOOL", action = ArgAction::Append)]
    pub kiosk: Vec<String>,
    /// Port for the static server.
    #[arg(short = 'p', long = "port", value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Minutes of inactivity before the app returns to demo mode.
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "MINUTES",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub timeout: Vec<String>,
    /// Everything from the first operand on; never interpreted as options.
    #[arg(
        value_name = "OPERANDS",
        num_args = 1..,
        trailing_var_arg = true,
        hide = true
    )]
    pub operands: Vec<OsString>,
}

impl LaunchArgs {
    /// Build `LaunchSettings`, validating boolean flag values.
    pub fn into_settings(self) -> Result<LaunchSettings, LaunchError> {
        let should_rebuild = resolve_bool_flag(
            "--build",
            self.build.iter().map(String::as_str),
            DEFAULT_SHOULD_REBUILD,
        )?;
        let kiosk_mode = resolve_bool_flag(
            "--kiosk",
            self.kiosk.iter().map(String::as_str),
            DEFAULT_KIOSK_MODE,
        )?;
        if !self.operands.is_empty() {
            info!(
                target: "urban5_launcher::cli",
                operands = ?self.operands,
                "Ignoring arguments after the first operand"
            );
        }
        let timeout_minutes = resolve_timeout(self.timeout.iter().map(String::as_str));

        Ok(LaunchSettings {
            should_rebuild,
            kiosk_mode,
            port: self.port,
            timeout_minutes,
        })
    }
}
