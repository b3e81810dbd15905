//! Load and validate launcher configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::{errors::ConfigError, paths};

pub mod telemetry;

/// Prefix for environment overrides (e.g. `URBAN5_LAUNCHER_BROWSER_PATH`).
pub const ENV_PREFIX: &str = "URBAN5_LAUNCHER";
pub const DEFAULT_BROWSER_PATH: &str =
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
pub const DEFAULT_BUILD_COMMAND: &str = "npm run build";
pub const DEFAULT_BUILD_DIR: &str = "build";
pub const DEFAULT_FLAGS_FILE: &str = "lib/flags.js";

/// Fixed collaborators of the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub browser_path: PathBuf,
    pub build_command: String,
    /// Build output directory, also the static server root.
    pub build_dir: PathBuf,
    /// Flags script location relative to `build_dir`.
    pub flags_file: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            browser_path: PathBuf::from(DEFAULT_BROWSER_PATH),
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            flags_file: PathBuf::from(DEFAULT_FLAGS_FILE),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawLauncherConfig {
    browser_path: Option<String>,
    build_command: Option<String>,
    build_dir: Option<String>,
    flags_file: Option<String>,
}

impl LauncherConfig {
    /// Defaults overridden by `URBAN5_LAUNCHER_*` environment variables.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load_from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source.
    pub fn load_from_environment(source: config::Environment) -> Result<Self, ConfigError> {
        let document = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|err| {
                let error = ConfigError::from_read_error(err);
                error!(
                    target: "urban5_launcher::config",
                    reason = %error,
                    "Failed to read launcher environment"
                );
                error
            })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(err);
            error!(
                target: "urban5_launcher::config",
                reason = %error,
                "Failed to parse launcher environment"
            );
            error
        })?;

        let config = Self::from_raw(raw).map_err(|err| {
            error!(
                target: "urban5_launcher::config",
                reason = %err,
                "Failed to validate launcher environment"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Location of the generated flags script.
    pub fn flags_path(&self) -> PathBuf {
        paths::resolve_under(&self.build_dir, &self.flags_file)
    }

    fn from_raw(raw: RawLauncherConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut overridden = false;

        let browser_path = pick_override(
            "browser_path",
            raw.browser_path,
            defaults.browser_path.to_string_lossy().into_owned(),
            &mut overridden,
        )?;
        let build_command = pick_override(
            "build_command",
            raw.build_command,
            defaults.build_command,
            &mut overridden,
        )?;
        let build_dir = pick_override(
            "build_dir",
            raw.build_dir,
            defaults.build_dir.to_string_lossy().into_owned(),
            &mut overridden,
        )?;
        let flags_file = pick_override(
            "flags_file",
            raw.flags_file,
            defaults.flags_file.to_string_lossy().into_owned(),
            &mut overridden,
        )?;

        if !overridden {
            telemetry::log_defaults_used();
        }

        let flags_file = PathBuf::from(flags_file);
        validate_flags_file(&flags_file)?;

        Ok(Self {
            browser_path: PathBuf::from(browser_path),
            build_command,
            build_dir: PathBuf::from(build_dir),
            flags_file,
        })
    }
}

fn pick_override(
    field: &'static str,
    value: Option<String>,
    default: String,
    overridden: &mut bool,
) -> Result<String, ConfigError> {
    match value {
        Some(value) => {
            let value = require_nonempty(field, value)?;
            *overridden = true;
            telemetry::log_env_override(field);
            Ok(value)
        }
        None => Ok(default),
    }
}

fn require_nonempty(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            message: "Value must not be empty".into(),
        });
    }
    Ok(value)
}

fn validate_flags_file(path: &Path) -> Result<(), ConfigError> {
    if paths::is_nonempty_relative(path) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        field: "flags_file",
        message: "Use a path relative to the build directory".into(),
    })
}
