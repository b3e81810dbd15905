use tracing::{debug, info};

use super::{LauncherConfig, ENV_PREFIX};

pub fn log_env_override(field: &'static str) {
    info!(
        target: "urban5_launcher::config",
        field,
        prefix = ENV_PREFIX,
        "Launcher setting overridden from environment"
    );
}

pub fn log_defaults_used() {
    debug!(
        target: "urban5_launcher::config",
        prefix = ENV_PREFIX,
        "No launcher environment overrides set; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "urban5_launcher::config",
        browser_path = %config.browser_path.display(),
        build_command = %config.build_command,
        build_dir = %config.build_dir.display(),
        flags_path = %config.flags_path().display(),
        "Launcher configuration loaded"
    );
}
