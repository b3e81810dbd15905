//! Utilities for writing the generated front-end flags script.

use std::{fs, path::Path};

use tracing::info;

use crate::{cli::TimeoutMinutes, lib::errors::LaunchError};

/// Global the front-end reads its runtime flags from.
pub const FLAGS_GLOBAL: &str = "window.URBAN5_flags";

/// Render the flags script consumed by the served front-end.
pub fn render_flags_script(timeout_minutes: &TimeoutMinutes, kiosk_mode: bool) -> String {
    format!(
        "{FLAGS_GLOBAL} = {{\n  \
         timeout: {timeout_minutes}, // demo timeout (in minutes)\n  \
         isKioskMode: {kiosk_mode}, // is going to be run in kiosk mode for display (disable cursor and keyboard hot keys)\n\
         }};\n"
    )
}

/// Truncate and rewrite `path` with the rendered flags script.
///
/// Parent directories are not created: a missing build directory is an error.
pub fn write_flags_file(
    path: &Path,
    timeout_minutes: &TimeoutMinutes,
    kiosk_mode: bool,
) -> Result<(), LaunchError> {
    let script = render_flags_script(timeout_minutes, kiosk_mode);
    fs::write(path, script).map_err(|source| LaunchError::FlagsWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        target: "urban5_launcher::flags",
        path = %path.display(),
        timeout_minutes = %timeout_minutes,
        kiosk_mode,
        "Wrote front-end flags file"
    );
    Ok(())
}
