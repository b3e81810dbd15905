//! Shared helpers for building the front-end build command.

use std::path::Path;

use tokio::process::Command;

/// Shell used to interpret the configured build command line.
pub const BUILD_SHELL: &str = "sh";

/// Build a `sh -c <build_command>` invocation rooted at `working_dir`.
pub fn build_frontend_command(build_command: &str, working_dir: &Path) -> Command {
    let mut command = Command::new(BUILD_SHELL);
    command.current_dir(working_dir);
    command.arg("-c").arg(build_command);
    command
}
