//! Shared helpers for building the browser launch command.

use std::path::Path;

use tokio::process::Command;

/// Flag that puts the browser into kiosk mode.
pub const KIOSK_FLAG: &str = "--kiosk";

/// URL the browser is pointed at for a locally served port.
pub fn local_app_url(port: u16) -> String {
    format!("http://localhost:{port}/")
}

/// Arguments passed to the browser, in order.
pub fn browser_args(kiosk_mode: bool, port: u16) -> Vec<String> {
    let mut args = Vec::with_capacity(2);
    if kiosk_mode {
        args.push(KIOSK_FLAG.to_string());
    }
    args.push(format!("--app={}", local_app_url(port)));
    args
}

/// Build the browser command. The child is not detached; callers wait on it.
pub fn build_browser_command(browser_path: &Path, kiosk_mode: bool, port: u16) -> Command {
    let mut command = Command::new(browser_path);
    command.args(browser_args(kiosk_mode, port));
    command
}
