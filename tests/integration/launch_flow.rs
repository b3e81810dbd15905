use std::net::{Ipv4Addr, TcpListener};

use crate::common::{expected_flags, free_port, has_program, stderr, stdout, Workspace};

/// Browser stand-in that fetches the app page and its flags from the launcher's server.
#[cfg(unix)]
const FETCHING_BROWSER: &str = r#"#!/bin/sh
url=""
for arg in "$@"; do
  case "$arg" in
    --app=*) url="${arg#--app=}" ;;
  esac
done
echo "args: $*"
curl --silent --show-error --fail "$url" || exit 10
curl --silent --show-error --fail "${url}lib/flags.js" || exit 11
"#;

#[test]
fn default_run_writes_flags_and_opens_kiosk_browser() {
    let workspace = Workspace::with_build_dir();
    let port = free_port();
    let port_arg = port.to_string();
    let output = workspace.run(&["-p", &port_arg, "-t", "15"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("15", true));
    assert_eq!(
        stdout(&output).trim_end(),
        format!("--kiosk --app=http://localhost:{port}/")
    );
}

#[test]
fn windowed_run_omits_kiosk_flag() {
    let workspace = Workspace::with_build_dir();
    let port = free_port();
    let port_arg = port.to_string();
    let output = workspace.run(&["--kiosk=false", "--port", &port_arg]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let flags = workspace.read_flags();
    assert!(flags.contains("isKioskMode: false,"), "{flags}");
    assert!(flags.contains("timeout: 10,"), "{flags}");
    assert_eq!(
        stdout(&output).trim_end(),
        format!("--app=http://localhost:{port}/")
    );
}

#[test]
fn non_numeric_timeout_keeps_default() {
    let workspace = Workspace::with_build_dir();
    let port_arg = free_port().to_string();
    let output = workspace.run(&["-t", "abc", "-p", &port_arg]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("10", true));
}

#[test]
fn timeout_digits_are_written_verbatim() {
    let workspace = Workspace::with_build_dir();
    let port_arg = free_port().to_string();
    let output = workspace.run(&["-t", "015", "-p", &port_arg]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("015", true));
}

#[test]
fn flags_file_is_rewritten_each_run() {
    let workspace = Workspace::with_build_dir();
    std::fs::write(workspace.flags_path(), "// stale\n".repeat(50)).expect("can seed flags");
    let port_arg = free_port().to_string();
    let output = workspace.run(&["-t", "3", "-k", "n", "-p", &port_arg]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("3", false));
}

#[test]
fn missing_build_directory_is_fatal() {
    let workspace = Workspace::empty();
    let port_arg = free_port().to_string();
    let output = workspace.run(&["-p", &port_arg]);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(
        stderr(&output).contains("build/lib/flags.js"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty(), "browser must not start");
}

#[cfg(unix)]
#[test]
fn rebuild_runs_before_flags_are_written() {
    let workspace = Workspace::empty();
    let port_arg = free_port().to_string();
    let output = workspace
        .launcher(&["-b", "True", "-p", &port_arg])
        .env("URBAN5_LAUNCHER_BUILD_COMMAND", "mkdir -p build/lib")
        .output()
        .expect("launcher should start");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("10", true));
}

#[cfg(unix)]
#[test]
fn failed_build_does_not_stop_launch() {
    let workspace = Workspace::with_build_dir();
    let port_arg = free_port().to_string();
    let output = workspace
        .launcher(&["--build", "yes", "-p", &port_arg])
        .env("URBAN5_LAUNCHER_BUILD_COMMAND", "exit 7")
        .output()
        .expect("launcher should start");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(workspace.read_flags(), expected_flags("10", true));
    assert!(stdout(&output).contains("--kiosk"));
}

#[test]
fn build_is_skipped_by_default() {
    let workspace = Workspace::with_build_dir();
    let port_arg = free_port().to_string();
    let output = workspace
        .launcher(&["-p", &port_arg])
        .env("URBAN5_LAUNCHER_BUILD_COMMAND", "touch build-ran.marker")
        .output()
        .expect("launcher should start");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!workspace.path().join("build-ran.marker").exists());
}

#[test]
fn occupied_port_is_fatal() {
    let workspace = Workspace::with_build_dir();
    let holder = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).expect("can bind ephemeral port");
    let port_arg = holder.local_addr().expect("has local addr").port().to_string();
    let output = workspace.run(&["-p", &port_arg]);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(
        stderr(&output).contains("Failed to bind static server"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty(), "browser must not start");
}

#[cfg(unix)]
#[test]
fn browser_sees_build_directory_and_fresh_flags() {
    if !has_program("curl") {
        eprintln!("Skipping served-content test because curl is not installed");
        return;
    }
    let workspace = Workspace::with_build_dir();
    std::fs::write(workspace.flags_path(), "// stale\n").expect("can seed flags");
    let browser = workspace.write_script("browser.sh", FETCHING_BROWSER);
    let port = free_port();
    let port_arg = port.to_string();
    let output = workspace
        .launcher(&["-p", &port_arg, "-t", "25", "-k", "no"])
        .env("URBAN5_LAUNCHER_BROWSER_PATH", &browser)
        .output()
        .expect("launcher should start");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let served = stdout(&output);
    assert!(
        served.contains(&format!("args: --app=http://localhost:{port}/")),
        "{served}"
    );
    assert!(served.contains("<h1>URBAN5</h1>"), "{served}");
    assert!(served.contains(&expected_flags("25", false)), "{served}");
    assert!(!served.contains("// stale"), "{served}");
}
