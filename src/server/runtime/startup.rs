use std::{env, path::Path, process::ExitCode};

use anyhow::{Context, Error};
use tracing::{info, warn};

use crate::{
    cli::{LaunchSettings, UsageExit},
    lib::{
        browser, errors::LaunchError, frontend_build, fs as flags_fs, telemetry::StageSpan,
    },
    server::{
        config::LauncherConfig,
        runtime::{bind_listener, listen_addr, spawn_static_server},
    },
};

/// Where a `RuntimeExit` message is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportStream {
    Stdout,
    Stderr,
}

/// Bundles a message with the exit code the process should end with.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
    stream: ReportStream,
}

impl RuntimeExit {
    /// Help text or the usage line, printed on stdout.
    pub fn usage(exit: UsageExit) -> Self {
        Self {
            message: exit.message().trim_end().to_string(),
            exit_code: ExitCode::from(exit.exit_status()),
            stream: ReportStream::Stdout,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
            stream: ReportStream::Stderr,
        }
    }

    pub fn report(self) -> ExitCode {
        match self.stream {
            ReportStream::Stdout => println!("{}", self.message),
            ReportStream::Stderr => eprintln!("{}", self.message),
        }
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build (optionally), write flags, serve the build directory, and block on the browser.
pub async fn run_launcher(
    settings: LaunchSettings,
    config: LauncherConfig,
) -> Result<(), RuntimeExit> {
    if settings.should_rebuild {
        let working_dir = env::current_dir()
            .context("failed to obtain current directory")
            .map_err(RuntimeExit::from_error)?;
        run_frontend_build(&config.build_command, &working_dir).await;
    }

    flags_fs::write_flags_file(
        &config.flags_path(),
        &settings.timeout_minutes,
        settings.kiosk_mode,
    )
    .map_err(RuntimeExit::from_error)?;

    let addr = listen_addr(settings.port);
    let listener = bind_listener(addr)
        .await
        .map_err(RuntimeExit::from_error)?;
    info!(
        target: "urban5_launcher::server",
        port = settings.port,
        "serving at port {}",
        settings.port
    );
    // Never joined: the task ends when the runtime shuts down after the browser exits.
    let _server = spawn_static_server(listener, config.build_dir.clone());

    launch_browser(&config.browser_path, settings.kiosk_mode, settings.port)
        .await
        .map_err(RuntimeExit::from_error)?;
    Ok(())
}

/// Run the front-end build and wait for it. Failures are logged, never returned.
pub async fn run_frontend_build(build_command: &str, working_dir: &Path) {
    let span = StageSpan::start("build");
    info!(
        target: "urban5_launcher::build",
        command = build_command,
        working_dir = %working_dir.display(),
        "Starting front-end build"
    );

    let mut command = frontend_build::build_frontend_command(build_command, working_dir);
    match command.status().await {
        Ok(status) if status.success() => span.finish("succeeded", status.code()),
        Ok(status) => {
            warn!(
                target: "urban5_launcher::build",
                command = build_command,
                exit_code = status.code(),
                "Front-end build failed; continuing with existing build directory"
            );
            span.finish("failed", status.code());
        }
        Err(err) => {
            warn!(
                target: "urban5_launcher::build",
                command = build_command,
                error = %err,
                "Failed to start front-end build; continuing with existing build directory"
            );
            span.finish("spawn_failed", None);
        }
    }
}

/// Start the browser against the local server and wait until it exits.
pub async fn launch_browser(
    browser_path: &Path,
    kiosk_mode: bool,
    port: u16,
) -> Result<Option<i32>, LaunchError> {
    let span = StageSpan::start("browser");
    info!(
        target: "urban5_launcher::browser",
        browser = %browser_path.display(),
        url = %browser::local_app_url(port),
        kiosk_mode,
        "Launching browser"
    );

    let mut command = browser::build_browser_command(browser_path, kiosk_mode, port);
    let status = command
        .status()
        .await
        .map_err(|source| LaunchError::BrowserSpawn {
            path: browser_path.to_path_buf(),
            source,
        })?;

    let status_label = if status.success() { "exited" } else { "exited_with_error" };
    span.finish(status_label, status.code());
    Ok(status.code())
}
