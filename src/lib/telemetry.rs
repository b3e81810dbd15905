//! Telemetry initialization and launcher stage span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LaunchSettings;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a blocking launcher stage.
pub struct StageSpan {
    span: Span,
    started_at: Instant,
    stage: &'static str,
}

impl StageSpan {
    /// Start a stage span.
    pub fn start(stage: &'static str) -> Self {
        let span = info_span!(target: "urban5_launcher::stage", "launcher_stage", stage);
        Self {
            span,
            started_at: Instant::now(),
            stage,
        }
    }

    /// Close the span while recording how the stage's subprocess ended.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "urban5_launcher::stage",
            stage = self.stage,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launcher stage"
        );
    }
}

/// Emit the parsed launch settings to `tracing`.
pub fn emit_launch_settings(settings: &LaunchSettings) {
    info!(
        target: "urban5_launcher::cli",
        should_rebuild = settings.should_rebuild,
        kiosk_mode = settings.kiosk_mode,
        port = settings.port,
        timeout_minutes = %settings.timeout_minutes,
        "Parsed launch settings"
    );
}
