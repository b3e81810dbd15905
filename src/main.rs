//! Entry point for the URBAN5 launcher.
use std::process::ExitCode;

use urban5_launcher::{
    cli,
    lib::telemetry,
    server::{
        config::LauncherConfig,
        runtime::{self, RuntimeExit},
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = cli::parse_args().map_err(RuntimeExit::usage)?;
    let settings = args.into_settings().map_err(RuntimeExit::from_error)?;
    telemetry::emit_launch_settings(&settings);

    let config = LauncherConfig::load_from_env().map_err(RuntimeExit::from_error)?;
    runtime::run_launcher(settings, config).await
}
