//! Shared library modules providing error types, command builders, file utilities, and telemetry initialization.

pub mod browser;
pub mod errors;
pub mod frontend_build;
pub mod fs;
pub mod paths;
pub mod telemetry;
