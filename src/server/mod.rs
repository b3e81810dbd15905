//! Launcher configuration and the build/serve/launch runtime.
pub mod config;
pub mod runtime;
