use std::{io, net::SocketAddr, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading launcher configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to collect environment sources.
    #[error("Failed to read launcher environment: {source}")]
    EnvRead {
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize collected values into a struct.
    #[error("Failed to parse launcher environment: {source}")]
    Parse {
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Launcher setting `{field}` is invalid: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(source: ConfigLoaderError) -> Self {
        Self::EnvRead { source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(source: ConfigLoaderError) -> Self {
        Self::Parse { source }
    }
}

/// Fatal failures raised while turning arguments into a running launcher.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Boolean value expected. (got `{value}` for {flag})")]
    InvalidBoolean { flag: &'static str, value: String },
    #[error("Failed to write flags file {path}: {source}")]
    FlagsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to bind static server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Failed to launch browser {path}: {source}")]
    BrowserSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
