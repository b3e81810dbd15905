//! `LaunchSettings` and flag value resolution.
use std::fmt;

use crate::lib::errors::LaunchError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_MINUTES: &str = "10";
pub const DEFAULT_SHOULD_REBUILD: bool = false;
pub const DEFAULT_KIOSK_MODE: bool = true;

const TRUE_WORDS: [&str; 5] = ["yes", "true", "t", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["no", "false", "f", "n", "0"];

/// Demo timeout exactly as given on the command line: one or more ASCII digits.
///
/// Written into the flags script unchanged, so leading zeros and values
/// beyond any integer width survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutMinutes(String);

impl TimeoutMinutes {
    /// `None` unless `raw` is a non-empty run of ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeoutMinutes {
    fn default() -> Self {
        Self(DEFAULT_TIMEOUT_MINUTES.to_string())
    }
}

impl fmt::Display for TimeoutMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved launch settings, read-only after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub should_rebuild: bool,
    pub kiosk_mode: bool,
    pub port: u16,
    pub timeout_minutes: TimeoutMinutes,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            should_rebuild: DEFAULT_SHOULD_REBUILD,
            kiosk_mode: DEFAULT_KIOSK_MODE,
            port: DEFAULT_PORT,
            timeout_minutes: TimeoutMinutes::default(),
        }
    }
}

/// Parse a boolean flag value (case-insensitive yes/no words).
pub fn parse_bool_flag(flag: &'static str, raw: &str) -> Result<bool, LaunchError> {
    let lowered = raw.to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        return Ok(true);
    }
    if FALSE_WORDS.contains(&lowered.as_str()) {
        return Ok(false);
    }
    Err(LaunchError::InvalidBoolean {
        flag,
        value: raw.to_string(),
    })
}

/// Validate every occurrence of a boolean flag in order; the last one wins.
pub fn resolve_bool_flag<'a>(
    flag: &'static str,
    values: impl IntoIterator<Item = &'a str>,
    default: bool,
) -> Result<bool, LaunchError> {
    let mut resolved = default;
    for raw in values {
        resolved = parse_bool_flag(flag, raw)?;
    }
    Ok(resolved)
}

/// Pick the timeout from every `-t` occurrence; non-numeric values are skipped.
pub fn resolve_timeout<'a>(values: impl IntoIterator<Item = &'a str>) -> TimeoutMinutes {
    values
        .into_iter()
        .filter_map(TimeoutMinutes::parse)
        .last()
        .unwrap_or_default()
}
