// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, DaemonSection, RawConfigFile, RawDaemonSection};
use crate::daemon::runner::check_thread_name;
use crate::errors::{DaemonError, Result};

/// Upper bound for `[daemon].delay`.
pub const MAX_DELAY: Duration = Duration::from_secs(60 * 60);

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DaemonError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let daemon = validate_daemon_section(raw.daemon)?;
        Ok(ConfigFile::new_unchecked(daemon))
    }
}

fn validate_daemon_section(raw: RawDaemonSection) -> Result<DaemonSection> {
    let delay = parse_delay(&raw.delay).map_err(|e| {
        DaemonError::ConfigError(format!("[daemon].delay: {e}"))
    })?;

    let thread_name = raw.thread_name.trim().to_string();
    check_thread_name(&thread_name).map_err(|e| {
        DaemonError::ConfigError(format!("[daemon].thread_name: {e}"))
    })?;

    Ok(DaemonSection {
        delay,
        thread_name,
        action_message: raw.action_message,
    })
}

/// Parse a daemon delay: a duration no longer than [`MAX_DELAY`].
///
/// Shared by the `[daemon].delay` key and the `--delay` flag.
pub fn parse_delay(s: &str) -> std::result::Result<Duration, String> {
    let delay = parse_duration(s)?;
    if delay > MAX_DELAY {
        return Err(format!("delay must be at most 1h (got {})", s.trim()));
    }
    Ok(delay)
}

/// Parse a duration like `"250ms"`, `"2s"`, `"1m"` or `"1h"`.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Find the boundary between digits and suffix.
    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value.saturating_mul(60))),
        "h" => Ok(Duration::from_secs(value.saturating_mul(60 * 60))),
        _ => Err(format!(
            "unsupported duration unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}
