// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

use crate::daemon::{DaemonOptions, DEFAULT_DELAY, DEFAULT_THREAD_NAME, INJECTED_ACTION_LINE};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [daemon]
/// delay = "2s"
/// thread_name = "daemon"
/// action_message = "{-----------I am an injected Action-----------}"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub daemon: RawDaemonSection,
}

/// `[daemon]` section, unvalidated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDaemonSection {
    /// Duration string with an `ms`, `s`, `m` or `h` suffix.
    #[serde(default = "default_delay")]
    pub delay: String,

    #[serde(default = "default_thread_name")]
    pub thread_name: String,

    /// Line printed by the demo action.
    #[serde(default = "default_action_message")]
    pub action_message: String,
}

fn default_delay() -> String {
    format!("{}ms", DEFAULT_DELAY.as_millis())
}

fn default_thread_name() -> String {
    DEFAULT_THREAD_NAME.to_string()
}

fn default_action_message() -> String {
    INJECTED_ACTION_LINE.to_string()
}

impl Default for RawDaemonSection {
    fn default() -> Self {
        Self {
            delay: default_delay(),
            thread_name: default_thread_name(),
            action_message: default_action_message(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub daemon: DaemonSection,
}

/// Validated `[daemon]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonSection {
    pub delay: Duration,
    pub thread_name: String,
    pub action_message: String,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(daemon: DaemonSection) -> Self {
        Self { daemon }
    }

    /// Runner options derived from the `[daemon]` section.
    pub fn daemon_options(&self) -> DaemonOptions {
        DaemonOptions::default()
            .with_delay(self.daemon.delay)
            .with_thread_name(self.daemon.thread_name.clone())
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            daemon: DaemonSection {
                delay: DEFAULT_DELAY,
                thread_name: default_thread_name(),
                action_message: default_action_message(),
            },
        }
    }
}
