#![allow(dead_code)]

use std::time::Duration;

use daemonrun::config::{ConfigFile, RawConfigFile};
use daemonrun::daemon::DaemonOptions;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn delay(mut self, delay: &str) -> Self {
        self.config.daemon.delay = delay.to_string();
        self
    }

    pub fn thread_name(mut self, name: &str) -> Self {
        self.config.daemon.thread_name = name.to_string();
        self
    }

    pub fn action_message(mut self, message: &str) -> Self {
        self.config.daemon.action_message = message.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Daemon options with no delay, for tests that only care about ordering.
pub fn instant_options(thread_name: &str) -> DaemonOptions {
    DaemonOptions::default()
        .with_delay(Duration::ZERO)
        .with_thread_name(thread_name)
}
