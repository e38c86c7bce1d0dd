// src/daemon/mod.rs

//! Daemon lifecycle runner.
//!
//! A [`Daemon`] executes one injected action on its own OS thread and keeps
//! an attached [`LifecycleObserver`] informed while it does so. The worker
//! performs, strictly in order:
//!
//! 1. announce [`STARTED_LINE`]
//! 2. `observer.on_started()`
//! 3. announce [`RUNNING_LINE`]
//! 4. sleep for the configured delay
//! 5. run the action (exactly once)
//! 6. sleep for the configured delay
//! 7. announce [`FINISHED_LINE`]
//! 8. `observer.on_finished()`
//!
//! - [`runner`] owns `Daemon` and the worker thread body.
//! - [`observer`] defines the observer contract and stock observers.
//! - [`starter`] provides `DaemonStarter`, the console-printing observer that
//!   also knows how to start a daemon with itself attached.
//! - [`announce`] is the sink for the runner's own signal lines.
//! - [`handle`] is what `start` hands back to the caller.

use std::time::Duration;

pub mod announce;
pub mod handle;
pub mod observer;
pub mod runner;
pub mod starter;

pub use announce::{Announce, StdoutAnnouncer};
pub use handle::DaemonHandle;
pub use observer::{ChannelObserver, FanOut, FnObserver, LifecycleObserver};
pub use runner::Daemon;
pub use starter::DaemonStarter;

pub const STARTED_LINE: &str = "********** Daemon started **********";
pub const RUNNING_LINE: &str = "********** Daemon running **********";
pub const FINISHED_LINE: &str = "********** Daemon finished **********";

/// What the demo action prints when nothing else is configured.
pub const INJECTED_ACTION_LINE: &str = "{-----------I am an injected Action-----------}";

/// Delay applied before and after the injected action.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

pub const DEFAULT_THREAD_NAME: &str = "daemon";

/// Settings for a single daemon run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonOptions {
    /// Simulated work time, slept once before and once after the action.
    pub delay: Duration,
    /// Name given to the spawned OS thread; also used as the `daemon` log field.
    pub thread_name: String,
}

impl Default for DaemonOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl DaemonOptions {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}
