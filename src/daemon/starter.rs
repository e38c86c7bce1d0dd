// src/daemon/starter.rs

use std::sync::Arc;

use crate::errors::Result;

use super::announce::{Announce, StdoutAnnouncer};
use super::handle::DaemonHandle;
use super::observer::{FanOut, LifecycleObserver};
use super::runner::Daemon;
use super::DaemonOptions;

pub const STARTER_STARTED_LINE: &str =
    "{-----------Daemon started by the daemon starter-----------}";
pub const STARTER_FINISHED_LINE: &str =
    "{-----------Daemon terminated by the daemon starter-----------}";

/// Console observer that can also launch daemons with itself attached.
///
/// Its lines go through the same [`Announce`] sink it hands to the daemons it
/// starts, so one sink sees the whole transcript in order.
#[derive(Clone)]
pub struct DaemonStarter {
    options: DaemonOptions,
    announcer: Arc<dyn Announce>,
}

impl std::fmt::Debug for DaemonStarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaemonStarter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for DaemonStarter {
    fn default() -> Self {
        Self::new(DaemonOptions::default())
    }
}

impl DaemonStarter {
    pub fn new(options: DaemonOptions) -> Self {
        Self {
            options,
            announcer: Arc::new(StdoutAnnouncer),
        }
    }

    pub fn with_announcer(mut self, announcer: Arc<dyn Announce>) -> Self {
        self.announcer = announcer;
        self
    }

    pub fn options(&self) -> &DaemonOptions {
        &self.options
    }

    /// Build a fresh daemon, attach this starter and run `action` on it.
    pub fn start_daemon<F>(&self, action: F) -> Result<DaemonHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        self.launch(Arc::new(self.clone()), action)
    }

    /// Like [`start_daemon`](Self::start_daemon), but `extra` is notified
    /// right after the starter prints its own line.
    pub fn start_daemon_with<F>(
        &self,
        extra: Arc<dyn LifecycleObserver>,
        action: F,
    ) -> Result<DaemonHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let observer = FanOut::new().with(Arc::new(self.clone())).with(extra);
        self.launch(Arc::new(observer), action)
    }

    fn launch<F>(&self, observer: Arc<dyn LifecycleObserver>, action: F) -> Result<DaemonHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let mut daemon =
            Daemon::with_options(self.options.clone()).with_announcer(Arc::clone(&self.announcer));
        daemon.attach_observer(observer);
        daemon.start(action)
    }
}

impl LifecycleObserver for DaemonStarter {
    fn on_started(&self) {
        self.announcer.announce(STARTER_STARTED_LINE);
    }

    fn on_finished(&self) {
        self.announcer.announce(STARTER_FINISHED_LINE);
    }
}
