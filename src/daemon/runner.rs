// src/daemon/runner.rs

//! The daemon itself and the body of its worker thread.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use tracing::{debug, error, info, warn};

use crate::errors::{DaemonError, Result};
use crate::types::{DaemonState, RunFailure};

use super::announce::{Announce, StdoutAnnouncer};
use super::handle::{DaemonHandle, StateCell};
use super::observer::LifecycleObserver;
use super::{DaemonOptions, FINISHED_LINE, RUNNING_LINE, STARTED_LINE};

/// A single, not yet started daemon run.
///
/// `start` consumes the value, so one `Daemon` can never be started twice;
/// build a new one for every run.
pub struct Daemon {
    options: DaemonOptions,
    observer: Option<Arc<dyn LifecycleObserver>>,
    announcer: Arc<dyn Announce>,
}

impl fmt::Debug for Daemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Daemon")
            .field("options", &self.options)
            .field("observer_attached", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Daemon {
    fn default() -> Self {
        Self::new()
    }
}

impl Daemon {
    pub fn new() -> Self {
        Self::with_options(DaemonOptions::default())
    }

    pub fn with_options(options: DaemonOptions) -> Self {
        Self {
            options,
            observer: None,
            announcer: Arc::new(StdoutAnnouncer),
        }
    }

    /// Replace the default stdout announcer.
    pub fn with_announcer(mut self, announcer: Arc<dyn Announce>) -> Self {
        self.announcer = announcer;
        self
    }

    pub fn options(&self) -> &DaemonOptions {
        &self.options
    }

    /// Attach the observer notified by this run. Replaces any earlier one.
    pub fn attach_observer(&mut self, observer: Arc<dyn LifecycleObserver>) {
        self.observer = Some(observer);
    }

    /// Spawn the worker thread and return without waiting for it.
    ///
    /// Fails with [`DaemonError::ObserverNotAttached`] before any thread is
    /// created if no observer was attached, and with
    /// [`DaemonError::InvalidThreadName`] for names the OS thread can't carry.
    pub fn start<F>(self, action: F) -> Result<DaemonHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let observer = self.observer.ok_or(DaemonError::ObserverNotAttached)?;
        let name = self.options.thread_name.clone();
        check_thread_name(&name)?;
        let state = Arc::new(StateCell::new());

        let worker = Worker {
            name: name.clone(),
            options: self.options,
            observer,
            announcer: self.announcer,
            state: Arc::clone(&state),
        };

        let join = thread::Builder::new()
            .name(name.clone())
            .spawn(move || worker.run(action))
            .map_err(DaemonError::Spawn)?;

        info!(daemon = %name, "daemon thread spawned");
        Ok(DaemonHandle::new(name, state, join))
    }
}

struct Worker {
    name: String,
    options: DaemonOptions,
    observer: Arc<dyn LifecycleObserver>,
    announcer: Arc<dyn Announce>,
    state: Arc<StateCell>,
}

impl Worker {
    fn run<F: FnOnce()>(self, action: F) -> DaemonState {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.lifecycle(action)));

        let payload = match outcome {
            Ok(()) => return DaemonState::Finished,
            Err(payload) => payload,
        };

        let failure = RunFailure {
            state: self.state.get(),
            message: panic_message(payload.as_ref()),
        };
        error!(
            daemon = %self.name,
            state = %failure.state,
            error = %failure.message,
            "daemon run panicked"
        );
        self.state.set(DaemonState::Failed);

        let observer = &self.observer;
        if panic::catch_unwind(AssertUnwindSafe(|| observer.on_failed(&failure))).is_err() {
            warn!(daemon = %self.name, "observer panicked while handling a failed run");
        }

        DaemonState::Failed
    }

    fn lifecycle<F: FnOnce()>(&self, action: F) {
        self.transition(DaemonState::Started);
        self.signal(STARTED_LINE);
        self.observer.on_started();

        self.transition(DaemonState::Running);
        self.signal(RUNNING_LINE);

        thread::sleep(self.options.delay);
        action();
        self.transition(DaemonState::ActionInjected);
        thread::sleep(self.options.delay);

        self.signal(FINISHED_LINE);
        self.observer.on_finished();
        self.transition(DaemonState::Finished);
    }

    fn transition(&self, next: DaemonState) {
        debug!(
            daemon = %self.name,
            from = %self.state.get(),
            to = %next,
            delay_ms = u64::try_from(self.options.delay.as_millis()).unwrap_or(u64::MAX),
            "daemon state change"
        );
        self.state.set(next);
    }

    fn signal(&self, line: &str) {
        debug!(daemon = %self.name, line, "daemon signal");
        self.announcer.announce(line);
    }
}

/// `thread::Builder::spawn` panics on interior NULs instead of erroring.
pub(crate) fn check_thread_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DaemonError::InvalidThreadName(name.to_string(), "name is empty"));
    }
    if name.contains('\0') {
        return Err(DaemonError::InvalidThreadName(
            name.to_string(),
            "name contains a NUL byte",
        ));
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
