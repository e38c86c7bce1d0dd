// src/daemon/handle.rs

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use crate::errors::{DaemonError, Result};
use crate::types::DaemonState;

/// Current lifecycle state, shared between the worker and its handle.
#[derive(Debug)]
pub(crate) struct StateCell {
    inner: Mutex<DaemonState>,
}

impl StateCell {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(DaemonState::Created),
        }
    }

    pub(crate) fn get(&self) -> DaemonState {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set(&self, state: DaemonState) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Returned by [`Daemon::start`](super::Daemon::start).
///
/// Dropping the handle detaches the worker thread; the run continues and the
/// observer is still notified. Keep it only if you want to poll or wait.
pub struct DaemonHandle {
    name: String,
    state: Arc<StateCell>,
    join: JoinHandle<DaemonState>,
}

impl fmt::Debug for DaemonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaemonHandle")
            .field("name", &self.name)
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

impl DaemonHandle {
    pub(crate) fn new(name: String, state: Arc<StateCell>, join: JoinHandle<DaemonState>) -> Self {
        Self { name, state, join }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the run's state. May be stale by the time it is read.
    pub fn state(&self) -> DaemonState {
        self.state.get()
    }

    /// True once the worker thread has returned.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Block until the worker thread exits and return its final state.
    ///
    /// Panics inside the lifecycle are caught by the worker and reported as
    /// `DaemonState::Failed`; an `Err` here means the worker itself unwound.
    pub fn join(self) -> Result<DaemonState> {
        let name = self.name;
        self.join
            .join()
            .map_err(|_| DaemonError::WorkerPanicked(name))
    }
}
