// src/daemon/observer.rs

//! Lifecycle observers.
//!
//! All callbacks run on the daemon's worker thread, never on the thread that
//! called `start`. Implementations that share state with the caller must
//! synchronise it themselves.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::types::{LifecycleEvent, RunFailure};

/// Notified when a daemon run starts and finishes.
pub trait LifecycleObserver: Send + Sync {
    fn on_started(&self);

    fn on_finished(&self);

    /// Called instead of `on_finished` when the run panicked.
    fn on_failed(&self, _failure: &RunFailure) {}
}

/// Observer built from two closures.
pub struct FnObserver<S, F> {
    started: S,
    finished: F,
}

impl<S, F> FnObserver<S, F>
where
    S: Fn() + Send + Sync,
    F: Fn() + Send + Sync,
{
    pub fn new(started: S, finished: F) -> Self {
        Self { started, finished }
    }
}

impl<S, F> fmt::Debug for FnObserver<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObserver").finish_non_exhaustive()
    }
}

impl<S, F> LifecycleObserver for FnObserver<S, F>
where
    S: Fn() + Send + Sync,
    F: Fn() + Send + Sync,
{
    fn on_started(&self) {
        (self.started)()
    }

    fn on_finished(&self) {
        (self.finished)()
    }
}

/// Forwards lifecycle callbacks as [`LifecycleEvent`]s over a Tokio channel.
///
/// The unbounded sender never blocks, so it is safe to use from the plain OS
/// thread the daemon runs on. A dropped receiver is not an error; the event is
/// discarded and logged at debug.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    daemon: String,
    tx: mpsc::UnboundedSender<LifecycleEvent>,
}

impl ChannelObserver {
    /// Create an observer together with the receiving end of its channel.
    pub fn new(daemon: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<LifecycleEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(daemon, tx), rx)
    }

    /// Share an existing channel, e.g. one receiver for several daemons.
    pub fn with_sender(daemon: impl Into<String>, tx: mpsc::UnboundedSender<LifecycleEvent>) -> Self {
        Self {
            daemon: daemon.into(),
            tx,
        }
    }

    fn emit(&self, event: LifecycleEvent) {
        if self.tx.send(event).is_err() {
            debug!(daemon = %self.daemon, "lifecycle receiver dropped; event discarded");
        }
    }
}

impl LifecycleObserver for ChannelObserver {
    fn on_started(&self) {
        self.emit(LifecycleEvent::Started {
            daemon: self.daemon.clone(),
        });
    }

    fn on_finished(&self) {
        self.emit(LifecycleEvent::Finished {
            daemon: self.daemon.clone(),
        });
    }

    fn on_failed(&self, failure: &RunFailure) {
        self.emit(LifecycleEvent::Failed {
            daemon: self.daemon.clone(),
            failure: failure.clone(),
        });
    }
}

/// Calls several observers in the order they were added.
#[derive(Clone, Default)]
pub struct FanOut {
    observers: Vec<Arc<dyn LifecycleObserver>>,
}

impl fmt::Debug for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FanOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn LifecycleObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl LifecycleObserver for FanOut {
    fn on_started(&self) {
        for o in &self.observers {
            o.on_started();
        }
    }

    fn on_finished(&self) {
        for o in &self.observers {
            o.on_finished();
        }
    }

    fn on_failed(&self, failure: &RunFailure) {
        for o in &self.observers {
            o.on_failed(failure);
        }
    }
}
