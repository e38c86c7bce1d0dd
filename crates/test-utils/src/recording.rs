use std::sync::{Arc, Mutex};

use daemonrun::daemon::{Announce, LifecycleObserver};
use daemonrun::types::RunFailure;

/// Ordered, thread-safe list of strings shared between a test and the
/// daemon thread(s) it starts.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Closure that appends `token` each time it is called.
    pub fn pusher(&self, token: &str) -> impl Fn() + Send + Sync + 'static {
        let log = self.clone();
        let token = token.to_string();
        move || log.push(token.clone())
    }
}

/// Observer that appends fixed tokens to an [`EventLog`] and keeps every
/// failure it is told about.
#[derive(Debug, Clone)]
pub struct RecordingObserver {
    log: EventLog,
    started: String,
    finished: String,
    failures: Arc<Mutex<Vec<RunFailure>>>,
}

impl RecordingObserver {
    /// Records `"S"` on start and `"F"` on finish.
    pub fn new(log: EventLog) -> Self {
        Self::with_tokens(log, "S", "F")
    }

    pub fn with_tokens(log: EventLog, started: &str, finished: &str) -> Self {
        Self {
            log,
            started: started.to_string(),
            finished: finished.to_string(),
            failures: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failures(&self) -> Vec<RunFailure> {
        self.failures.lock().unwrap().clone()
    }
}

impl LifecycleObserver for RecordingObserver {
    fn on_started(&self) {
        self.log.push(self.started.clone());
    }

    fn on_finished(&self) {
        self.log.push(self.finished.clone());
    }

    fn on_failed(&self, failure: &RunFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}

/// Announcer that writes every line into an [`EventLog`] instead of stdout.
#[derive(Debug, Clone)]
pub struct RecordingAnnouncer {
    log: EventLog,
}

impl RecordingAnnouncer {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl Announce for RecordingAnnouncer {
    fn announce(&self, line: &str) {
        self.log.push(line);
    }
}
