#![allow(dead_code)]

use std::sync::Arc;

use daemonrun::daemon::{Daemon, DaemonHandle};

pub use daemonrun_test_utils::builders::{instant_options, ConfigFileBuilder};
pub use daemonrun_test_utils::{
    init_tracing, with_timeout, EventLog, RecordingAnnouncer, RecordingObserver,
};

/// Start a zero-delay daemon that records its signal lines into `transcript`
/// and notifies `observer`.
pub fn start_recorded<F>(
    name: &str,
    transcript: &EventLog,
    observer: RecordingObserver,
    action: F,
) -> DaemonHandle
where
    F: FnOnce() + Send + 'static,
{
    let mut daemon = Daemon::with_options(instant_options(name))
        .with_announcer(Arc::new(RecordingAnnouncer::new(transcript.clone())));
    daemon.attach_observer(Arc::new(observer));
    daemon.start(action).expect("daemon should start")
}
