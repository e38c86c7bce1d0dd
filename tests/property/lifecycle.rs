// tests/property/lifecycle.rs

use std::sync::Arc;

use proptest::prelude::*;

use daemonrun::daemon::Daemon;
use daemonrun::types::DaemonState;
use daemonrun_test_utils::builders::instant_options;
use daemonrun_test_utils::{EventLog, RecordingAnnouncer, RecordingObserver};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// However many daemons run side by side, each one's own observer and
    /// action tokens stay in start/action/finish order, and each action runs
    /// exactly once.
    #[test]
    fn concurrent_runs_keep_per_run_order(runs in 1usize..6) {
        let transcript = EventLog::new();
        let mut logs = Vec::new();
        let mut handles = Vec::new();

        for i in 0..runs {
            let log = EventLog::new();
            let mut daemon = Daemon::with_options(instant_options(&format!("prop-{i}")))
                .with_announcer(Arc::new(RecordingAnnouncer::new(transcript.clone())));
            daemon.attach_observer(Arc::new(RecordingObserver::new(log.clone())));
            handles.push(daemon.start(log.pusher("A")).unwrap());
            logs.push(log);
        }

        for handle in handles {
            prop_assert_eq!(handle.join().unwrap(), DaemonState::Finished);
        }
        for log in &logs {
            prop_assert_eq!(log.snapshot(), vec!["S", "A", "F"]);
        }
        prop_assert_eq!(transcript.snapshot().len(), runs * 3);
    }
}
