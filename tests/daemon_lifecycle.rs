// tests/daemon_lifecycle.rs

mod common;
use crate::common::{
    init_tracing, instant_options, start_recorded, with_timeout, EventLog, RecordingAnnouncer,
    RecordingObserver,
};

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc as std_mpsc, Arc};
use std::time::{Duration, Instant};

use daemonrun::daemon::starter::{STARTER_FINISHED_LINE, STARTER_STARTED_LINE};
use daemonrun::daemon::{
    ChannelObserver, Daemon, DaemonOptions, DaemonStarter, FnObserver, FINISHED_LINE,
    INJECTED_ACTION_LINE, RUNNING_LINE, STARTED_LINE,
};
use daemonrun::types::{DaemonState, LifecycleEvent};
use daemonrun::wait_for_daemons;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn observer_sees_start_then_action_then_finish() -> TestResult {
    init_tracing();

    let log = EventLog::new();
    let transcript = EventLog::new();
    let handle = start_recorded(
        "order",
        &transcript,
        RecordingObserver::new(log.clone()),
        log.pusher("A"),
    );

    assert_eq!(handle.join()?, DaemonState::Finished);
    assert_eq!(log.snapshot(), vec!["S", "A", "F"]);

    Ok(())
}

#[test]
fn transcript_matches_console_lines() -> TestResult {
    init_tracing();

    let transcript = EventLog::new();
    let starter = DaemonStarter::new(instant_options("transcript"))
        .with_announcer(Arc::new(RecordingAnnouncer::new(transcript.clone())));

    let action_log = transcript.clone();
    let handle = starter.start_daemon(move || action_log.push(INJECTED_ACTION_LINE))?;
    assert_eq!(handle.join()?, DaemonState::Finished);

    assert_eq!(
        transcript.snapshot(),
        vec![
            STARTED_LINE,
            STARTER_STARTED_LINE,
            RUNNING_LINE,
            INJECTED_ACTION_LINE,
            FINISHED_LINE,
            STARTER_FINISHED_LINE,
        ]
    );

    Ok(())
}

#[test]
fn start_returns_before_the_run_finishes() -> TestResult {
    init_tracing();

    let (release_tx, release_rx) = std_mpsc::channel::<()>();
    let log = EventLog::new();
    let transcript = EventLog::new();

    let action_log = log.clone();
    let handle = start_recorded(
        "non-blocking",
        &transcript,
        RecordingObserver::new(log.clone()),
        move || {
            // Hold the worker inside the action until the test lets go.
            release_rx.recv().expect("test dropped the release sender");
            action_log.push("A");
        },
    );

    // We got here while the action is still blocked.
    assert!(!handle.is_finished());
    assert!(!handle.state().is_terminal());
    assert!(!log.snapshot().contains(&"F".to_string()));

    release_tx.send(())?;
    assert_eq!(handle.join()?, DaemonState::Finished);
    assert_eq!(log.snapshot(), vec!["S", "A", "F"]);

    Ok(())
}

#[test]
fn action_runs_exactly_once() -> TestResult {
    let calls = Arc::new(AtomicUsize::new(0));
    let transcript = EventLog::new();

    let counter = Arc::clone(&calls);
    let handle = start_recorded(
        "once",
        &transcript,
        RecordingObserver::new(EventLog::new()),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    handle.join()?;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn two_daemons_keep_their_own_order() -> TestResult {
    init_tracing();

    let first = EventLog::new();
    let second = EventLog::new();
    let shared_transcript = EventLog::new();

    let a = start_recorded(
        "first",
        &shared_transcript,
        RecordingObserver::new(first.clone()),
        first.pusher("A"),
    );
    let b = start_recorded(
        "second",
        &shared_transcript,
        RecordingObserver::new(second.clone()),
        second.pusher("A"),
    );

    assert_eq!(a.join()?, DaemonState::Finished);
    assert_eq!(b.join()?, DaemonState::Finished);

    assert_eq!(first.snapshot(), vec!["S", "A", "F"]);
    assert_eq!(second.snapshot(), vec!["S", "A", "F"]);
    // Both runs announced all three signals, in whatever interleaving.
    assert_eq!(shared_transcript.snapshot().len(), 6);

    Ok(())
}

#[test]
fn delay_is_slept_before_and_after_the_action() -> TestResult {
    let delay = Duration::from_millis(40);
    let options = DaemonOptions::default()
        .with_delay(delay)
        .with_thread_name("slow");

    let mut daemon = Daemon::with_options(options)
        .with_announcer(Arc::new(RecordingAnnouncer::new(EventLog::new())));
    daemon.attach_observer(Arc::new(FnObserver::new(|| {}, || {})));

    let started_at = Instant::now();
    let handle = daemon.start(|| {})?;
    assert_eq!(handle.join()?, DaemonState::Finished);
    assert!(started_at.elapsed() >= delay * 2);

    Ok(())
}

#[test]
fn worker_thread_carries_the_configured_name() -> TestResult {
    let seen = EventLog::new();
    let transcript = EventLog::new();

    let names = seen.clone();
    let handle = start_recorded(
        "named-daemon",
        &transcript,
        RecordingObserver::new(EventLog::new()),
        move || names.push(std::thread::current().name().unwrap_or("<unnamed>")),
    );

    assert_eq!(handle.name(), "named-daemon");
    handle.join()?;
    assert_eq!(seen.snapshot(), vec!["named-daemon"]);

    Ok(())
}

#[test]
fn attaching_again_replaces_the_observer() -> TestResult {
    let old = EventLog::new();
    let new = EventLog::new();

    let mut daemon = Daemon::with_options(instant_options("replace"))
        .with_announcer(Arc::new(RecordingAnnouncer::new(EventLog::new())));
    daemon.attach_observer(Arc::new(RecordingObserver::new(old.clone())));
    daemon.attach_observer(Arc::new(RecordingObserver::new(new.clone())));

    daemon.start(|| {})?.join()?;

    assert!(old.snapshot().is_empty());
    assert_eq!(new.snapshot(), vec!["S", "F"]);

    Ok(())
}

#[tokio::test]
async fn channel_observer_reports_start_and_finish() -> TestResult {
    init_tracing();

    let (observer, mut rx) = ChannelObserver::new("channel");
    let starter = DaemonStarter::new(instant_options("channel"))
        .with_announcer(Arc::new(RecordingAnnouncer::new(EventLog::new())));

    // Handle dropped on purpose: fire-and-forget.
    starter.start_daemon_with(Arc::new(observer), || {})?;

    let first = with_timeout(rx.recv()).await;
    assert_eq!(
        first,
        Some(LifecycleEvent::Started {
            daemon: "channel".to_string()
        })
    );
    let second = with_timeout(rx.recv()).await;
    assert_eq!(
        second,
        Some(LifecycleEvent::Finished {
            daemon: "channel".to_string()
        })
    );

    Ok(())
}

#[tokio::test]
async fn wait_for_daemons_returns_once_every_run_finished() -> TestResult {
    init_tracing();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for name in ["w-1", "w-2", "w-3"] {
        let starter = DaemonStarter::new(instant_options(name))
            .with_announcer(Arc::new(RecordingAnnouncer::new(EventLog::new())));
        starter.start_daemon_with(Arc::new(ChannelObserver::with_sender(name, tx.clone())), || {})?;
    }
    drop(tx);

    with_timeout(wait_for_daemons(&mut rx, 3)).await?;

    Ok(())
}
