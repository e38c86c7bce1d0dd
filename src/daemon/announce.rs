// src/daemon/announce.rs

//! Output sink for the daemon's own signal lines.
//!
//! The worker thread never calls `println!` directly; it goes through an
//! [`Announce`] implementation so tests can capture the exact transcript.

/// Receives each signal line the daemon emits.
pub trait Announce: Send + Sync {
    fn announce(&self, line: &str);
}

/// Writes every line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutAnnouncer;

impl Announce for StdoutAnnouncer {
    fn announce(&self, line: &str) {
        println!("{line}");
    }
}
