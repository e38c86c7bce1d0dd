// src/types.rs

use std::fmt;

/// Position of a single daemon run in its lifecycle.
///
/// Runs only ever move forward:
/// `Created -> Started -> Running -> ActionInjected -> Finished`.
/// `Failed` is terminal and may be entered from any non-terminal state when
/// the action or an observer callback panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DaemonState {
    Created,
    Started,
    Running,
    ActionInjected,
    Finished,
    Failed,
}

impl DaemonState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DaemonState::Finished | DaemonState::Failed)
    }
}

impl fmt::Display for DaemonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DaemonState::Created => "created",
            DaemonState::Started => "started",
            DaemonState::Running => "running",
            DaemonState::ActionInjected => "action-injected",
            DaemonState::Finished => "finished",
            DaemonState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A panic captured on the daemon thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFailure {
    /// State the run was in when the panic happened.
    pub state: DaemonState,
    /// Panic payload rendered as text (or a placeholder for non-string payloads).
    pub message: String,
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "daemon failed while {}: {}", self.state, self.message)
    }
}

/// Lifecycle notifications as plain values, for channel-based observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Started { daemon: String },
    Finished { daemon: String },
    Failed { daemon: String, failure: RunFailure },
}
