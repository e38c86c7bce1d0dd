// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaemonError {
    #[error("no lifecycle observer attached before start")]
    ObserverNotAttached,

    #[error("failed to spawn daemon thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("daemon thread '{0}' panicked outside the lifecycle guard")]
    WorkerPanicked(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{kind} is not a {expected}")]
    WrongCategory {
        kind: String,
        expected: &'static str,
    },

    #[error("invalid daemon thread name {0:?}: {1}")]
    InvalidThreadName(String, &'static str),
}

pub type Result<T> = std::result::Result<T, DaemonError>;
