// src/config/mod.rs

//! Configuration loading and validation for daemonrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate and convert raw values into typed settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_optional};
pub use model::{ConfigFile, DaemonSection, RawConfigFile, RawDaemonSection};
pub use validate::{parse_delay, parse_duration, MAX_DELAY};
