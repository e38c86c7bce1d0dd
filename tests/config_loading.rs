// tests/config_loading.rs

mod common;
use crate::common::ConfigFileBuilder;

use std::error::Error;
use std::fs;
use std::time::Duration;

use tempfile::tempdir;

use daemonrun::config::{load_and_validate, load_from_path, load_optional, parse_duration, ConfigFile};
use daemonrun::daemon::{DEFAULT_DELAY, INJECTED_ACTION_LINE};
use daemonrun::errors::DaemonError;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn empty_file_uses_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Daemonrun.toml");
    fs::write(&path, "")?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg, ConfigFile::default());
    assert_eq!(cfg.daemon.delay, DEFAULT_DELAY);
    assert_eq!(cfg.daemon.thread_name, "daemon");
    assert_eq!(cfg.daemon.action_message, INJECTED_ACTION_LINE);

    Ok(())
}

#[test]
fn daemon_section_overrides_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Daemonrun.toml");
    fs::write(
        &path,
        r#"
[daemon]
delay = "250ms"
thread_name = "  worker  "
action_message = "hello from the action"
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.daemon.delay, Duration::from_millis(250));
    assert_eq!(cfg.daemon.thread_name, "worker");
    assert_eq!(cfg.daemon.action_message, "hello from the action");

    let options = cfg.daemon_options();
    assert_eq!(options.delay, Duration::from_millis(250));
    assert_eq!(options.thread_name, "worker");

    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Daemonrun.toml");
    fs::write(&path, "[daemon]\nretries = 3\n")?;

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, DaemonError::TomlError(_)));

    Ok(())
}

#[test]
fn invalid_delay_is_a_config_error() {
    let err = ConfigFile::try_from(toml::from_str::<daemonrun::config::RawConfigFile>(
        "[daemon]\ndelay = \"soon\"\n",
    ).unwrap())
    .unwrap_err();

    match err {
        DaemonError::ConfigError(msg) => assert!(msg.contains("[daemon].delay")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn delay_longer_than_an_hour_is_rejected() {
    let raw = toml::from_str::<daemonrun::config::RawConfigFile>("[daemon]\ndelay = \"2h\"\n")
        .unwrap();
    let err = ConfigFile::try_from(raw).unwrap_err();
    assert!(err.to_string().contains("at most 1h"));
}

#[test]
fn blank_thread_name_is_rejected() {
    let raw = toml::from_str::<daemonrun::config::RawConfigFile>(
        "[daemon]\nthread_name = \"   \"\n",
    )
    .unwrap();
    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(DaemonError::ConfigError(_))
    ));
}

#[test]
fn missing_optional_file_falls_back_to_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("absent.toml");

    let cfg = load_optional(&path, false)?;
    assert_eq!(cfg, ConfigFile::default());

    Ok(())
}

#[test]
fn missing_required_file_is_an_io_error() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("absent.toml");

    let err = load_optional(&path, true).unwrap_err();
    assert!(matches!(err, DaemonError::IoError(_)));

    Ok(())
}

#[test]
fn builder_produces_validated_config() {
    let cfg = ConfigFileBuilder::new()
        .delay("1s")
        .thread_name("built")
        .action_message("built action")
        .build();

    assert_eq!(cfg.daemon.delay, Duration::from_secs(1));
    assert_eq!(cfg.daemon.thread_name, "built");
    assert_eq!(cfg.daemon.action_message, "built action");
}

#[test]
fn duration_strings() {
    assert_eq!(parse_duration("0ms"), Ok(Duration::ZERO));
    assert_eq!(parse_duration(" 2s "), Ok(Duration::from_secs(2)));
    assert_eq!(parse_duration("3m"), Ok(Duration::from_secs(180)));
    assert_eq!(parse_duration("1H"), Ok(Duration::from_secs(3600)));

    assert!(parse_duration("").is_err());
    assert!(parse_duration("15").is_err());
    assert!(parse_duration("s").is_err());
    assert!(parse_duration("5d").is_err());
}
