// src/lib.rs

pub mod cli;
pub mod config;
pub mod daemon;
pub mod errors;
pub mod logging;
pub mod site;
pub mod types;

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::cli::{CliArgs, Command, DaemonArgs, SiteArgs};
use crate::config::{default_config_path, load_optional, ConfigFile};
use crate::daemon::{ChannelObserver, DaemonOptions, DaemonStarter};
use crate::site::{construct_school, construct_university, custom_eastwood, Building, BuildingKind};
use crate::types::LifecycleEvent;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the daemon starter(s) and a channel observer to wait on
/// - Ctrl-C handling
/// - the construction-site tour
pub async fn run(args: CliArgs) -> Result<()> {
    let (config_path, required) = match args.config {
        Some(ref p) => (PathBuf::from(p), true),
        None => (default_config_path(), false),
    };
    let cfg = load_optional(&config_path, required)?;
    debug!(path = %config_path.display(), ?cfg, "configuration loaded");

    match args.command.unwrap_or_default() {
        Command::Daemon(daemon_args) => run_daemons(&cfg, &daemon_args).await,
        Command::Site(site_args) => {
            print_site_tour(&mut std::io::stdout().lock(), &site_args)?;
            Ok(())
        }
    }
}

/// Start `args.runs` independent daemons and wait for all of them.
pub async fn run_daemons(cfg: &ConfigFile, args: &DaemonArgs) -> Result<()> {
    let mut options = cfg.daemon_options();
    if let Some(delay) = args.delay {
        options.delay = delay;
    }
    let message = args
        .message
        .clone()
        .unwrap_or_else(|| cfg.daemon.action_message.clone());

    if args.dry_run {
        print_dry_run(&options, &message, args.runs);
        return Ok(());
    }

    let runs = usize::from(args.runs);
    let (tx, mut rx) = mpsc::unbounded_channel::<LifecycleEvent>();

    let mut started = 0usize;
    let mut start_error = None;

    for index in 0..runs {
        let name = run_name(&options.thread_name, index, runs);
        let starter = DaemonStarter::new(options.clone().with_thread_name(name.clone()));
        let observer = Arc::new(ChannelObserver::with_sender(name.clone(), tx.clone()));
        let line = message.clone();

        // The handle is dropped: completion is tracked through the channel.
        match starter.start_daemon_with(observer, move || println!("{line}")) {
            Ok(_) => started += 1,
            Err(err) => {
                error!(daemon = %name, error = %err, started, "failed to start daemon");
                start_error = Some(err);
                break;
            }
        }
    }
    // Only the observers hold senders now; the channel closes when the last
    // daemon thread exits.
    drop(tx);

    // Runs that did start are still waited for before a start error is returned.
    let waited = tokio::select! {
        res = wait_for_daemons(&mut rx, started) => res,
        res = tokio::signal::ctrl_c() => {
            res?;
            warn!("interrupted; daemon threads are abandoned");
            Ok(())
        }
    };

    match start_error {
        Some(err) => Err(err.into()),
        None => waited,
    }
}

/// Consume lifecycle events until `expected` runs have ended.
///
/// Returns an error naming the failed daemons if any run panicked, or if the
/// channel closed before every run reported back.
pub async fn wait_for_daemons(
    rx: &mut mpsc::UnboundedReceiver<LifecycleEvent>,
    expected: usize,
) -> Result<()> {
    let mut ended = 0usize;
    let mut failed = BTreeSet::new();

    while ended < expected {
        let Some(event) = rx.recv().await else {
            bail!("lifecycle channel closed after {ended} of {expected} daemons ended");
        };
        debug!(?event, "lifecycle event");

        match event {
            LifecycleEvent::Started { daemon } => {
                info!(%daemon, "daemon reported start");
            }
            LifecycleEvent::Finished { daemon } => {
                ended += 1;
                info!(%daemon, ended, expected, "daemon reported finish");
            }
            LifecycleEvent::Failed { daemon, failure } => {
                ended += 1;
                warn!(%daemon, %failure, "daemon reported failure");
                failed.insert(daemon);
            }
        }
    }

    if !failed.is_empty() {
        bail!("daemon run(s) failed: {:?}", failed);
    }
    Ok(())
}

fn run_name(base: &str, index: usize, runs: usize) -> String {
    if runs == 1 {
        base.to_string()
    } else {
        format!("{base}-{}", index + 1)
    }
}

fn print_dry_run(options: &DaemonOptions, message: &str, runs: u16) {
    println!("daemonrun dry-run");
    println!("  daemon.delay = {:?}", options.delay);
    println!("  daemon.thread_name = {}", options.thread_name);
    println!("  daemon.action_message = {message}");
    println!("  runs = {runs}");

    debug!("dry-run complete (no daemon started)");
}

/// Write the buildings the construction site puts up, as in the lesson's
/// walkthrough: a public school, a language school, Sohag University and a
/// hand-built Eastwood school. Buildings are separated by a blank line.
pub fn print_site_tour(out: &mut impl Write, args: &SiteArgs) -> crate::errors::Result<()> {
    let buildings = [
        construct_school(BuildingKind::PublicSchool, "Basic School")?,
        construct_school(BuildingKind::LanguageSchool, "Public Language School")?,
        construct_university(BuildingKind::SohagUniversity)?,
        custom_eastwood(),
    ];

    let mut first = true;
    for building in buildings
        .iter()
        .filter(|b| args.only.is_none_or(|kind| b.kind == kind))
    {
        if !first {
            writeln!(out)?;
        }
        first = false;
        write_building(out, building)?;
    }
    Ok(())
}

fn write_building(out: &mut impl Write, b: &Building) -> std::io::Result<()> {
    writeln!(out, "{}", b.name)?;
    writeln!(out, "{}", b.licence.text)?;
    writeln!(out, "{:.1}", b.spec.height)?;
    writeln!(out, "{:.1}", b.spec.width)?;
    for item in b.languages.iter().chain(b.faculties.iter()) {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
