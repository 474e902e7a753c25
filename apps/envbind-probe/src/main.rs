//! Environment probe.
//!
//! Captures the process environment snapshot, binds a sample configuration
//! record against the environment and prints both, one `key=value` per line.
//! Any binding error ends the process with a failure status.
//!
//! # Usage
//!
//! ```bash
//! envbind-probe
//! SHLVL=3 RUST_LOG=envbind=debug envbind-probe
//! ```

// CLI tools are expected to print to stdout
#![allow(clippy::print_stdout)]

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use envbind::{Binder, EnvBind, EnvSnapshot};
use tracing_subscriber::EnvFilter;

/// Variables the probe reports on.
#[derive(Debug, Default, EnvBind)]
pub struct ProbeConfig {
    pub path: Vec<String>,
    pub shell: String,
    pub shlvl: i64,
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("environment probe failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    // Identity first; everything below receives the snapshot explicitly.
    let snapshot = envbind::init().context("failed to capture environment snapshot")?;

    let mut config = ProbeConfig::default();
    let report = Binder::for_snapshot(snapshot)
        .bind(&mut config)
        .context("failed to bind probe configuration")?;
    tracing::info!(applied = ?report.applied(), "probe configuration bound");

    let mut out = io::stdout().lock();
    write_report(&mut out, snapshot, &config)?;
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    snapshot: &EnvSnapshot,
    config: &ProbeConfig,
) -> io::Result<()> {
    writeln!(out, "host={}", snapshot.host())?;
    writeln!(out, "user={}", snapshot.user())?;
    writeln!(out, "separator={}", snapshot.separator())?;
    writeln!(out, "shell={}", config.shell)?;
    writeln!(out, "shlvl={}", config.shlvl)?;
    for (i, entry) in config.path.iter().enumerate() {
        writeln!(out, "path[{i}]={entry}")?;
    }
    Ok(())
}
