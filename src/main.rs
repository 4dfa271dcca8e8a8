// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker headless driver
//!
//! Reads one JSON command per line on stdin and writes one JSON outcome per
//! line on stdout. Logs go to stderr.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    db::FileStorage,
    services::{ConfiguredPosition, PositionSource, TracingMarkerSink},
    App, Command,
};

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    // Nothing touches storage until the position is known
    let center = match ConfiguredPosition::from_config(&config).current_position() {
        Ok(center) => center,
        Err(e) => {
            tracing::error!(error = %e, "Could not resolve position; not starting");
            return Err(e.into());
        }
    };

    let storage = FileStorage::open(&config.storage_dir).context("Failed to open storage")?;
    tracing::info!(
        dir = %storage.dir().display(),
        key = %config.storage_key,
        "Starting Workout Tracker"
    );

    let mut app = App::new(config, Arc::new(storage), TracingMarkerSink::new(), center);
    if let Err(e) = app.restore() {
        emit(&e.to_response())?;
    }
    emit(&app.dispatch(Command::List)?)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed command");
                emit(&serde_json::json!({ "error": "bad_request", "details": e.to_string() }))?;
                continue;
            }
        };

        match app.dispatch(command) {
            Ok(outcome) => emit(&outcome)?,
            Err(e) => emit(&e.to_response())?,
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

/// Write one JSON line to stdout.
fn emit<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
