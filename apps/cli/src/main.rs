// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! wallsync - checks a structural analysis model against an architectural
//! model.
//!
//! Every analytical wall surface must lie inside the buffered solid of at
//! least one architectural wall. The report counts surfaces per match class
//! (none / easy / tricky / hazardous) and lists the uncoordinated ones.
//!
//! # Exit status
//!
//! - `0` every surface matched at least one wall
//! - `1` at least one surface matched no wall
//! - `2` the run could not be set up (bad arguments, unreadable models)

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wallsync_ingest::{load_analytical_surfaces, load_architectural_walls};
use wallsync_matching::SurfaceWallMatcher;

mod config;
mod report;

use config::{Cli, Config, OutputFormat};
use report::RunReport;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Run failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr so a report on stdout stays machine readable
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

/// Returns whether the models are fully coordinated
fn run(cli: Cli) -> Result<bool> {
    let config = Config::from_cli(cli)?;
    let start = Instant::now();

    tracing::info!(
        analytical = %config.analytical.display(),
        architectural = %config.architectural.display(),
        buffer_distance = config.matching.buffer_distance,
        grid_resolution = config.matching.grid_resolution,
        worker_threads = config.worker_threads,
        "Starting wallsync"
    );

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
        .context("Failed to initialize rayon thread pool")?;

    let matcher = SurfaceWallMatcher::new(config.matching).context("Invalid matching configuration")?;

    let surfaces = load_analytical_surfaces(&config.analytical).with_context(|| {
        format!("Failed to load analytical model {}", config.analytical.display())
    })?;
    let walls = load_architectural_walls(&config.architectural, config.weld_tolerance)
        .with_context(|| {
            format!(
                "Failed to load architectural model {}",
                config.architectural.display()
            )
        })?;

    let report = matcher.find_matching_partners(&surfaces.items, &walls.items);
    let run = RunReport::new(&report, matcher.config(), &surfaces.rejected, &walls.rejected);

    let rendered = match config.format {
        OutputFormat::Text => run.to_string(),
        OutputFormat::Json => run.to_json().context("Failed to serialize report")? + "\n",
    };
    match &config.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    tracing::info!(
        coordinated = run.coordinated,
        total_time_ms = start.elapsed().as_millis() as u64,
        "Run complete"
    );

    Ok(run.coordinated)
}
