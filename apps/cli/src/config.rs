// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command line and environment configuration.
//!
//! Every flag can also be set through a `WALLSYNC_*` environment variable;
//! the flag wins when both are given.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use wallsync_ingest::{LengthUnit, DEFAULT_WELD_TOLERANCE};
use wallsync_matching::{MatchConfig, DEFAULT_BUFFER_DISTANCE, DEFAULT_GRID_RESOLUTION};

#[derive(Parser, Debug, Clone)]
#[command(name = "wallsync")]
#[command(version, about = "Check that every analytical wall surface has an architectural wall around it", long_about = None)]
pub struct Cli {
    /// Structural analysis model export (JSON)
    #[arg(long, env = "WALLSYNC_ANALYTICAL")]
    pub analytical: PathBuf,

    /// Architectural model export (JSON)
    #[arg(long, env = "WALLSYNC_ARCHITECTURAL")]
    pub architectural: PathBuf,

    /// Distance wall vertices are pushed out along their normals
    #[arg(long, env = "WALLSYNC_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_DISTANCE)]
    pub buffer_size: f64,

    /// Unit of --buffer-size (m, cm or mm)
    #[arg(long, env = "WALLSYNC_BUFFER_UNIT", default_value = "m")]
    pub buffer_unit: LengthUnit,

    /// Interior sample points per axis
    #[arg(long, env = "WALLSYNC_GRID_RESOLUTION", default_value_t = DEFAULT_GRID_RESOLUTION)]
    pub grid_resolution: usize,

    /// Bounding-box pre-check margin in --buffer-unit (default: the buffer distance)
    #[arg(long, env = "WALLSYNC_PREFILTER_MARGIN")]
    pub prefilter_margin: Option<f64>,

    /// Vertex weld distance for wall meshes, in metres
    #[arg(long, env = "WALLSYNC_WELD_TOLERANCE", default_value_t = DEFAULT_WELD_TOLERANCE)]
    pub weld_tolerance: f64,

    /// Worker threads (default: number of CPUs)
    #[arg(long, env = "WALLSYNC_WORKER_THREADS")]
    pub threads: Option<usize>,

    /// Report format
    #[arg(long, value_enum, env = "WALLSYNC_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "WALLSYNC_LOG_JSON")]
    pub log_json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved run configuration, lengths in metres.
#[derive(Debug, Clone)]
pub struct Config {
    pub analytical: PathBuf,
    pub architectural: PathBuf,
    pub matching: MatchConfig,
    pub weld_tolerance: f64,
    /// Number of worker threads for parallel processing.
    pub worker_threads: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(
            cli.buffer_size.is_finite() && cli.buffer_size >= 0.0,
            "buffer size must be a finite, non-negative number (got {})",
            cli.buffer_size
        );
        ensure!(
            cli.weld_tolerance.is_finite() && cli.weld_tolerance >= 0.0,
            "weld tolerance must be a finite, non-negative number (got {})",
            cli.weld_tolerance
        );

        let mut matching = MatchConfig::new(cli.buffer_unit.to_metres(cli.buffer_size))
            .with_grid_resolution(cli.grid_resolution);
        if let Some(margin) = cli.prefilter_margin {
            matching = matching.with_prefilter_margin(cli.buffer_unit.to_metres(margin));
        }

        Ok(Self {
            analytical: cli.analytical,
            architectural: cli.architectural,
            matching,
            weld_tolerance: cli.weld_tolerance,
            worker_threads: cli
                .threads
                .filter(|&n| n > 0)
                .unwrap_or_else(num_cpus::get),
            format: cli.format,
            output: cli.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Config {
        let args = ["wallsync", "--analytical", "a.json", "--architectural", "b.json"]
            .iter()
            .chain(extra);
        Config::from_cli(Cli::try_parse_from(args).unwrap()).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.matching, MatchConfig::new(0.01));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.worker_threads >= 1);
        assert!(config.output.is_none());
    }

    #[test]
    fn buffer_size_converts_to_metres() {
        let config = parse(&["--buffer-size", "25", "--buffer-unit", "mm"]);
        assert!((config.matching.buffer_distance - 0.025).abs() < 1e-12);
        assert!((config.matching.prefilter_margin() - 0.025).abs() < 1e-12);
    }

    #[test]
    fn explicit_tunables() {
        let config = parse(&[
            "--grid-resolution",
            "3",
            "--prefilter-margin",
            "0.5",
            "--threads",
            "2",
            "--format",
            "json",
        ]);
        assert_eq!(config.matching.grid_resolution, 3);
        assert_eq!(config.matching.prefilter_margin, Some(0.5));
        assert_eq!(config.worker_threads, 2);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn prefilter_margin_follows_buffer_unit() {
        let config = parse(&["--buffer-unit", "cm", "--prefilter-margin", "50"]);
        assert!((config.matching.prefilter_margin() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from([
            "wallsync", "--analytical", "a", "--architectural", "b", "--buffer-unit", "ft",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "wallsync", "--analytical", "a", "--architectural", "b", "--buffer-size=-1",
        ])
        .unwrap();
        assert!(Config::from_cli(cli).is_err());
    }
}
