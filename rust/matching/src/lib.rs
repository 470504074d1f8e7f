// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # wallsync Matching
//!
//! Decides, for every analytical surface of a structural model, which
//! architectural walls fully contain it, and classifies the result as no
//! match, single wall, multi wall (2–3 adjoining walls) or ambiguous
//! (more than three walls).
//!
//! The engine is pure and in-memory: it receives already-scaled geometry and
//! returns a [`MatchReport`]. Walls with degenerate meshes are excluded and
//! reported; they never abort a run.

pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod report;
pub mod wall;

pub use classify::{Classification, MatchResult, MatchedWalls, MAX_ADJOINING_WALLS};
pub use config::{MatchConfig, DEFAULT_BUFFER_DISTANCE, DEFAULT_GRID_RESOLUTION};
pub use error::{Error, Result};
pub use filter::{bounds_prefilter, spatial_proximity_filter, Candidates};
pub use matcher::{match_surfaces, SurfaceWallMatcher};
pub use report::{ClassCount, MatchReport, MatchSummary, SurfaceOutcome};
pub use wall::{PreparedWall, RevitWall, WallDiagnostic, WallSet};
