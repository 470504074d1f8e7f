// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! wallsync Ingest
//!
//! Reads JSON exports of a structural analysis model and an architectural
//! model and turns them into [`AnalyticalSurface`]s and [`RevitWall`]s in
//! metres. Problems with single elements are collected as rejections; only
//! unreadable documents, bad units or a model without walls fail outright.
//!
//! ```rust,no_run
//! use wallsync_ingest::{load_analytical_surfaces, load_architectural_walls, DEFAULT_WELD_TOLERANCE};
//!
//! let surfaces = load_analytical_surfaces("structure.json")?;
//! let walls = load_architectural_walls("architecture.json", DEFAULT_WELD_TOLERANCE)?;
//! println!("{} surfaces, {} walls", surfaces.len(), walls.len());
//! # Ok::<(), wallsync_ingest::Error>(())
//! ```

pub mod analytical;
pub mod architectural;
pub mod error;
pub mod extraction;
pub mod model;
pub mod units;

use std::path::Path;

use serde::de::DeserializeOwned;
use wallsync_geometry::AnalyticalSurface;
use wallsync_matching::RevitWall;

pub use analytical::{extract_surfaces, FLOOR_TOLERANCE};
pub use architectural::{
    extract_walls, triangulate_faces, wall_mesh, DEFAULT_WELD_TOLERANCE, WALLS_COLLECTION,
};
pub use error::{ElementError, Error, Result};
pub use extraction::{Extraction, Rejected};
pub use model::{AnalyticalDocument, ArchitecturalDocument};
pub use units::LengthUnit;

/// Parse an analytical model export and extract its wall surfaces
pub fn parse_analytical_surfaces(json: &str) -> Result<Extraction<AnalyticalSurface>> {
    extract_surfaces(&serde_json::from_str(json)?)
}

/// Parse an architectural model export and extract its walls
pub fn parse_architectural_walls(json: &str, weld_tolerance: f64) -> Result<Extraction<RevitWall>> {
    extract_walls(&serde_json::from_str(json)?, weld_tolerance)
}

pub fn load_analytical_surfaces(path: impl AsRef<Path>) -> Result<Extraction<AnalyticalSurface>> {
    extract_surfaces(&read_document(path.as_ref())?)
}

pub fn load_architectural_walls(
    path: impl AsRef<Path>,
    weld_tolerance: f64,
) -> Result<Extraction<RevitWall>> {
    extract_walls(&read_document(path.as_ref())?, weld_tolerance)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "Reading model document");
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
