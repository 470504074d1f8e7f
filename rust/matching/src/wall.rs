// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Architectural walls and the frozen set of buffered walls a run queries.
//!
//! Buffering happens once, up front, in [`WallSet::build`]. After that the
//! set is read-only and shared across the parallel per-surface workers
//! without locking.

use rayon::prelude::*;
use serde::{Serialize, Serializer};
use wallsync_geometry::{create_buffered_mesh, Aabb, BufferedMesh, Mesh};

/// An architectural wall solid with outward per-vertex normals.
#[derive(Debug, Clone)]
pub struct RevitWall {
    id: String,
    mesh: Mesh,
    bounds: Aabb,
}

impl RevitWall {
    pub fn new(id: impl Into<String>, mesh: Mesh) -> Self {
        let bounds = mesh.bounds();
        Self {
            id: id.into(),
            mesh,
            bounds,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

/// A wall whose buffered mesh has been built.
#[derive(Debug, Clone)]
pub struct PreparedWall {
    id: String,
    buffered: BufferedMesh,
}

impl PreparedWall {
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn buffered(&self) -> &BufferedMesh {
        &self.buffered
    }

    /// Bounds of the buffered mesh
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        self.buffered.bounds()
    }
}

/// A wall excluded from the run, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallDiagnostic {
    pub wall_id: String,
    #[serde(rename = "reason", serialize_with = "serialize_display")]
    pub error: wallsync_geometry::Error,
}

fn serialize_display<S: Serializer>(
    error: &wallsync_geometry::Error,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Buffered walls in input order, plus the walls that failed to buffer.
#[derive(Debug, Clone)]
pub struct WallSet {
    walls: Vec<PreparedWall>,
    diagnostics: Vec<WallDiagnostic>,
    buffer_distance: f64,
}

impl WallSet {
    /// Buffer every wall in parallel. A wall whose mesh is degenerate (open,
    /// zero normal, malformed) is left out and reported instead of failing
    /// the whole set.
    pub fn build(walls: &[RevitWall], buffer_distance: f64) -> Self {
        let results: Vec<_> = walls
            .par_iter()
            .map(|wall| {
                create_buffered_mesh(wall.mesh(), buffer_distance)
                    .map(|buffered| PreparedWall {
                        id: wall.id.clone(),
                        buffered,
                    })
                    .map_err(|error| WallDiagnostic {
                        wall_id: wall.id.clone(),
                        error,
                    })
            })
            .collect();

        let mut prepared = Vec::with_capacity(results.len());
        let mut diagnostics = Vec::new();
        for result in results {
            match result {
                Ok(wall) => prepared.push(wall),
                Err(diagnostic) => {
                    tracing::warn!(
                        wall_id = %diagnostic.wall_id,
                        reason = %diagnostic.error,
                        "Excluding wall with degenerate geometry"
                    );
                    diagnostics.push(diagnostic);
                }
            }
        }

        tracing::debug!(
            buffered = prepared.len(),
            excluded = diagnostics.len(),
            buffer_distance,
            "Wall buffering complete"
        );

        Self {
            walls: prepared,
            diagnostics,
            buffer_distance,
        }
    }

    #[inline]
    pub fn walls(&self) -> &[PreparedWall] {
        &self.walls
    }

    #[inline]
    pub fn diagnostics(&self) -> &[WallDiagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn buffer_distance(&self) -> f64 {
        self.buffer_distance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
