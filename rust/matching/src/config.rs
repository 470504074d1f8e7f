// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Matching run configuration.

use serde::Serialize;
use wallsync_geometry::InteriorGrid;

use crate::error::{Error, Result};

/// Default buffer distance in metres
pub const DEFAULT_BUFFER_DISTANCE: f64 = 0.01;

/// Default interior samples per axis (125 points per surface)
pub const DEFAULT_GRID_RESOLUTION: usize = 5;

/// Tunables for one matching run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchConfig {
    /// Distance wall vertices are pushed out along their normals, in the
    /// length unit of the geometry.
    pub buffer_distance: f64,
    /// Interior samples per axis; higher values find smaller openings.
    pub grid_resolution: usize,
    /// Margin applied to both boxes in the 3D bounding-box pre-check.
    /// `None` uses `buffer_distance`.
    pub prefilter_margin: Option<f64>,
}

impl MatchConfig {
    /// Configuration with the given buffer distance and default grid
    pub fn new(buffer_distance: f64) -> Self {
        Self {
            buffer_distance,
            ..Self::default()
        }
    }

    pub fn with_grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_resolution = resolution;
        self
    }

    pub fn with_prefilter_margin(mut self, margin: f64) -> Self {
        self.prefilter_margin = Some(margin);
        self
    }

    /// Effective bounding-box pre-check margin
    #[inline]
    pub fn prefilter_margin(&self) -> f64 {
        self.prefilter_margin.unwrap_or(self.buffer_distance)
    }

    /// Check ranges and build the sampling grid
    pub fn interior_grid(&self) -> Result<InteriorGrid> {
        if !self.buffer_distance.is_finite() || self.buffer_distance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "buffer distance must be finite and >= 0, got {}",
                self.buffer_distance
            )));
        }
        let margin = self.prefilter_margin();
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "pre-filter margin must be finite and >= 0, got {margin}"
            )));
        }
        Ok(InteriorGrid::new(self.grid_resolution)?)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            buffer_distance: DEFAULT_BUFFER_DISTANCE,
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            prefilter_margin: None,
        }
    }
}
