// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar analytical surfaces

use nalgebra::Point3;

use crate::bounds::Aabb;
use crate::error::{Error, Result};

/// A structural-analysis wall idealized as a planar quadrilateral.
///
/// Immutable after construction; the bounding box is derived once.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticalSurface {
    id: String,
    points: [Point3<f64>; 4],
    bounds: Aabb,
}

impl AnalyticalSurface {
    /// Build a surface from exactly four ordered vertices
    pub fn new(id: impl Into<String>, points: Vec<Point3<f64>>) -> Result<Self> {
        let points: [Point3<f64>; 4] = points
            .try_into()
            .map_err(|rejected: Vec<Point3<f64>>| Error::InvalidSurface(rejected.len()))?;
        Ok(Self::from_corners(id, points))
    }

    /// Build a surface from a fixed corner array
    pub fn from_corners(id: impl Into<String>, points: [Point3<f64>; 4]) -> Self {
        let bounds = Aabb::from_points(&points);
        Self {
            id: id.into(),
            points,
            bounds,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>; 4] {
        &self.points
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}
