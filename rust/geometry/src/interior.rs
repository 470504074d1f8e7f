// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interior sample points for analytical surfaces.
//!
//! Corner vertices alone cannot see an opening in the middle of a wall, so
//! matching also probes a regular grid spanning the surface's bounding box.
//! An axis with zero extent collapses to repeated equal samples; for
//! axis-aligned surfaces that leaves a planar grid, for skewed surfaces some
//! samples sit slightly off the plane.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::surface::AnalyticalSurface;

/// Regular sampling grid with `resolution` samples per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorGrid {
    resolution: usize,
}

impl InteriorGrid {
    /// Create a grid; `resolution` must be at least 1
    pub fn new(resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::InvalidGridResolution(resolution));
        }
        Ok(Self { resolution })
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of points produced per surface (`resolution³`)
    #[inline]
    pub fn point_count(&self) -> usize {
        self.resolution.pow(3)
    }

    /// Cartesian product of per-axis samples over the surface bounds,
    /// x-major then y then z.
    pub fn points(&self, surface: &AnalyticalSurface) -> Vec<Point3<f64>> {
        let b = surface.bounds();
        let xs = axis_samples(b.min.x, b.max.x, self.resolution);
        let ys = axis_samples(b.min.y, b.max.y, self.resolution);
        let zs = axis_samples(b.min.z, b.max.z, self.resolution);

        let mut points = Vec::with_capacity(self.point_count());
        for &x in &xs {
            for &y in &ys {
                for &z in &zs {
                    points.push(Point3::new(x, y, z));
                }
            }
        }
        points
    }
}

/// Sample `surface` with `resolution` points per axis
pub fn generate_interior_points(
    surface: &AnalyticalSurface,
    resolution: usize,
) -> Result<Vec<Point3<f64>>> {
    Ok(InteriorGrid::new(resolution)?.points(surface))
}

/// `n` evenly spaced values over `[min, max]` inclusive; a single sample
/// takes the midpoint.
fn axis_samples(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.5 * (min + max)];
    }
    let step = (max - min) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
        .collect()
}
