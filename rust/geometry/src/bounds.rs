// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes

use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box (min corner, max corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a box from its corners
    #[inline]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all points. An empty iterator yields a
    /// degenerate box at the origin.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        let mut any = false;

        for p in points {
            any = true;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        if !any {
            return Self::new(Point3::origin(), Point3::origin());
        }
        Self { min, max }
    }

    /// Copy of this box grown by `margin` on every side
    #[inline]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// 3D overlap test (touching boxes overlap)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    /// Overlap along the vertical (z) axis only
    #[inline]
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        !(self.max.z < other.min.z || self.min.z > other.max.z)
    }

    /// Point inside or on the box, with `tolerance` slack on every side
    #[inline]
    pub fn contains_point(&self, p: &Point3<f64>, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
            && p.z >= self.min.z - tolerance
            && p.z <= self.max.z + tolerance
    }
}
