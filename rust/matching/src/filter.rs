// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cheap candidate pre-filters run before containment testing.
//!
//! Both filters only narrow: a wall whose buffered mesh contains every
//! surface vertex has buffered bounds enclosing the surface bounds, so it
//! always survives both.

use smallvec::SmallVec;
use wallsync_geometry::AnalyticalSurface;

use crate::wall::PreparedWall;

/// Candidate walls for one surface
pub type Candidates<'a> = SmallVec<[&'a PreparedWall; 8]>;

/// Keep walls whose buffered bounds overlap the surface along the vertical
/// axis.
///
/// Plan (x/y) extents are ignored on purpose: walls may be rotated
/// arbitrarily in plan, only their height band is safe to prune on.
pub fn spatial_proximity_filter<'a, I>(surface: &AnalyticalSurface, walls: I) -> Candidates<'a>
where
    I: IntoIterator<Item = &'a PreparedWall>,
{
    let surface_bounds = surface.bounds();
    walls
        .into_iter()
        .filter(|wall| surface_bounds.overlaps_vertically(wall.bounds()))
        .collect()
}

/// Keep walls whose buffered bounds overlap the surface bounds in 3D once
/// both boxes are grown by `margin`.
pub fn bounds_prefilter<'a, I>(surface: &AnalyticalSurface, walls: I, margin: f64) -> Candidates<'a>
where
    I: IntoIterator<Item = &'a PreparedWall>,
{
    let surface_bounds = surface.bounds().expanded(margin);
    walls
        .into_iter()
        .filter(|wall| surface_bounds.overlaps(&wall.bounds().expanded(margin)))
        .collect()
}
