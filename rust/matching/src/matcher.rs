// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface-to-wall matching.
//!
//! A run has two phases. The build phase buffers every wall once
//! ([`WallSet::build`]). The query phase matches surfaces in parallel against
//! the frozen set:
//!
//! 1. vertical-band proximity filter,
//! 2. 3D bounding-box pre-check with both boxes grown by the margin,
//! 3. full containment of the four vertices, then of the interior grid,
//!    against each remaining wall's buffered mesh.
//!
//! Every wall that passes step 3 is reported; there is no tie-breaking.

use std::time::Instant;

use rayon::prelude::*;
use wallsync_geometry::{AnalyticalSurface, InteriorGrid, Point3, PointContainment};

use crate::classify::{Classification, MatchResult};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::filter::{bounds_prefilter, spatial_proximity_filter};
use crate::report::{MatchReport, SurfaceOutcome};
use crate::wall::{PreparedWall, RevitWall, WallSet};

/// Matches analytical surfaces to buffered architectural walls.
#[derive(Debug, Clone)]
pub struct SurfaceWallMatcher {
    config: MatchConfig,
    grid: InteriorGrid,
}

impl SurfaceWallMatcher {
    /// Validate `config` and create a matcher
    pub fn new(config: MatchConfig) -> Result<Self> {
        let grid = config.interior_grid()?;
        Ok(Self { config, grid })
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Build phase: buffer all walls with the configured distance
    pub fn prepare_walls(&self, walls: &[RevitWall]) -> WallSet {
        WallSet::build(walls, self.config.buffer_distance)
    }

    /// Whether `wall`'s buffered mesh contains every vertex and every
    /// interior grid point of `surface`.
    pub fn check_surface_wall_match(&self, surface: &AnalyticalSurface, wall: &PreparedWall) -> bool {
        let interior = self.grid.points(surface);
        surface_contained(surface, &interior, wall)
    }

    /// Match one surface against the frozen wall set
    pub fn match_surface(&self, surface: &AnalyticalSurface, walls: &WallSet) -> MatchResult {
        let candidates = spatial_proximity_filter(surface, walls.walls());
        let vertical = candidates.len();
        let candidates = bounds_prefilter(surface, candidates, self.config.prefilter_margin());

        let interior = self.grid.points(surface);
        let matched: Vec<String> = candidates
            .iter()
            .filter(|wall| surface_contained(surface, &interior, wall))
            .map(|wall| wall.id().to_string())
            .collect();

        let result = MatchResult::from_matched(matched);

        tracing::debug!(
            surface_id = surface.id(),
            vertical_candidates = vertical,
            box_candidates = candidates.len(),
            matched = result.matched_wall_count,
            classification = result.classification.label(),
            "Surface matched"
        );
        if result.classification == Classification::AmbiguousMultiWall {
            tracing::warn!(
                surface_id = surface.id(),
                walls = ?result.wall_ids(),
                "Surface contained by more than three walls; check buffer distance and model overlaps"
            );
        }

        result
    }

    /// Query phase over all surfaces against an already built wall set
    pub fn match_prepared(&self, surfaces: &[AnalyticalSurface], walls: &WallSet) -> MatchReport {
        let outcomes: Vec<SurfaceOutcome> = surfaces
            .par_iter()
            .map(|surface| SurfaceOutcome {
                surface_id: surface.id().to_string(),
                result: self.match_surface(surface, walls),
            })
            .collect();

        MatchReport {
            buffer_distance: walls.buffer_distance(),
            outcomes,
            wall_diagnostics: walls.diagnostics().to_vec(),
        }
    }

    /// Build then query: the full matching run
    pub fn find_matching_partners(
        &self,
        surfaces: &[AnalyticalSurface],
        walls: &[RevitWall],
    ) -> MatchReport {
        let start = Instant::now();
        tracing::info!(
            surfaces = surfaces.len(),
            walls = walls.len(),
            buffer_distance = self.config.buffer_distance,
            grid_resolution = self.grid.resolution(),
            "Starting surface-wall matching"
        );

        let wall_set = self.prepare_walls(walls);
        let build_time = start.elapsed();

        let report = self.match_prepared(surfaces, &wall_set);
        let summary = report.summary();

        tracing::info!(
            build_time_ms = build_time.as_millis() as u64,
            total_time_ms = start.elapsed().as_millis() as u64,
            no_match = summary.no_match.count,
            single_wall = summary.single_wall.count,
            multi_wall = summary.multi_wall.count,
            ambiguous = summary.ambiguous_multi_wall.count,
            excluded_walls = summary.excluded_walls,
            "Matching complete"
        );

        report
    }
}

/// Match `surfaces` to `walls` with the default grid and margin.
pub fn match_surfaces(
    surfaces: &[AnalyticalSurface],
    walls: &[RevitWall],
    buffer_distance: f64,
) -> Result<MatchReport> {
    let matcher = SurfaceWallMatcher::new(MatchConfig::new(buffer_distance))?;
    Ok(matcher.find_matching_partners(surfaces, walls))
}

/// Vertices first: they are few and reject most non-matches.
fn surface_contained(
    surface: &AnalyticalSurface,
    interior: &[Point3<f64>],
    wall: &PreparedWall,
) -> bool {
    let solid = wall.buffered();
    solid.contains_all(surface.points()) && solid.contains_all(interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallsync_geometry::shapes::box_solid;

    fn surface(id: &str, x0: f64, x1: f64) -> AnalyticalSurface {
        AnalyticalSurface::from_corners(
            id,
            [
                Point3::new(x0, 0.1, 0.0),
                Point3::new(x1, 0.1, 0.0),
                Point3::new(x1, 0.1, 3.0),
                Point3::new(x0, 0.1, 3.0),
            ],
        )
    }

    fn wall(id: &str, x0: f64, x1: f64) -> RevitWall {
        RevitWall::new(id, box_solid(Point3::new(x0, 0.0, 0.0), Point3::new(x1, 0.2, 3.0)))
    }

    #[test]
    fn check_pair_directly() {
        let matcher = SurfaceWallMatcher::new(MatchConfig::new(0.05)).unwrap();
        let set = matcher.prepare_walls(&[wall("w", 0.0, 4.0)]);
        assert!(matcher.check_surface_wall_match(&surface("in", 0.5, 3.5), &set.walls()[0]));
        assert!(!matcher.check_surface_wall_match(&surface("long", 0.5, 4.5), &set.walls()[0]));
    }

    #[test]
    fn outcomes_follow_surface_order() {
        let walls = [wall("w1", 0.0, 4.0), wall("w2", 10.0, 14.0)];
        let surfaces = [
            surface("b", 10.5, 13.5),
            surface("a", 0.5, 3.5),
            surface("c", 20.0, 22.0),
        ];
        let report = match_surfaces(&surfaces, &walls, 0.05).unwrap();
        let ids: Vec<&str> = report.iter().map(|o| o.surface_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(report.get("b").unwrap().wall_ids(), ["w2".to_string()]);
        assert_eq!(report.get("a").unwrap().wall_ids(), ["w1".to_string()]);
        assert_eq!(report.get("c").unwrap().classification, Classification::NoMatch);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        assert!(match_surfaces(&[], &[], f64::INFINITY).is_err());
    }

    #[test]
    fn empty_inputs_give_empty_report() {
        let report = match_surfaces(&[], &[], 0.01).unwrap();
        assert!(report.is_empty());
        assert!(report.is_fully_coordinated());
    }
}
