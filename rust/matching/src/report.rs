// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run results: one outcome per surface, excluded walls and summary counts.

use serde::Serialize;

use crate::classify::{Classification, MatchResult};
use crate::wall::WallDiagnostic;

/// Match outcome of one surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceOutcome {
    pub surface_id: String,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Everything a matching run produced. Every input surface has exactly one
/// outcome, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub buffer_distance: f64,
    pub outcomes: Vec<SurfaceOutcome>,
    pub wall_diagnostics: Vec<WallDiagnostic>,
}

/// Surfaces in one classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub count: usize,
    pub surface_ids: Vec<String>,
}

impl ClassCount {
    fn push(&mut self, id: &str) {
        self.count += 1;
        self.surface_ids.push(id.to_string());
    }
}

/// Per-classification tallies of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub total_surfaces: usize,
    pub no_match: ClassCount,
    pub single_wall: ClassCount,
    pub multi_wall: ClassCount,
    pub ambiguous_multi_wall: ClassCount,
    pub excluded_walls: usize,
}

impl MatchReport {
    /// Outcome for a surface id (first one if ids repeat)
    pub fn get(&self, surface_id: &str) -> Option<&MatchResult> {
        self.outcomes
            .iter()
            .find(|o| o.surface_id == surface_id)
            .map(|o| &o.result)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SurfaceOutcome> {
        self.outcomes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Surfaces with the given classification, in input order
    pub fn surfaces_with(&self, classification: Classification) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(move |o| o.result.classification == classification)
            .map(|o| o.surface_id.as_str())
    }

    /// True when no surface is left without a wall. Ambiguous matches are
    /// warnings and do not count against coordination.
    pub fn is_fully_coordinated(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| !o.result.classification.is_failure())
    }

    pub fn summary(&self) -> MatchSummary {
        let mut summary = MatchSummary {
            total_surfaces: self.outcomes.len(),
            excluded_walls: self.wall_diagnostics.len(),
            ..MatchSummary::default()
        };

        for outcome in &self.outcomes {
            let bucket = match outcome.result.classification {
                Classification::NoMatch => &mut summary.no_match,
                Classification::SingleWall => &mut summary.single_wall,
                Classification::MultiWall => &mut summary.multi_wall,
                Classification::AmbiguousMultiWall => &mut summary.ambiguous_multi_wall,
            };
            bucket.push(&outcome.surface_id);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: &str, walls: &[&str]) -> SurfaceOutcome {
        SurfaceOutcome {
            surface_id: id.to_string(),
            result: MatchResult::from_matched(walls.iter().map(|w| w.to_string()).collect()),
        }
    }

    fn report() -> MatchReport {
        MatchReport {
            buffer_distance: 0.01,
            outcomes: vec![
                outcome("s1", &["w1"]),
                outcome("s2", &[]),
                outcome("s3", &["w1", "w2"]),
                outcome("s4", &["w1", "w2", "w3", "w4"]),
                outcome("s5", &["w5"]),
            ],
            wall_diagnostics: Vec::new(),
        }
    }

    #[test]
    fn summary_counts_each_class() {
        let s = report().summary();
        assert_eq!(s.total_surfaces, 5);
        assert_eq!(s.single_wall.count, 2);
        assert_eq!(s.single_wall.surface_ids, ["s1", "s5"]);
        assert_eq!(s.no_match.surface_ids, ["s2"]);
        assert_eq!(s.multi_wall.count, 1);
        assert_eq!(s.ambiguous_multi_wall.surface_ids, ["s4"]);
        assert_eq!(s.excluded_walls, 0);
    }

    #[test]
    fn no_match_breaks_coordination() {
        let mut r = report();
        assert!(!r.is_fully_coordinated());
        r.outcomes.retain(|o| o.surface_id != "s2");
        assert!(r.is_fully_coordinated());
    }

    #[test]
    fn lookup_by_surface_id() {
        let r = report();
        assert_eq!(r.get("s3").map(|m| m.matched_wall_count), Some(2));
        assert!(r.get("missing").is_none());
        assert_eq!(
            r.surfaces_with(Classification::AmbiguousMultiWall).collect::<Vec<_>>(),
            ["s4"]
        );
    }

    #[test]
    fn outcome_serializes_flat() {
        let json = serde_json::to_value(outcome("s1", &["w1"])).unwrap();
        assert_eq!(json["surface_id"], "s1");
        assert_eq!(json["classification"], "single_wall");
    }
}
