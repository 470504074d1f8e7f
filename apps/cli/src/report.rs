// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run report rendering (plain text or JSON).

use std::fmt;

use serde::Serialize;
use wallsync_ingest::Rejected;
use wallsync_matching::{MatchConfig, MatchReport, MatchSummary, SurfaceOutcome, WallDiagnostic};

/// Everything the run produced, ready for output.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub coordinated: bool,
    pub config: MatchConfig,
    pub summary: MatchSummary,
    pub outcomes: &'a [SurfaceOutcome],
    pub excluded_walls: &'a [WallDiagnostic],
    pub rejected_surfaces: &'a [Rejected],
    pub rejected_walls: &'a [Rejected],
}

impl<'a> RunReport<'a> {
    pub fn new(
        report: &'a MatchReport,
        config: &MatchConfig,
        rejected_surfaces: &'a [Rejected],
        rejected_walls: &'a [Rejected],
    ) -> Self {
        Self {
            coordinated: report.is_fully_coordinated(),
            config: *config,
            summary: report.summary(),
            outcomes: &report.outcomes,
            excluded_walls: &report.wall_diagnostics,
            rejected_surfaces,
            rejected_walls,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        let n = s.total_surfaces;

        if self.coordinated {
            writeln!(f, "Analytical model fully coordinated with architectural model.")?;
        } else {
            writeln!(f, "Analytical model not fully coordinated with architectural model:")?;
        }
        writeln!(f, "\tNone Count: {} / {n}.", s.no_match.count)?;
        writeln!(f, "\tEasy Matches: {} / {n}.", s.single_wall.count)?;
        writeln!(f, "\tTricky Matches: {} / {n}.", s.multi_wall.count)?;
        writeln!(f, "\tHazardous Matches: {} / {n}.", s.ambiguous_multi_wall.count)?;

        if !s.no_match.surface_ids.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Uncoordinated analytical surfaces (outside every buffered wall or not covered by a single wall):"
            )?;
            for id in &s.no_match.surface_ids {
                writeln!(f, "\t{id}")?;
            }
        }

        if !s.ambiguous_multi_wall.surface_ids.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warning: surfaces contained by more than three walls:")?;
            for outcome in self
                .outcomes
                .iter()
                .filter(|o| o.result.classification.is_warning())
            {
                writeln!(f, "\t{}: {}", outcome.surface_id, outcome.result.wall_ids().join(", "))?;
            }
        }

        if !self.excluded_walls.is_empty() {
            writeln!(f)?;
            writeln!(f, "Walls excluded from matching:")?;
            for d in self.excluded_walls {
                writeln!(f, "\t{}: {}", d.wall_id, d.error)?;
            }
        }

        for (label, rejected) in [
            ("Rejected analytical elements", self.rejected_surfaces),
            ("Rejected wall elements", self.rejected_walls),
        ] {
            if rejected.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{label}:")?;
            for r in rejected {
                writeln!(f, "\t{}: {}", r.id, r.reason)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallsync_ingest::ElementError;
    use wallsync_matching::MatchResult;

    fn outcome(id: &str, walls: &[&str]) -> SurfaceOutcome {
        SurfaceOutcome {
            surface_id: id.to_string(),
            result: MatchResult::from_matched(walls.iter().map(|w| w.to_string()).collect()),
        }
    }

    fn match_report() -> MatchReport {
        MatchReport {
            buffer_distance: 0.01,
            outcomes: vec![
                outcome("s1", &["w1"]),
                outcome("s2", &[]),
                outcome("s3", &["w1", "w2"]),
                outcome("s4", &["w1", "w2", "w3", "w4"]),
            ],
            wall_diagnostics: vec![WallDiagnostic {
                wall_id: "w9".into(),
                error: wallsync_geometry::Error::OpenMesh { boundary_edges: 4 },
            }],
        }
    }

    #[test]
    fn text_lists_counts_and_failures() {
        let report = match_report();
        let rejected = [Rejected {
            id: "e7".into(),
            reason: ElementError::VertexArrayLength(5),
        }];
        let text = RunReport::new(&report, &MatchConfig::new(0.01), &rejected, &[]).to_string();

        assert!(text.starts_with("Analytical model not fully coordinated"));
        assert!(text.contains("\tNone Count: 1 / 4."));
        assert!(text.contains("\tEasy Matches: 1 / 4."));
        assert!(text.contains("\tTricky Matches: 1 / 4."));
        assert!(text.contains("\tHazardous Matches: 1 / 4."));
        assert!(text.contains("\ts2\n"));
        assert!(text.contains("\ts4: w1, w2, w3, w4"));
        assert!(text.contains("\tw9: "));
        assert!(text.contains("\te7: Vertex array length 5"));
        assert!(!text.contains("Rejected wall elements"));
    }

    #[test]
    fn json_carries_summary_and_outcomes() {
        let mut report = match_report();
        report.outcomes.retain(|o| o.surface_id != "s2");
        let config = MatchConfig::new(0.02).with_grid_resolution(3);
        let json: serde_json::Value =
            serde_json::from_str(&RunReport::new(&report, &config, &[], &[]).to_json().unwrap()).unwrap();

        assert_eq!(json["coordinated"], true);
        assert_eq!(json["config"]["buffer_distance"], 0.02);
        assert_eq!(json["config"]["grid_resolution"], 3);
        assert!(json["config"]["prefilter_margin"].is_null());
        assert_eq!(json["summary"]["total_surfaces"], 3);
        assert_eq!(json["summary"]["multi_wall"]["surface_ids"][0], "s3");
        assert_eq!(json["outcomes"].as_array().unwrap().len(), 3);
        assert_eq!(json["excluded_walls"][0]["wall_id"], "w9");
    }
}
