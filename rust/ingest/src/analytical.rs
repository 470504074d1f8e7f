// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Analytical surface extraction from a structural model export.

use rustc_hash::FxHashSet;
use wallsync_geometry::{AnalyticalSurface, Point3};

use crate::error::{ElementError, Result};
use crate::extraction::Extraction;
use crate::model::{AnalyticalDocument, AnalyticalElement};
use crate::units::LengthUnit;

/// Elements whose vertical extent is below this (in metres) are floors
pub const FLOOR_TOLERANCE: f64 = 1e-5;

/// Distance under which a polygon's last vertex closes onto its first
const CLOSING_TOLERANCE: f64 = 1e-9;

/// Extract the wall surfaces of a structural model.
///
/// Only `Element2D` elements are read. The first element per application
/// id wins, floors are skipped and coordinates are converted to metres.
/// Elements that are not quadrilaterals are rejected individually.
pub fn extract_surfaces(doc: &AnalyticalDocument) -> Result<Extraction<AnalyticalSurface>> {
    let unit = LengthUnit::from_document(doc.units.as_deref())?;
    let mut out = Extraction::default();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for element in &doc.elements {
        if !element.is_element_2d() {
            out.ignored += 1;
            continue;
        }
        if let Some(app_id) = element.application_id.as_deref().filter(|id| !id.is_empty()) {
            if !seen.insert(app_id) {
                tracing::debug!(element_id = %element.id, application_id = app_id, "Skipping duplicate element");
                out.duplicates += 1;
                continue;
            }
        }

        let points = match outline(element, unit) {
            Ok(points) => points,
            Err(reason) => {
                out.reject(&element.id, reason);
                continue;
            }
        };
        if is_floor(&points) {
            out.floors += 1;
            continue;
        }

        match AnalyticalSurface::new(element.id.clone(), points) {
            Ok(surface) => out.items.push(surface),
            Err(e) => out.reject(&element.id, e.into()),
        }
    }

    tracing::info!(
        surfaces = out.items.len(),
        rejected = out.rejected.len(),
        floors = out.floors,
        duplicates = out.duplicates,
        units = %unit,
        "Extracted analytical surfaces"
    );

    Ok(out)
}

/// Outline points in metres, without a repeated closing vertex
fn outline(
    element: &AnalyticalElement,
    unit: LengthUnit,
) -> std::result::Result<Vec<Point3<f64>>, ElementError> {
    let coords = &element.vertices;
    if coords.len() % 3 != 0 {
        return Err(ElementError::VertexArrayLength(coords.len()));
    }

    let mut points: Vec<Point3<f64>> = coords
        .chunks_exact(3)
        .map(|c| {
            Point3::new(
                unit.to_metres(c[0]),
                unit.to_metres(c[1]),
                unit.to_metres(c[2]),
            )
        })
        .collect();

    if points.len() > 1 {
        let (first, last) = (points[0], points[points.len() - 1]);
        if (last - first).norm() <= CLOSING_TOLERANCE {
            points.pop();
        }
    }

    Ok(points)
}

fn is_floor(points: &[Point3<f64>]) -> bool {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.z), hi.max(p.z))
        });
    !points.is_empty() && hi - lo < FLOOR_TOLERANCE
}
