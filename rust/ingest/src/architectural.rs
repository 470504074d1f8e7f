// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall solid extraction from an architectural model export.
//!
//! Exported display meshes are polygon soups: each face usually carries its
//! own copies of the corner vertices. Buffering needs a closed mesh with
//! shared vertices, so every wall is welded before its normals are derived.
//! Closedness itself is checked later, when the wall set is built.

use wallsync_geometry::{compute_vertex_normals, weld_vertices, Mesh, Point3};
use wallsync_matching::RevitWall;

use crate::error::{ElementError, Error, Result};
use crate::extraction::Extraction;
use crate::model::{ArchitecturalDocument, ArchitecturalElement, DisplayMesh};
use crate::units::LengthUnit;

/// Name of the collection holding wall elements
pub const WALLS_COLLECTION: &str = "Walls";

/// Default vertex weld distance in metres
pub const DEFAULT_WELD_TOLERANCE: f64 = 1e-6;

/// Extract wall solids from an architectural model.
///
/// Only the `Walls` collection is read. Each wall's display meshes are
/// merged, converted to metres, welded within `weld_tolerance` and given
/// vertex normals. Fails with [`Error::NoWalls`] when no wall survives.
pub fn extract_walls(
    doc: &ArchitecturalDocument,
    weld_tolerance: f64,
) -> Result<Extraction<RevitWall>> {
    let unit = LengthUnit::from_document(doc.units.as_deref())?;
    let mut out = Extraction::default();

    for collection in &doc.collections {
        if collection.name != WALLS_COLLECTION {
            out.ignored += collection.elements.len();
            continue;
        }
        for element in &collection.elements {
            match wall_mesh(element, unit, weld_tolerance) {
                Ok(mesh) => out.items.push(RevitWall::new(element.id.clone(), mesh)),
                Err(reason) => out.reject(&element.id, reason),
            }
        }
    }

    tracing::info!(
        walls = out.items.len(),
        rejected = out.rejected.len(),
        ignored = out.ignored,
        units = %unit,
        "Extracted architectural walls"
    );

    if out.items.is_empty() {
        return Err(Error::NoWalls);
    }
    Ok(out)
}

/// Merged, welded triangle mesh of one wall, in metres
pub fn wall_mesh(
    element: &ArchitecturalElement,
    unit: LengthUnit,
    weld_tolerance: f64,
) -> std::result::Result<Mesh, ElementError> {
    if element.display_value.is_empty() {
        return Err(ElementError::MissingDisplayValue);
    }

    let mut merged = Mesh::new();
    for display in &element.display_value {
        merged.merge(&display_mesh(display, unit)?);
    }

    let mut mesh = weld_vertices(&merged, weld_tolerance);
    if mesh.is_empty() {
        return Err(ElementError::EmptyDisplayMesh);
    }
    compute_vertex_normals(&mut mesh);
    Ok(mesh)
}

fn display_mesh(display: &DisplayMesh, unit: LengthUnit) -> std::result::Result<Mesh, ElementError> {
    if display.vertices.is_empty() || display.faces.is_empty() {
        return Err(ElementError::EmptyDisplayMesh);
    }
    if display.vertices.len() % 3 != 0 {
        return Err(ElementError::VertexArrayLength(display.vertices.len()));
    }

    let vertex_count = display.vertices.len() / 3;
    let triangles = triangulate_faces(&display.faces, vertex_count)?;

    let mut mesh = Mesh::with_capacity(vertex_count, triangles.len() * 3);
    for c in display.vertices.chunks_exact(3) {
        mesh.add_position(Point3::new(
            unit.to_metres(c[0]),
            unit.to_metres(c[1]),
            unit.to_metres(c[2]),
        ));
    }
    for [a, b, c] in triangles {
        mesh.add_triangle(a, b, c);
    }
    Ok(mesh)
}

/// Decode a `[n, i0, .., i(n-1), ..]` face list into triangles, fanning
/// polygons from their first vertex.
pub fn triangulate_faces(
    faces: &[u32],
    vertex_count: usize,
) -> std::result::Result<Vec<[u32; 3]>, ElementError> {
    let mut triangles = Vec::with_capacity(faces.len() / 4 * 2);
    let mut offset = 0;

    while offset < faces.len() {
        let count = match faces[offset] {
            0 => 3,
            1 => 4,
            n => n as usize,
        };
        if count < 3 {
            return Err(ElementError::DegenerateFace { offset, count });
        }

        let start = offset + 1;
        let polygon = faces
            .get(start..start + count)
            .ok_or(ElementError::TruncatedFaces { offset })?;
        if let Some(&index) = polygon.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(ElementError::FaceIndexOutOfRange {
                index,
                vertex_count,
            });
        }

        for k in 1..count - 1 {
            triangles.push([polygon[0], polygon[k], polygon[k + 1]]);
        }
        offset = start + count;
    }

    Ok(triangles)
}
