// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashMap;

use crate::bounds::Aabb;
use crate::error::{Error, Result};

/// Triangle mesh with per-vertex normals.
///
/// Positions and normals are stored flat (x, y, z per vertex) and must have
/// the same length once the mesh is handed to buffering.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f64>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f64>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

/// Edge usage counts of a triangle mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Edges used by exactly one triangle
    pub boundary_edges: usize,
    /// Edges used by more than two triangles
    pub non_manifold_edges: usize,
}

impl EdgeReport {
    /// Every edge is shared by exactly two triangles
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
    }

    /// Add a vertex without a normal. Normals must be filled in afterwards
    /// (see [`crate::normals::compute_vertex_normals`]).
    #[inline]
    pub fn add_position(&mut self, position: Point3<f64>) {
        self.positions.extend_from_slice(&[position.x, position.y, position.z]);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Merge another mesh into this one
    #[inline]
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        let vertex_offset = (self.positions.len() / 3) as u32;

        self.positions.reserve(other.positions.len());
        self.normals.reserve(other.normals.len());
        self.indices.reserve(other.indices.len());

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i`
    #[inline]
    pub fn position(&self, i: usize) -> Point3<f64> {
        Point3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Normal of vertex `i`
    #[inline]
    pub fn normal(&self, i: usize) -> Vector3<f64> {
        Vector3::new(
            self.normals[i * 3],
            self.normals[i * 3 + 1],
            self.normals[i * 3 + 2],
        )
    }

    /// Iterate over triangle corner positions
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.position(tri[0] as usize),
                self.position(tri[1] as usize),
                self.position(tri[2] as usize),
            ]
        })
    }

    /// Calculate bounds
    #[inline]
    pub fn bounds(&self) -> Aabb {
        if self.is_empty() {
            return Aabb::new(Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        Aabb::new(min, max)
    }

    /// Check buffer shapes: non-empty, whole triangles, indices in range and
    /// one normal per vertex.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() || self.indices.is_empty() {
            return Err(Error::EmptyMesh(format!(
                "{} vertices, {} indices",
                self.vertex_count(),
                self.indices.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::MalformedIndices(self.indices.len()));
        }
        if self.normals.len() != self.positions.len() {
            return Err(Error::NormalCountMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }

        let vertex_count = self.vertex_count();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Count how many triangles use each undirected edge
    pub fn edge_report(&self) -> EdgeReport {
        let mut uses: FxHashMap<(u32, u32), u32> = FxHashMap::default();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                *uses.entry(key).or_insert(0) += 1;
            }
        }

        let mut report = EdgeReport::default();
        for &count in uses.values() {
            match count {
                1 => report.boundary_edges += 1,
                2 => {}
                _ => report.non_manifold_edges += 1,
            }
        }
        report
    }

    /// Fail unless the mesh is a closed, edge-manifold surface
    pub fn ensure_closed(&self) -> Result<()> {
        let report = self.edge_report();
        if report.boundary_edges > 0 {
            return Err(Error::OpenMesh {
                boundary_edges: report.boundary_edges,
            });
        }
        if report.non_manifold_edges > 0 {
            return Err(Error::NonManifoldMesh {
                edges: report.non_manifold_edges,
            });
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::new(-1.0, -1.0, -1.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::y());
        mesh.add_vertex(Point3::new(0.0, 0.0, 1.0), Vector3::z());
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_add_vertex() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.normals, vec![0.0, 0.0, 1.0]);
        assert_eq!(mesh.position(0), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = tetrahedron();
        let b = tetrahedron();
        a.merge(&b);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.triangle_count(), 8);
        assert_eq!(&a.indices[12..15], &[4, 6, 5]);
    }

    #[test]
    fn test_bounds() {
        let b = tetrahedron().bounds();
        assert_eq!(b.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_validate_ok() {
        assert!(tetrahedron().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_normals() {
        let mut mesh = tetrahedron();
        mesh.normals.truncate(6);
        assert_eq!(
            mesh.validate(),
            Err(Error::NormalCountMismatch {
                positions: 12,
                normals: 6
            })
        );
    }

    #[test]
    fn test_validate_index_out_of_range() {
        let mut mesh = tetrahedron();
        mesh.add_triangle(0, 1, 9);
        assert_eq!(
            mesh.validate(),
            Err(Error::IndexOutOfRange {
                index: 9,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn test_validate_partial_triangle() {
        let mut mesh = tetrahedron();
        mesh.indices.push(0);
        assert_eq!(mesh.validate(), Err(Error::MalformedIndices(13)));
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(Mesh::new().validate(), Err(Error::EmptyMesh(_))));
    }

    #[test]
    fn test_closed_tetrahedron() {
        let mesh = tetrahedron();
        assert!(mesh.edge_report().is_closed());
        assert!(mesh.ensure_closed().is_ok());
    }

    #[test]
    fn test_open_mesh_detected() {
        let mut mesh = tetrahedron();
        mesh.indices.truncate(9); // drop one face
        assert_eq!(mesh.ensure_closed(), Err(Error::OpenMesh { boundary_edges: 3 }));
    }

    #[test]
    fn test_non_manifold_detected() {
        let mut mesh = tetrahedron();
        mesh.add_vertex(Point3::new(1.0, 1.0, 1.0), Vector3::z());
        // fin glued to the 1-2 edge
        mesh.add_triangle(1, 4, 2);
        mesh.add_triangle(2, 4, 1);
        let report = mesh.edge_report();
        assert_eq!(report.non_manifold_edges, 1);
        assert_eq!(mesh.ensure_closed(), Err(Error::NonManifoldMesh { edges: 1 }));
    }
}
