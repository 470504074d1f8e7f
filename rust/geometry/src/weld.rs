// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerance-based vertex welding.
//!
//! Exported display meshes often repeat a vertex once per face. Welding
//! merges vertices within a tolerance so shared edges become topologically
//! shared, which closedness checks and smooth vertex normals both rely on.
//! Uses a grid-based spatial hash: each lookup checks the 27 neighboring
//! cells.

use nalgebra::Point3;
use rustc_hash::FxHashMap;

use crate::mesh::Mesh;

/// Grid hash of welded vertex positions
struct WeldGrid {
    cell_size: f64,
    grid: FxHashMap<(i64, i64, i64), Vec<u32>>,
}

impl WeldGrid {
    fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            grid: FxHashMap::default(),
        }
    }

    fn cell_coords(&self, p: &Point3<f64>) -> (i64, i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
            (p.z / self.cell_size).floor() as i64,
        )
    }

    /// Index of an existing vertex within `tolerance` of `p`, or `p` appended
    /// to `welded` as a new vertex.
    fn find_or_insert(&mut self, welded: &mut Vec<Point3<f64>>, p: Point3<f64>, tolerance: f64) -> u32 {
        let (cx, cy, cz) = self.cell_coords(&p);
        let tol_sq = tolerance * tolerance;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(keys) = self.grid.get(&(cx + dx, cy + dy, cz + dz)) {
                        for &k in keys {
                            if (welded[k as usize] - p).norm_squared() <= tol_sq {
                                return k;
                            }
                        }
                    }
                }
            }
        }

        let key = welded.len() as u32;
        welded.push(p);
        self.grid.entry((cx, cy, cz)).or_default().push(key);
        key
    }
}

/// Merge vertices closer than `tolerance`, drop triangles that collapse and
/// vertices no triangle references.
///
/// Normals are discarded; recompute them with
/// [`crate::normals::compute_vertex_normals`]. Indices out of range are
/// dropped with their triangle.
pub fn weld_vertices(mesh: &Mesh, tolerance: f64) -> Mesh {
    let tolerance = tolerance.max(f64::EPSILON);
    let mut grid = WeldGrid::new(tolerance);
    let mut welded: Vec<Point3<f64>> = Vec::with_capacity(mesh.vertex_count());

    let remap: Vec<u32> = (0..mesh.vertex_count())
        .map(|i| grid.find_or_insert(&mut welded, mesh.position(i), tolerance))
        .collect();

    let mut triangles: Vec<[u32; 3]> = Vec::with_capacity(mesh.triangle_count());
    for tri in mesh.indices.chunks_exact(3) {
        let Some(mapped) = tri
            .iter()
            .map(|&i| remap.get(i as usize).copied())
            .collect::<Option<Vec<u32>>>()
        else {
            continue;
        };
        let (a, b, c) = (mapped[0], mapped[1], mapped[2]);
        if a == b || b == c || a == c {
            continue;
        }
        triangles.push([a, b, c]);
    }

    // compact to referenced vertices, in first-use order
    let mut compact: Vec<Option<u32>> = vec![None; welded.len()];
    let mut out = Mesh::with_capacity(welded.len(), triangles.len() * 3);
    for tri in &triangles {
        let mut idx = [0u32; 3];
        for (slot, &v) in idx.iter_mut().zip(tri) {
            *slot = *compact[v as usize].get_or_insert_with(|| {
                out.add_position(welded[v as usize]);
                (out.vertex_count() - 1) as u32
            });
        }
        out.add_triangle(idx[0], idx[1], idx[2]);
    }

    out
}
