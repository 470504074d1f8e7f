// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed wall-like solids built directly as welded triangle meshes.
//!
//! Vertices are shared between faces and triangles are wound
//! counter-clockwise seen from outside, so the results pass
//! [`Mesh::ensure_closed`] and get outward normals.

use nalgebra::Point3;

use crate::bounds::Aabb;
use crate::mesh::Mesh;
use crate::normals::compute_vertex_normals;

/// Axis-aligned box solid (8 vertices, 12 triangles)
pub fn box_solid(min: Point3<f64>, max: Point3<f64>) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 36);
    for &(x, y, z) in &[
        (min.x, min.y, min.z),
        (max.x, min.y, min.z),
        (max.x, max.y, min.z),
        (min.x, max.y, min.z),
        (min.x, min.y, max.z),
        (max.x, min.y, max.z),
        (max.x, max.y, max.z),
        (min.x, max.y, max.z),
    ] {
        mesh.add_position(Point3::new(x, y, z));
    }

    for q in [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [0, 1, 5, 4], // front
        [2, 3, 7, 6], // back
        [3, 0, 4, 7], // left
        [1, 2, 6, 5], // right
    ] {
        add_quad(&mut mesh, q);
    }

    compute_vertex_normals(&mut mesh);
    mesh
}

/// Wall slab spanning `wall` with a rectangular through-opening.
///
/// The wall runs along x, its thickness is the y extent and its height the z
/// extent. The opening pierces the full thickness and covers
/// `[x0, x1] × [z0, z1]`, which must lie strictly inside the wall face.
pub fn wall_with_opening(wall: &Aabb, opening: (f64, f64, f64, f64)) -> Mesh {
    let (x0, x1, z0, z1) = opening;
    let (ymin, ymax) = (wall.min.y, wall.max.y);

    // ring order is counter-clockwise seen from -y
    let outer = [
        (wall.min.x, wall.min.z),
        (wall.max.x, wall.min.z),
        (wall.max.x, wall.max.z),
        (wall.min.x, wall.max.z),
    ];
    let inner = [(x0, z0), (x1, z0), (x1, z1), (x0, z1)];

    let mut mesh = Mesh::with_capacity(16, 96);
    // 0..4 outer front, 4..8 inner front, 8..12 outer back, 12..16 inner back
    for y in [ymin, ymax] {
        for &(x, z) in outer.iter().chain(inner.iter()) {
            mesh.add_position(Point3::new(x, y, z));
        }
    }

    let of = |k: usize| (k % 4) as u32;
    let inf = |k: usize| 4 + (k % 4) as u32;
    let ob = |k: usize| 8 + (k % 4) as u32;
    let ib = |k: usize| 12 + (k % 4) as u32;

    for k in 0..4 {
        // front frame, facing -y
        add_quad(&mut mesh, [of(k), of(k + 1), inf(k + 1), inf(k)]);
        // back frame, facing +y
        add_quad(&mut mesh, [ib(k), ib(k + 1), ob(k + 1), ob(k)]);
        // outer sides
        add_quad(&mut mesh, [of(k), ob(k), ob(k + 1), of(k + 1)]);
        // opening reveals, facing into the hole
        add_quad(&mut mesh, [inf(k), inf(k + 1), ib(k + 1), ib(k)]);
    }

    compute_vertex_normals(&mut mesh);
    mesh
}

#[inline]
fn add_quad(mesh: &mut Mesh, q: [u32; 4]) {
    mesh.add_triangle(q[0], q[1], q[2]);
    mesh.add_triangle(q[0], q[2], q[3]);
}
