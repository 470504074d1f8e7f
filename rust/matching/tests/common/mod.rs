// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared wall and surface builders for integration tests.

#![allow(dead_code)]

use wallsync_geometry::shapes::{box_solid, wall_with_opening};
use wallsync_geometry::{compute_vertex_normals, Aabb, AnalyticalSurface, Mesh, Point3};
use wallsync_matching::RevitWall;

/// Straight wall along x: length `x0..x1`, thickness `y0..y1`, height `z0..z1`
pub fn box_wall(id: &str, min: [f64; 3], max: [f64; 3]) -> RevitWall {
    RevitWall::new(
        id,
        box_solid(
            Point3::new(min[0], min[1], min[2]),
            Point3::new(max[0], max[1], max[2]),
        ),
    )
}

/// 4 m × 3 m × 0.2 m wall with a 1 m × 1 m opening in the middle
pub fn wall_with_door(id: &str) -> RevitWall {
    let bounds = Aabb::new(Point3::origin(), Point3::new(4.0, 0.2, 3.0));
    RevitWall::new(id, wall_with_opening(&bounds, (1.5, 2.5, 1.0, 2.0)))
}

/// Vertical surface in the plane `y = y`, spanning `x0..x1` and `z0..z1`
pub fn vertical_surface(id: &str, y: f64, x: (f64, f64), z: (f64, f64)) -> AnalyticalSurface {
    AnalyticalSurface::from_corners(
        id,
        [
            Point3::new(x.0, y, z.0),
            Point3::new(x.1, y, z.0),
            Point3::new(x.1, y, z.1),
            Point3::new(x.0, y, z.1),
        ],
    )
}

/// Rotate a point about the z axis through the origin
pub fn rotate_z(p: Point3<f64>, angle: f64) -> Point3<f64> {
    let (s, c) = angle.sin_cos();
    Point3::new(c * p.x - s * p.y, s * p.x + c * p.y, p.z)
}

/// Rotate every vertex of a mesh about the z axis and recompute normals
pub fn rotate_mesh_z(mesh: &Mesh, angle: f64) -> Mesh {
    let mut rotated = Mesh::with_capacity(mesh.vertex_count(), mesh.indices.len());
    for i in 0..mesh.vertex_count() {
        rotated.add_position(rotate_z(mesh.position(i), angle));
    }
    rotated.indices = mesh.indices.clone();
    compute_vertex_normals(&mut rotated);
    rotated
}
