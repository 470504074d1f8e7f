// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-solid containment by ray parity.
//!
//! A ray is cast from the query point and its crossings with the closed
//! triangle surface are counted: odd means inside. Three skewed directions
//! are cast and the majority wins, so a ray grazing an edge or vertex of an
//! axis-aligned wall cannot flip the answer on its own. The mesh must be
//! closed; [`crate::create_buffered_mesh`] guarantees that for buffered
//! meshes. Points exactly on the boundary may classify either way.

use nalgebra::{Point3, Vector3};

use crate::bounds::Aabb;
use crate::buffer::BufferedMesh;
use crate::mesh::Mesh;

/// Slack for the bounding-box quick reject
const BOUNDS_EPS: f64 = 1e-9;

/// Ray directions; deliberately not aligned with any axis or diagonal
const RAY_DIRECTIONS: [[f64; 3]; 3] = [
    [1.0, 0.318_309_886, 0.141_421_356],
    [-0.271_828_183, 1.0, 0.577_215_665],
    [0.173_205_081, -0.414_213_562, 1.0],
];

/// Solids that can answer point membership queries
pub trait PointContainment {
    /// Whether `point` lies inside the solid
    fn contains_point(&self, point: &Point3<f64>) -> bool;

    /// Membership of each point, in order
    fn contains(&self, points: &[Point3<f64>]) -> Vec<bool> {
        points.iter().map(|p| self.contains_point(p)).collect()
    }

    /// Whether every point is inside; stops at the first miss
    fn contains_all(&self, points: &[Point3<f64>]) -> bool {
        points.iter().all(|p| self.contains_point(p))
    }
}

impl PointContainment for BufferedMesh {
    #[inline]
    fn contains_point(&self, point: &Point3<f64>) -> bool {
        point_in_mesh(self.mesh(), self.bounds(), point)
    }
}

/// Ray-parity membership test of `point` against a closed `mesh` whose
/// bounds are `bounds`.
pub fn point_in_mesh(mesh: &Mesh, bounds: &Aabb, point: &Point3<f64>) -> bool {
    if !bounds.contains_point(point, BOUNDS_EPS) {
        return false;
    }

    let inside_votes = RAY_DIRECTIONS
        .iter()
        .filter(|d| {
            let dir = Vector3::new(d[0], d[1], d[2]).normalize();
            crossing_count(mesh, point, &dir) % 2 == 1
        })
        .count();

    inside_votes * 2 > RAY_DIRECTIONS.len()
}

fn crossing_count(mesh: &Mesh, origin: &Point3<f64>, dir: &Vector3<f64>) -> usize {
    mesh.triangles()
        .filter(|[v0, v1, v2]| ray_intersects_triangle(origin, dir, v0, v1, v2))
        .count()
}

/// Möller–Trumbore ray-triangle intersection test.
///
/// Casts a ray from `origin` along `dir` and tests if it hits the
/// triangle (v0, v1, v2) in front of the origin.
fn ray_intersects_triangle(
    origin: &Point3<f64>,
    dir: &Vector3<f64>,
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = dir.cross(&edge2);
    let a = edge1.dot(&h);

    if a.abs() < 1e-12 {
        return false; // ray parallel to triangle
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    let q = s.cross(&edge1);
    let v = f * dir.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return false;
    }

    let t = f * edge2.dot(&q);
    t > 1e-12
}
