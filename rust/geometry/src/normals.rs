// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex normal generation

use nalgebra::Vector3;

use crate::mesh::Mesh;

/// Recompute per-vertex normals as the angle-weighted mean of the incident
/// face normals.
///
/// Angle weighting makes the result independent of how a planar face is
/// split into triangles: a box corner always gets the (±1, ±1, ±1)/√3
/// direction. Vertices that no non-degenerate triangle touches keep a zero
/// normal, which buffering reports as an error.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    let vertex_count = mesh.vertex_count();
    let mut normals = vec![Vector3::<f64>::zeros(); vertex_count];

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
            continue;
        }

        let v0 = mesh.position(i0);
        let v1 = mesh.position(i1);
        let v2 = mesh.position(i2);

        let face = (v1 - v0).cross(&(v2 - v0));
        let len = face.norm();
        if len < 1e-12 {
            continue; // degenerate triangle
        }
        let face = face / len;

        normals[i0] += face * corner_angle(&(v1 - v0), &(v2 - v0));
        normals[i1] += face * corner_angle(&(v2 - v1), &(v0 - v1));
        normals[i2] += face * corner_angle(&(v0 - v2), &(v1 - v2));
    }

    mesh.normals.clear();
    mesh.normals.reserve(vertex_count * 3);
    for n in normals {
        let unit = n.try_normalize(1e-12).unwrap_or_else(Vector3::zeros);
        mesh.normals.extend_from_slice(&[unit.x, unit.y, unit.z]);
    }
}

/// Interior angle between two edge vectors leaving the same corner
#[inline]
fn corner_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < 1e-24 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}
