// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh buffering: outward expansion of a closed wall solid along its
//! vertex normals, giving containment tests a tolerance margin.

use crate::bounds::Aabb;
use crate::error::{Error, Result};
use crate::mesh::Mesh;

/// A mesh expanded along its vertex normals.
///
/// Same vertex count and triangle indices as the source mesh; only the
/// positions differ.
#[derive(Debug, Clone)]
pub struct BufferedMesh {
    mesh: Mesh,
    distance: f64,
    bounds: Aabb,
}

impl BufferedMesh {
    /// The displaced mesh
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Distance every vertex was moved
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Bounds of the displaced mesh
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

/// Create a buffered copy of `mesh`, moving each vertex `buffer_distance`
/// along its normal.
///
/// The mesh must be structurally valid and closed, and every normal must be
/// non-zero; normals need not be pre-normalized. Violations are reported,
/// never repaired.
pub fn create_buffered_mesh(mesh: &Mesh, buffer_distance: f64) -> Result<BufferedMesh> {
    if !buffer_distance.is_finite() || buffer_distance < 0.0 {
        return Err(Error::InvalidBufferDistance(buffer_distance));
    }

    mesh.validate()?;
    mesh.ensure_closed()?;

    let mut positions = Vec::with_capacity(mesh.positions.len());
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal(i);
        let len = n.norm();
        if !len.is_finite() || len < 1e-12 {
            return Err(Error::ZeroLengthNormal { vertex: i });
        }
        let moved = mesh.position(i) + n * (buffer_distance / len);
        positions.extend_from_slice(&[moved.x, moved.y, moved.z]);
    }

    let buffered = Mesh {
        positions,
        normals: mesh.normals.clone(),
        indices: mesh.indices.clone(),
    };
    let bounds = buffered.bounds();

    Ok(BufferedMesh {
        mesh: buffered,
        distance: buffer_distance,
        bounds,
    })
}
