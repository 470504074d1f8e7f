// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating, buffering or sampling geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Empty mesh: {0}")]
    EmptyMesh(String),

    #[error("Index buffer length {0} is not a multiple of 3")]
    MalformedIndices(usize),

    #[error("Triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("Mesh has {normals} normal components for {positions} position components")]
    NormalCountMismatch { positions: usize, normals: usize },

    #[error("Vertex {vertex} has a zero-length or non-finite normal")]
    ZeroLengthNormal { vertex: usize },

    #[error("Mesh is not closed: {boundary_edges} boundary edges")]
    OpenMesh { boundary_edges: usize },

    #[error("Mesh is not manifold: {edges} edges shared by more than two triangles")]
    NonManifoldMesh { edges: usize },

    #[error("Invalid buffer distance: {0} (must be finite and >= 0)")]
    InvalidBufferDistance(f64),

    #[error("Invalid surface: expected 4 vertices, got {0}")]
    InvalidSurface(usize),

    #[error("Invalid grid resolution: {0} (must be >= 1)")]
    InvalidGridResolution(usize),
}
