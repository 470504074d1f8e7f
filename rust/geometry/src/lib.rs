// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! wallsync Geometry
//!
//! Geometric building blocks for coordinating analytical surfaces with
//! architectural wall solids: bounding boxes, triangle meshes with vertex
//! normals, mesh buffering, interior sampling and point-in-solid tests.
//! Uses nalgebra for points and vectors.

pub mod bounds;
pub mod buffer;
pub mod containment;
pub mod error;
pub mod interior;
pub mod mesh;
pub mod normals;
pub mod shapes;
pub mod surface;
pub mod weld;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bounds::Aabb;
pub use buffer::{create_buffered_mesh, BufferedMesh};
pub use containment::{point_in_mesh, PointContainment};
pub use error::{Error, Result};
pub use interior::{generate_interior_points, InteriorGrid};
pub use mesh::{EdgeReport, Mesh};
pub use normals::compute_vertex_normals;
pub use surface::AnalyticalSurface;
pub use weld::weld_vertices;
