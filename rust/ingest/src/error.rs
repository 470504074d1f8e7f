// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a whole model from being read
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model units are missing")]
    MissingUnits,

    #[error("Unknown length unit '{0}'; supported units are m, cm, mm")]
    UnknownUnit(String),

    #[error("No architectural walls found in the model")]
    NoWalls,
}

/// Why a single element was left out of an extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    #[error("Vertex array length {0} is not a multiple of 3")]
    VertexArrayLength(usize),

    #[error("Element has no display mesh")]
    MissingDisplayValue,

    #[error("Display mesh has no vertices or faces")]
    EmptyDisplayMesh,

    #[error("Face at offset {offset} has {count} vertices")]
    DegenerateFace { offset: usize, count: usize },

    #[error("Face at offset {offset} runs past the end of the face list")]
    TruncatedFaces { offset: usize },

    #[error("Face index {index} out of range (vertex count: {vertex_count})")]
    FaceIndexOutOfRange { index: u32, vertex_count: usize },

    #[error(transparent)]
    Geometry(#[from] wallsync_geometry::Error),
}
