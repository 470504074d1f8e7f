// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for matching runs.

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a matching run before it starts.
///
/// Problems with individual walls or surfaces never surface here; they are
/// recorded in the [`crate::MatchReport`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    /// A geometry-level parameter was rejected.
    #[error(transparent)]
    Geometry(#[from] wallsync_geometry::Error),
}
