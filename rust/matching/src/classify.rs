// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of per-surface match outcomes.

use serde::{Deserialize, Serialize};

/// Largest matched-wall count still treated as adjoining walls
/// (e.g. a surface spanning an internal corner).
pub const MAX_ADJOINING_WALLS: usize = 3;

/// Nature of the correspondence between a surface and the walls containing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No wall contains the surface. Coordination failure.
    NoMatch,
    /// Exactly one wall contains the surface.
    SingleWall,
    /// Two or three walls contain the surface.
    MultiWall,
    /// More than three walls contain the surface. Warning only; usually a
    /// too-large buffer, overlapping model elements, or analytical surfaces
    /// much coarser than the wall subdivision.
    AmbiguousMultiWall,
}

impl Classification {
    /// Classify by number of walls that contain the surface
    pub fn from_count(k: usize) -> Self {
        match k {
            0 => Self::NoMatch,
            1 => Self::SingleWall,
            k if k <= MAX_ADJOINING_WALLS => Self::MultiWall,
            _ => Self::AmbiguousMultiWall,
        }
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        self == Self::NoMatch
    }

    #[inline]
    pub fn is_warning(self) -> bool {
        self == Self::AmbiguousMultiWall
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NoMatch => "no match",
            Self::SingleWall => "single wall",
            Self::MultiWall => "multi wall",
            Self::AmbiguousMultiWall => "ambiguous multi wall",
        }
    }
}

/// Walls matched to one surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "walls", rename_all = "snake_case")]
pub enum MatchedWalls {
    NoMatch,
    Single(String),
    Multiple(Vec<String>),
}

impl MatchedWalls {
    pub fn from_ids(mut ids: Vec<String>) -> Self {
        match ids.len() {
            0 => Self::NoMatch,
            1 => Self::Single(ids.remove(0)),
            _ => Self::Multiple(ids),
        }
    }

    /// Matched wall ids in candidate order
    pub fn ids(&self) -> &[String] {
        match self {
            Self::NoMatch => &[],
            Self::Single(id) => std::slice::from_ref(id),
            Self::Multiple(ids) => ids,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Outcome of matching one surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub walls: MatchedWalls,
    pub classification: Classification,
    pub matched_wall_count: usize,
}

impl MatchResult {
    /// Build a result from the ids of every wall that contained the surface
    pub fn from_matched(ids: Vec<String>) -> Self {
        let matched_wall_count = ids.len();
        Self {
            walls: MatchedWalls::from_ids(ids),
            classification: Classification::from_count(matched_wall_count),
            matched_wall_count,
        }
    }

    #[inline]
    pub fn wall_ids(&self) -> &[String] {
        self.walls.ids()
    }
}
