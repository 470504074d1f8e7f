// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Serialize, Serializer};

use crate::error::ElementError;

/// An element left out of an extraction, with the reason
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejected {
    pub id: String,
    #[serde(serialize_with = "serialize_display")]
    pub reason: ElementError,
}

fn serialize_display<S: Serializer>(
    error: &ElementError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Entities read from one model, plus what was skipped and why
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub rejected: Vec<Rejected>,
    /// Elements of other types or collections
    pub ignored: usize,
    /// Later elements repeating an application id
    pub duplicates: usize,
    /// Horizontal analytical elements
    pub floors: usize,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rejected: Vec::new(),
            ignored: 0,
            duplicates: 0,
            floors: 0,
        }
    }
}

impl<T> Extraction<T> {
    pub(crate) fn reject(&mut self, id: &str, reason: ElementError) {
        tracing::warn!(element_id = id, reason = %reason, "Rejecting element");
        self.rejected.push(Rejected {
            id: id.to_string(),
            reason,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
