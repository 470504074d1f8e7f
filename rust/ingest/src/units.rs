// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units of model exports. Everything downstream works in metres.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Metres,
    #[serde(rename = "cm")]
    Centimetres,
    #[serde(rename = "mm")]
    Millimetres,
}

impl LengthUnit {
    #[inline]
    pub fn to_metres(self, value: f64) -> f64 {
        match self {
            Self::Metres => value,
            Self::Centimetres => value / 100.0,
            Self::Millimetres => value / 1000.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Centimetres => "cm",
            Self::Millimetres => "mm",
        }
    }

    /// Resolve the `units` field of a model document
    pub fn from_document(units: Option<&str>) -> Result<Self> {
        units.ok_or(Error::MissingUnits)?.parse()
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "m" => Ok(Self::Metres),
            "cm" => Ok(Self::Centimetres),
            "mm" => Ok(Self::Millimetres),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
