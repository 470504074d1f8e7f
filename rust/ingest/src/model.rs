// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde schema of the JSON model exports.
//!
//! Only the fields the extractors read are modelled; anything else in a
//! document is ignored.

use serde::Deserialize;

/// Structural analysis model export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticalDocument {
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub elements: Vec<AnalyticalElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticalElement {
    pub id: String,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default, alias = "speckle_type")]
    pub speckle_type: String,
    /// Flat `x, y, z` triples of the element outline
    #[serde(default)]
    pub vertices: Vec<f64>,
}

impl AnalyticalElement {
    /// Shell/area elements; frames, nodes and loads are not surfaces
    pub fn is_element_2d(&self) -> bool {
        self.speckle_type.contains("Element2D")
    }
}

/// Architectural model export, elements grouped by category
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturalDocument {
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ArchitecturalElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturalElement {
    pub id: String,
    #[serde(default)]
    pub display_value: Vec<DisplayMesh>,
}

/// Polygon mesh in the export's face-list encoding
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayMesh {
    /// Flat `x, y, z` triples
    #[serde(default)]
    pub vertices: Vec<f64>,
    /// `[n, i0, .., i(n-1), n, ..]`; `n = 0` and `n = 1` are legacy
    /// encodings of triangles and quads
    #[serde(default)]
    pub faces: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_fields() {
        let doc: AnalyticalDocument = serde_json::from_str(
            r#"{
                "units": "mm",
                "elements": [
                    { "id": "a", "applicationId": "app-1",
                      "speckleType": "Objects.Structural.Geometry.Element2D",
                      "vertices": [0, 0, 0], "extra": true },
                    { "id": "b", "speckle_type": "Objects.Structural.Geometry.Element1D" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.units.as_deref(), Some("mm"));
        assert_eq!(doc.elements[0].application_id.as_deref(), Some("app-1"));
        assert!(doc.elements[0].is_element_2d());
        assert!(!doc.elements[1].is_element_2d());
        assert!(doc.elements[1].vertices.is_empty());
    }

    #[test]
    fn display_value_defaults_to_empty() {
        let doc: ArchitecturalDocument = serde_json::from_str(
            r#"{ "units": "m", "collections": [ { "name": "Walls", "elements": [ { "id": "w" } ] } ] }"#,
        )
        .unwrap();
        assert!(doc.collections[0].elements[0].display_value.is_empty());
    }
}
