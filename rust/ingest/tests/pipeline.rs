// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model exports in, match report out.

use serde_json::json;
use wallsync_ingest::{
    load_analytical_surfaces, parse_analytical_surfaces, parse_architectural_walls, Error,
    DEFAULT_WELD_TOLERANCE,
};
use wallsync_matching::{match_surfaces, Classification};

/// Box wall as a polygon soup in millimetres
fn box_wall_json(id: &str, min: [f64; 3], max: [f64; 3]) -> serde_json::Value {
    let corner = |i: usize| {
        [
            if i & 1 == 0 { min[0] } else { max[0] },
            if i & 2 == 0 { min[1] } else { max[1] },
            if i & 4 == 0 { min[2] } else { max[2] },
        ]
    };
    // outward quads over corner bit indices (x = bit 0, y = bit 1, z = bit 2)
    let quads = [
        [0, 2, 3, 1],
        [4, 5, 7, 6],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 4, 6, 2],
        [1, 3, 7, 5],
    ];
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for quad in quads {
        faces.push(4u32);
        for c in quad {
            faces.push((vertices.len() / 3) as u32);
            vertices.extend(corner(c));
        }
    }
    json!({ "id": id, "displayValue": [ { "vertices": vertices, "faces": faces } ] })
}

fn quad_json(id: &str, app_id: &str, corners: [[f64; 3]; 4]) -> serde_json::Value {
    json!({
        "id": id,
        "applicationId": app_id,
        "speckleType": "Objects.Structural.Geometry.Element2D",
        "vertices": corners.concat(),
    })
}

#[test]
fn millimetre_models_match_in_metres() {
    let architectural = json!({
        "units": "mm",
        "collections": [
            { "name": "Walls", "elements": [
                box_wall_json("w1", [0.0, 0.0, 0.0], [4000.0, 200.0, 3000.0]),
                box_wall_json("w2", [10000.0, 0.0, 0.0], [14000.0, 200.0, 3000.0]),
            ] },
            { "name": "Doors", "elements": [] },
        ],
    });
    let analytical = json!({
        "units": "cm",
        "elements": [
            quad_json("s1", "a1", [[0.0, 10.0, 0.0], [400.0, 10.0, 0.0], [400.0, 10.0, 300.0], [0.0, 10.0, 300.0]]),
            quad_json("s1-copy", "a1", [[0.0, 10.0, 0.0], [400.0, 10.0, 0.0], [400.0, 10.0, 300.0], [0.0, 10.0, 300.0]]),
            quad_json("slab", "a2", [[0.0, 0.0, 300.0], [400.0, 0.0, 300.0], [400.0, 400.0, 300.0], [0.0, 400.0, 300.0]]),
            quad_json("s2", "a3", [[1050.0, 10.0, 50.0], [1350.0, 10.0, 50.0], [1350.0, 10.0, 250.0], [1050.0, 10.0, 250.0]]),
            quad_json("orphan", "a4", [[0.0, 500.0, 0.0], [400.0, 500.0, 0.0], [400.0, 500.0, 300.0], [0.0, 500.0, 300.0]]),
        ],
    });

    let walls = parse_architectural_walls(&architectural.to_string(), DEFAULT_WELD_TOLERANCE).unwrap();
    let surfaces = parse_analytical_surfaces(&analytical.to_string()).unwrap();
    assert_eq!(walls.len(), 2);
    assert_eq!(walls.items[0].mesh().vertex_count(), 8);
    assert_eq!(surfaces.len(), 3);
    assert_eq!(surfaces.duplicates, 1);
    assert_eq!(surfaces.floors, 1);

    let report = match_surfaces(&surfaces.items, &walls.items, 0.01).unwrap();
    assert!(report.wall_diagnostics.is_empty());
    assert_eq!(report.get("s1").unwrap().wall_ids(), ["w1".to_string()]);
    assert_eq!(report.get("s2").unwrap().wall_ids(), ["w2".to_string()]);
    assert_eq!(report.get("orphan").unwrap().classification, Classification::NoMatch);
    assert!(!report.is_fully_coordinated());
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        parse_analytical_surfaces("{ \"units\": "),
        Err(Error::Json(_))
    ));
}

#[test]
fn missing_file_names_the_path() {
    let err = load_analytical_surfaces("does/not/exist.json").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}
