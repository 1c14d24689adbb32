use super::*;

fn valid_layer() -> LayerConfig {
    LayerConfig {
        start_index: 0,
        num_images: 10,
        duration: 2.0,
        size: 150.0,
        top: 10.0,
        left: -5.0,
        z_index: 2.0,
    }
}

#[test]
fn valid_layer_passes() {
    valid_layer().validate().unwrap();
}

#[test]
fn rejects_degenerate_fields() {
    let mut l = valid_layer();
    l.num_images = 0;
    assert!(l.validate().is_err());

    let mut l = valid_layer();
    l.duration = 0.0;
    assert!(l.validate().is_err());

    let mut l = valid_layer();
    l.duration = f64::INFINITY;
    assert!(l.validate().is_err());

    let mut l = valid_layer();
    l.size = -10.0;
    assert!(l.validate().is_err());

    let mut l = valid_layer();
    l.top = f64::NAN;
    assert!(l.validate().is_err());

    let mut l = valid_layer();
    l.z_index = f64::NAN;
    assert!(l.validate().is_err());
}

#[test]
fn scene_validate_names_the_offending_layer() {
    let mut bad = valid_layer();
    bad.num_images = 0;
    let scene = Scene {
        groups: vec![
            LayerGroup {
                layers: vec![valid_layer()],
            },
            LayerGroup {
                layers: vec![valid_layer(), bad],
            },
        ],
    };
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("group 1 layer 1"));
}

#[test]
fn parses_camel_case_array_of_arrays() {
    let json = r#"[
        [
            { "startIndex": 0, "numImages": 60, "duration": 6, "size": 300, "top": 20, "left": 30, "zIndex": 2 },
            { "startIndex": 0, "numImages": 60, "duration": 4, "size": 120, "top": 75, "left": 80, "zIndex": 0.5 }
        ],
        [
            { "startIndex": 0, "numImages": 60, "duration": 8, "size": 200, "top": 50, "left": 10, "zIndex": 1 }
        ]
    ]"#;
    let scene = Scene::from_json_str(json).unwrap();
    assert_eq!(scene.groups.len(), 2);
    assert_eq!(scene.layer_count(), 3);
    assert_eq!(scene.groups[0].layers[0].num_images, 60);
    assert_eq!(scene.groups[1].layers[0].z_index, 1.0);
}

#[test]
fn serializes_back_to_array_of_arrays() {
    let scene = Scene {
        groups: vec![LayerGroup {
            layers: vec![valid_layer()],
        }],
    };
    let json = serde_json::to_string(&scene).unwrap();
    assert!(json.starts_with("[["));
    assert!(json.contains("\"startIndex\""));
    let round: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(round, scene);
}

#[test]
fn from_json_str_rejects_invalid_configs() {
    let json = r#"[[{ "startIndex": 0, "numImages": 0, "duration": 1, "size": 100, "top": 0, "left": 0, "zIndex": 0 }]]"#;
    let err = Scene::from_json_str(json).unwrap_err();
    assert!(matches!(err, CycloramaError::Validation(_)));
}

#[test]
fn from_json_str_rejects_malformed_json() {
    let err = Scene::from_json_str("not json").unwrap_err();
    assert!(matches!(err, CycloramaError::Serde(_)));
}
