use super::*;

#[test]
fn defaults_match_component_defaults() {
    let cfg = SafeAreaConfig::default();
    assert_eq!(cfg.mode, OutputMode::Disabled);
    assert_eq!(cfg.edges, EdgeToggles::ALL);
    assert_eq!(cfg.padding, RectOffset::ZERO);
    assert_eq!(cfg.min_border, RectOffset::ZERO);
    assert_eq!(cfg.cutout_correction, DEFAULT_CUTOUT_CORRECTION);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SafeAreaConfig::from_json_str(
        r#"{ "mode": "Padding", "edges": { "bottom": false }, "padding": { "top": 20 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.mode, OutputMode::Padding);
    assert!(cfg.edges.left && cfg.edges.right && cfg.edges.top);
    assert!(!cfg.edges.bottom);
    assert_eq!(cfg.padding.top, 20.0);
    assert_eq!(cfg.cutout_correction, DEFAULT_CUTOUT_CORRECTION);
}

#[test]
fn empty_object_is_the_default_config() {
    let cfg = SafeAreaConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SafeAreaConfig::default());
}

#[test]
fn non_positive_correction_is_rejected() {
    let mut cfg = SafeAreaConfig::default();
    cfg.cutout_correction = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("cutout_correction"));

    cfg.cutout_correction = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn non_finite_offsets_are_rejected() {
    let mut cfg = SafeAreaConfig::default();
    cfg.min_border.left = f64::INFINITY;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("min_border.left"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SafeAreaConfig::from_json_str(r#"{ "mode": "Sideways" }"#).unwrap_err();
    assert!(matches!(err, SafeAreaError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = SafeAreaConfig::from_path("target/does-not-exist/safearea.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}
