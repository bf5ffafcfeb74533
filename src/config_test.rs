#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// GestureConfig
// =============================================================

#[test]
fn gesture_defaults_match_constants() {
    let cfg = GestureConfig::default();
    assert_eq!(cfg.pinch_threshold, 1.0);
    assert_eq!(cfg.tap_tolerance, 10.0);
    assert_eq!(cfg.double_tap_window_ms, 300.0);
}

#[test]
fn gesture_from_json_empty_object_is_default() {
    let cfg = GestureConfig::from_json("{}").unwrap();
    assert_eq!(cfg, GestureConfig::default());
}

#[test]
fn gesture_from_json_partial_override() {
    let cfg = GestureConfig::from_json(r#"{"tap_tolerance": 24.0}"#).unwrap();
    assert_eq!(cfg.tap_tolerance, 24.0);
    assert_eq!(cfg.pinch_threshold, 1.0);
    assert_eq!(cfg.double_tap_window_ms, 300.0);
}

#[test]
fn gesture_from_json_zero_pinch_threshold_allowed() {
    let cfg = GestureConfig::from_json(r#"{"pinch_threshold": 0.0}"#).unwrap();
    assert_eq!(cfg.pinch_threshold, 0.0);
}

#[test]
fn gesture_from_json_rejects_negative_threshold() {
    let err = GestureConfig::from_json(r#"{"pinch_threshold": -1.0}"#).unwrap_err();
    assert!(matches!(err, GestureError::InvalidConfig { field: "pinch_threshold", .. }));
}

#[test]
fn gesture_from_json_rejects_zero_window() {
    let err = GestureConfig::from_json(r#"{"double_tap_window_ms": 0}"#).unwrap_err();
    assert!(matches!(err, GestureError::InvalidConfig { field: "double_tap_window_ms", .. }));
}

#[test]
fn gesture_from_json_rejects_malformed() {
    let err = GestureConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, GestureError::ConfigParse(_)));
}

#[test]
fn gesture_from_json_rejects_wrong_type() {
    let err = GestureConfig::from_json(r#"{"tap_tolerance": "wide"}"#).unwrap_err();
    assert!(matches!(err, GestureError::ConfigParse(_)));
}

#[test]
fn gesture_validate_rejects_nan() {
    let cfg = GestureConfig { tap_tolerance: f64::NAN, ..GestureConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn gesture_validate_rejects_infinite() {
    let cfg = GestureConfig { pinch_threshold: f64::INFINITY, ..GestureConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn invalid_config_error_message_names_field() {
    let err = GestureConfig { tap_tolerance: -3.0, ..GestureConfig::default() }.validate().unwrap_err();
    assert_eq!(err.to_string(), "invalid config: tap_tolerance = -3");
}

// =============================================================
// PullToRefreshConfig
// =============================================================

#[test]
fn pull_defaults_match_constants() {
    let cfg = PullToRefreshConfig::default();
    assert_eq!(cfg.threshold, 80.0);
    assert_eq!(cfg.resistance, 2.5);
}

#[test]
fn pull_from_json_partial_override() {
    let cfg = PullToRefreshConfig::from_json(r#"{"threshold": 120}"#).unwrap();
    assert_eq!(cfg.threshold, 120.0);
    assert_eq!(cfg.resistance, 2.5);
}

#[test]
fn pull_from_json_rejects_zero_resistance() {
    let err = PullToRefreshConfig::from_json(r#"{"resistance": 0}"#).unwrap_err();
    assert!(matches!(err, GestureError::InvalidConfig { field: "resistance", .. }));
}
