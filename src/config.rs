//! Recognizer thresholds, loadable from a (partial) JSON object.
//!
//! Every field falls back to the matching constant in [`crate::consts`], so a
//! host only needs to send the values it wants to override, e.g. a larger tap
//! tolerance on high-DPI surfaces where one unit is sub-pixel.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DOUBLE_TAP_WINDOW_MS, PINCH_DISTANCE_THRESHOLD, PULL_REFRESH_RESISTANCE, PULL_REFRESH_THRESHOLD,
    TAP_MOVE_TOLERANCE,
};
use crate::error::GestureError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// A two-contact move whose distance change exceeds this is a pinch.
    pub pinch_threshold: f64,
    /// A lift whose travel from touch-down is below this is a tap.
    pub tap_tolerance: f64,
    /// Two taps closer than this (milliseconds) pair into a double-tap.
    pub double_tap_window_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_DISTANCE_THRESHOLD,
            tap_tolerance: TAP_MOVE_TOLERANCE,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a JSON object. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GestureError> {
        let config: Self = serde_json::from_str(raw)?;
        let config = config.validate()?;
        debug!(
            pinch_threshold = config.pinch_threshold,
            tap_tolerance = config.tap_tolerance,
            double_tap_window_ms = config.double_tap_window_ms,
            "gesture config loaded"
        );
        Ok(config)
    }

    /// Reject non-finite or out-of-range values.
    pub fn validate(self) -> Result<Self, GestureError> {
        non_negative("pinch_threshold", self.pinch_threshold)?;
        positive("tap_tolerance", self.tap_tolerance)?;
        positive("double_tap_window_ms", self.double_tap_window_ms)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullToRefreshConfig {
    /// Pull distance (after resistance) that triggers a refresh on release.
    pub threshold: f64,
    /// Divisor applied to raw finger travel.
    pub resistance: f64,
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self { threshold: PULL_REFRESH_THRESHOLD, resistance: PULL_REFRESH_RESISTANCE }
    }
}

impl PullToRefreshConfig {
    pub fn from_json(raw: &str) -> Result<Self, GestureError> {
        let config: Self = serde_json::from_str(raw)?;
        let config = config.validate()?;
        debug!(threshold = config.threshold, resistance = config.resistance, "pull-to-refresh config loaded");
        Ok(config)
    }

    pub fn validate(self) -> Result<Self, GestureError> {
        positive("threshold", self.threshold)?;
        positive("resistance", self.resistance)?;
        Ok(self)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), GestureError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GestureError::InvalidConfig { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), GestureError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GestureError::InvalidConfig { field, value })
    }
}
