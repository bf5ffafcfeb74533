//! Default thresholds and timing windows for the recognizers.

// ── Pinch / pan ─────────────────────────────────────────────────

/// Distance change (surface units) above which a two-contact move is a pinch.
///
/// A change of exactly this amount is still a pan.
pub const PINCH_DISTANCE_THRESHOLD: f64 = 1.0;

// ── Tap ─────────────────────────────────────────────────────────

/// Maximum travel (surface units) from touch-down for a lift to count as a tap.
///
/// Travel must be strictly less than this value.
pub const TAP_MOVE_TOLERANCE: f64 = 10.0;

/// Maximum gap in milliseconds between two taps that pair into a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

// ── Pull-to-refresh ─────────────────────────────────────────────

/// Pull distance (after resistance) that triggers a refresh on release.
pub const PULL_REFRESH_THRESHOLD: f64 = 80.0;

/// Divisor applied to raw finger travel while pulling.
pub const PULL_REFRESH_RESISTANCE: f64 = 2.5;

/// Pull distance is capped at `threshold * PULL_REFRESH_MAX_FACTOR`.
pub const PULL_REFRESH_MAX_FACTOR: f64 = 1.5;
