//! Error type for configuration and listener registration.
//!
//! Recognition itself never fails: degenerate input is ignored. Errors only
//! come from loading configuration or from a platform that refuses to
//! register a listener.

#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("listener registration failed for {event}: {message}")]
    Listener { event: &'static str, message: String },
}
