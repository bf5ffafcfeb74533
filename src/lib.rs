//! Multi-touch gesture recognition for touch surfaces.
//!
//! This crate turns raw touch-contact streams (start / move / end, each
//! carrying the full set of active contacts) into semantic gestures: two-finger
//! pan, pinch, tap, and double-tap. It also ships a pull-to-refresh recognizer
//! for scrollable containers. The recognizers are pure state machines with no
//! dependency on a UI framework; the host wires platform listeners to them via
//! the [`surface::Surface`] trait and receives results through callbacks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`recognizer`] | Clock-free gesture state machine ([`recognizer::GestureRecognizer`]) |
//! | [`engine`] | Recognizer + handler slot + clock, driven by one surface |
//! | [`surface`] | Listener registration, [`surface::attach`] and the detach handle |
//! | [`gesture`] | Gesture values and the optional handler record |
//! | [`input`] | Contacts, touch phases, and per-event input |
//! | [`pull_refresh`] | Pull-to-refresh recognizer and engine |
//! | [`geometry`] | Point math shared by the recognizers |
//! | [`clock`] | Injectable monotonic clock |
//! | [`config`] | Tunable thresholds, loadable from JSON |
//! | [`error`] | Configuration and listener-registration errors |
//! | [`consts`] | Default thresholds and timing windows |
//! | `web` | `web-sys` binding for `HtmlElement` (feature `web`) |
//! | `testing` | In-memory surface for host tests (feature `testing`) |

pub mod clock;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod pull_refresh;
pub mod recognizer;
pub mod surface;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(feature = "web")]
pub mod web;

pub use engine::GestureEngine;
pub use error::GestureError;
pub use gesture::{Gesture, GestureHandlers};
pub use input::{Contact, ContactId, TouchInput, TouchPhase};
pub use surface::{AttachOptions, Attachment, attach, attach_gestures};
