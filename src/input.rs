//! Input model: contacts, touch phases, and the per-event snapshot.
//!
//! The platform delivers the full set of currently active contacts with every
//! event (post-addition for start, post-movement for move, post-removal for
//! end). Contacts are correlated across events only through the identifier the
//! platform assigns; the recognizers never invent or merge identifiers.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Platform-assigned identifier, stable for the lifetime of one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i32);

/// One active touch point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl Contact {
    #[must_use]
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id: ContactId(id), x, y }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Distance between the two contacts of a two-contact set.
///
/// Returns `None` for any other contact count.
#[must_use]
pub fn pinch_distance(contacts: &[Contact]) -> Option<f64> {
    match contacts {
        [a, b] => Some(a.position().distance_to(b.position())),
        _ => None,
    }
}

/// Which platform notification produced a [`TouchInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// A contact was added.
    Start,
    /// One or more contacts moved.
    Move,
    /// A contact was lifted.
    End,
    /// The platform aborted one or more contacts (e.g. a system gesture took over).
    Cancel,
}

impl TouchPhase {
    /// DOM event name for this phase.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
            Self::Cancel => "touchcancel",
        }
    }
}

/// One raw event as delivered by the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    pub phase: TouchPhase,
    /// Active contacts after the event was applied. May be empty on end.
    pub contacts: Vec<Contact>,
    /// Vertical scroll offset of the surface at event time.
    #[serde(default)]
    pub scroll_top: f64,
}

impl TouchInput {
    #[must_use]
    pub fn new(phase: TouchPhase, contacts: Vec<Contact>) -> Self {
        Self { phase, contacts, scroll_top: 0.0 }
    }

    #[must_use]
    pub fn with_scroll_top(mut self, scroll_top: f64) -> Self {
        self.scroll_top = scroll_top;
        self
    }
}

/// What the surface should do with the platform event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the platform's default scroll/zoom handling for this event.
    pub prevent_default: bool,
}

impl EventOutcome {
    #[must_use]
    pub fn consumed() -> Self {
        Self { prevent_default: true }
    }
}
