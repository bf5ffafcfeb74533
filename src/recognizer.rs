//! Gesture state machine.
//!
//! `GestureRecognizer` classifies one surface's contact stream into
//! [`Gesture`]s. It is deliberately clock-free and callback-free: the caller
//! passes the current time into [`GestureRecognizer::touch_end`] and receives
//! at most one gesture per event, which keeps every rule testable in isolation.
//!
//! Classification rules:
//! - start with exactly two contacts announces a pinch baseline (`scale == 1`).
//! - move with two contacts after a two-contact snapshot is a pinch when the
//!   distance changed by more than `pinch_threshold`, otherwise a pan of the
//!   first contact. Never both.
//! - end that leaves no contacts, after a gesture that began with one contact,
//!   is a tap when travel stayed below `tap_tolerance`; a tap inside the
//!   double-tap window of the previous tap is a double-tap and consumes it.
//! - one-contact moves and three-or-more-contact events never classify.

#[cfg(test)]
#[path = "recognizer_test.rs"]
mod recognizer_test;

use tracing::trace;

use crate::config::GestureConfig;
use crate::geometry::Point;
use crate::gesture::Gesture;
use crate::input::{Contact, TouchInput, TouchPhase, pinch_distance};

/// Cross-event state for one surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Most recently observed active contacts.
    pub last_contacts: Vec<Contact>,
    /// Baseline for pinch classification. Set only while exactly two contacts are down.
    pub last_pinch_distance: Option<f64>,
    /// Time of the last tap still waiting to pair into a double-tap.
    pub last_tap_ms: Option<f64>,
    /// Where a single-contact gesture went down. Cleared when the last contact lifts.
    pub tap_origin: Option<Point>,
}

/// Result of feeding one event to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recognized {
    pub gesture: Option<Gesture>,
    /// The event belongs to a two-contact gesture; the platform must not scroll or zoom.
    pub prevent_default: bool,
}

/// Clock-free pan/pinch/tap/double-tap state machine.
///
/// Feed it one event at a time through [`GestureRecognizer::handle`] or the
/// per-phase methods. It never reads a clock; end events carry their own
/// timestamp.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: GestureState,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self { config, state: GestureState::default() }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Drop all cross-event state, as if freshly attached.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    /// Route one event by phase. `now_ms` is only read for end events.
    pub fn handle(&mut self, input: &TouchInput, now_ms: f64) -> Recognized {
        match input.phase {
            TouchPhase::Start => Recognized { gesture: self.touch_start(&input.contacts), prevent_default: false },
            TouchPhase::Move => self.touch_move(&input.contacts),
            TouchPhase::End => Recognized { gesture: self.touch_end(&input.contacts, now_ms), prevent_default: false },
            TouchPhase::Cancel => {
                self.touch_cancel(&input.contacts);
                Recognized::default()
            }
        }
    }

    // --- Phases ---

    /// A contact went down. `contacts` is the active set after the addition.
    pub fn touch_start(&mut self, contacts: &[Contact]) -> Option<Gesture> {
        self.state.last_contacts = contacts.to_vec();

        if let [only] = contacts {
            self.state.tap_origin = Some(only.position());
        }

        self.state.last_pinch_distance = pinch_distance(contacts);
        let distance = self.state.last_pinch_distance?;
        trace!(distance, "gesture: pinch baseline");
        Some(Gesture::Pinch { distance, scale: 1.0 })
    }

    /// Contacts moved. `contacts` is the active set after the movement.
    pub fn touch_move(&mut self, contacts: &[Contact]) -> Recognized {
        let prevent_default = contacts.len() == 2;
        let gesture = self.classify_move(contacts);
        self.state.last_contacts = contacts.to_vec();
        Recognized { gesture, prevent_default }
    }

    /// A contact lifted. `contacts` is the active set after the removal and may be empty.
    pub fn touch_end(&mut self, contacts: &[Contact], now_ms: f64) -> Option<Gesture> {
        let mut gesture = None;

        if contacts.is_empty() {
            if let Some(origin) = self.state.tap_origin.take() {
                if let Some(last) = self.state.last_contacts.first() {
                    let travel = origin.distance_to(last.position());
                    if travel < self.config.tap_tolerance {
                        gesture = Some(self.classify_tap(now_ms));
                    } else {
                        trace!(travel, "gesture: tap rejected, moved too far");
                    }
                }
            }
        }

        self.state.last_pinch_distance = None;
        self.state.last_contacts = contacts.to_vec();
        gesture
    }

    /// The platform aborted the contacts. Nothing classifies; pending taps survive.
    pub fn touch_cancel(&mut self, contacts: &[Contact]) {
        self.state.tap_origin = None;
        self.state.last_pinch_distance = None;
        self.state.last_contacts = contacts.to_vec();
    }

    // --- Classification ---

    fn classify_move(&mut self, contacts: &[Contact]) -> Option<Gesture> {
        let current = pinch_distance(contacts);
        let had_pair = self.state.last_contacts.len() == 2;

        let (Some(distance), Some(last), true) = (current, self.state.last_pinch_distance, had_pair) else {
            // No usable baseline: track the current pair (or none) and wait for the next move.
            self.state.last_pinch_distance = current;
            return None;
        };

        if (distance - last).abs() > self.config.pinch_threshold {
            if last <= 0.0 {
                // Contacts started coincident: no ratio yet, seed and wait.
                self.state.last_pinch_distance = Some(distance);
                return None;
            }
            let scale = distance / last;
            self.state.last_pinch_distance = Some(distance);
            trace!(distance, scale, "gesture: pinch");
            return Some(Gesture::Pinch { distance, scale });
        }

        let lead = contacts[0];
        let previous = self.state.last_contacts.iter().find(|c| c.id == lead.id)?;
        let (dx, dy) = previous.position().delta_to(lead.position());
        trace!(dx, dy, "gesture: pan");
        Some(Gesture::Pan { dx, dy })
    }

    fn classify_tap(&mut self, now_ms: f64) -> Gesture {
        match self.state.last_tap_ms {
            Some(prev) if now_ms - prev < self.config.double_tap_window_ms => {
                self.state.last_tap_ms = None;
                trace!(gap_ms = now_ms - prev, "gesture: double tap");
                Gesture::DoubleTap
            }
            _ => {
                self.state.last_tap_ms = Some(now_ms);
                trace!(now_ms, "gesture: tap");
                Gesture::Tap
            }
        }
    }
}
