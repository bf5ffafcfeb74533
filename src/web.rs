//! Browser binding: DOM elements as touch surfaces.
//!
//! Listeners are registered non-passive so two-finger moves can cancel the
//! browser's own scroll/zoom. Contact coordinates are converted from client
//! space to element-local space using the element's bounding rect at event
//! time.

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, Performance, TouchEvent, TouchList};

use crate::clock::Clock;
use crate::error::GestureError;
use crate::input::{Contact, TouchInput, TouchPhase};
use crate::surface::{Listener, Surface};

/// Keeps the JS callback alive until the listener is removed.
pub struct ElementRegistration {
    event: &'static str,
    callback: Closure<dyn FnMut(TouchEvent)>,
}

impl Surface for HtmlElement {
    type Registration = ElementRegistration;

    fn listen(&self, phase: TouchPhase, mut listener: Listener) -> Result<ElementRegistration, GestureError> {
        let event = phase.event_name();
        let element = self.clone();
        let callback = Closure::wrap(Box::new(move |ev: TouchEvent| {
            let input = TouchInput::new(phase, element_contacts(&element, &ev.touches()))
                .with_scroll_top(f64::from(element.scroll_top()));
            if listener(&input).prevent_default {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(TouchEvent)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| GestureError::Listener { event, message: format!("{e:?}") })?;

        Ok(ElementRegistration { event, callback })
    }

    fn unlisten(&self, registration: ElementRegistration) {
        let callback = registration.callback.as_ref().unchecked_ref();
        if let Err(e) = self.remove_event_listener_with_callback(registration.event, callback) {
            warn!(event = registration.event, error = ?e, "listener removal failed");
        }
    }
}

fn element_contacts(element: &HtmlElement, touches: &TouchList) -> Vec<Contact> {
    let rect = element.get_bounding_client_rect();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| {
            Contact::new(
                t.identifier(),
                f64::from(t.client_x()) - rect.left(),
                f64::from(t.client_y()) - rect.top(),
            )
        })
        .collect()
}

/// `performance.now()`, falling back to `Date.now()` outside a window.
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    #[must_use]
    pub fn new() -> Self {
        Self { performance: web_sys::window().and_then(|w| w.performance()) }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
