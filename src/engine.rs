//! Gesture engine bound to one surface.
//!
//! `GestureEngine` wraps the clock-free [`GestureRecognizer`] with the two
//! things a live surface needs: a clock for tap timing and a mutable handler
//! slot. Handlers can be swapped at any time without touching listener
//! registration; the surface's listeners only ever hold the engine.
//!
//! The engine uses interior mutability because platform listeners call it
//! through a shared reference. The recognizer borrow ends before any handler
//! runs, so a handler may replace the handlers or detach the surface from
//! inside its own callback.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::clock::Clock;
use crate::config::GestureConfig;
use crate::gesture::GestureHandlers;
use crate::input::{EventOutcome, TouchInput, TouchPhase};
use crate::recognizer::{GestureRecognizer, GestureState};
use crate::surface::TouchTarget;

/// Replaceable callback record shared by the engines.
///
/// Callbacks run with the record taken out of the slot, so they may replace
/// it or release it re-entrantly. Once released the slot stays empty.
pub(crate) struct HandlerSlot<H> {
    slot: RefCell<Option<H>>,
    released: Cell<bool>,
}

impl<H> HandlerSlot<H> {
    pub(crate) fn new(handlers: H) -> Self {
        Self { slot: RefCell::new(Some(handlers)), released: Cell::new(false) }
    }

    pub(crate) fn replace(&self, handlers: H) {
        if !self.released.get() {
            *self.slot.borrow_mut() = Some(handlers);
        }
    }

    /// Drop the handlers. Returns `false` if already released.
    pub(crate) fn release(&self) -> bool {
        if self.released.replace(true) {
            return false;
        }
        self.slot.borrow_mut().take();
        true
    }

    pub(crate) fn is_released(&self) -> bool {
        self.released.get()
    }

    pub(crate) fn with(&self, f: impl FnOnce(&mut H)) {
        let Some(mut handlers) = self.slot.borrow_mut().take() else {
            return;
        };
        f(&mut handlers);

        if self.released.get() {
            return;
        }
        let mut slot = self.slot.borrow_mut();
        // Replaced during the callback: keep the replacement.
        if slot.is_none() {
            *slot = Some(handlers);
        }
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for HandlerSlot<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("slot", &self.slot)
            .field("released", &self.released.get())
            .finish()
    }
}

/// Recognizer, handler slot and clock for one attached surface.
pub struct GestureEngine {
    recognizer: RefCell<GestureRecognizer>,
    handlers: HandlerSlot<GestureHandlers>,
    clock: Rc<dyn Clock>,
}

impl GestureEngine {
    #[must_use]
    pub fn new(handlers: GestureHandlers, config: GestureConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            recognizer: RefCell::new(GestureRecognizer::new(config)),
            handlers: HandlerSlot::new(handlers),
            clock,
        }
    }

    /// Feed one platform event. Invokes at most one handler.
    pub fn handle(&self, input: &TouchInput) -> EventOutcome {
        if self.handlers.is_released() {
            return EventOutcome::default();
        }

        let now_ms = if input.phase == TouchPhase::End { self.clock.now_ms() } else { 0.0 };
        let recognized = self.recognizer.borrow_mut().handle(input, now_ms);

        if let Some(gesture) = recognized.gesture {
            self.handlers.with(|h| h.dispatch(gesture));
        }
        EventOutcome { prevent_default: recognized.prevent_default }
    }

    /// Replace the handler record. Takes effect from the next event.
    pub fn set_handlers(&self, handlers: GestureHandlers) {
        self.handlers.replace(handlers);
    }

    /// Drop the handlers and state. Later events are ignored.
    pub fn release(&self) {
        if !self.handlers.release() {
            return;
        }
        self.recognizer.borrow_mut().reset();
        debug!("gesture engine released");
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.handlers.is_released()
    }

    /// Snapshot of the recognizer state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.recognizer.borrow().state().clone()
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.recognizer.borrow().config()
    }
}

impl TouchTarget for GestureEngine {
    fn phases(&self) -> &'static [TouchPhase] {
        &[TouchPhase::Start, TouchPhase::Move, TouchPhase::End]
    }

    fn handle(&self, input: &TouchInput) -> EventOutcome {
        GestureEngine::handle(self, input)
    }

    fn release(&self) {
        GestureEngine::release(self);
    }
}

impl std::fmt::Debug for GestureEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureEngine")
            .field("recognizer", &self.recognizer)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
