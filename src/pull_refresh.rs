//! Pull-to-refresh for scrollable containers.
//!
//! A single-finger drag that starts while the container is scrolled to the
//! top and moves downward "pulls" the content. Finger travel is divided by a
//! resistance factor and capped at 1.5x the threshold. Releasing past the
//! threshold starts a refresh; the host reports completion with
//! [`PullToRefreshEngine::complete_refresh`], since refreshing is usually
//! asynchronous. While refreshing, all touch input is ignored.

#[cfg(test)]
#[path = "pull_refresh_test.rs"]
mod pull_refresh_test;

use std::cell::RefCell;

use serde::Serialize;
use tracing::debug;

use crate::config::PullToRefreshConfig;
use crate::consts::PULL_REFRESH_MAX_FACTOR;
use crate::engine::HandlerSlot;
use crate::error::GestureError;
use crate::input::{Contact, EventOutcome, TouchInput, TouchPhase};
use crate::surface::{Attachment, Surface, TouchTarget, attach};

/// Observable pull state, for driving an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PullStatus {
    pub is_pulling: bool,
    /// Indicator offset after resistance, in surface units.
    pub pull_distance: f64,
    pub is_refreshing: bool,
}

/// Result of feeding one event to [`PullToRefresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PullOutcome {
    /// The move was consumed as a pull; the platform must not scroll.
    pub prevent_default: bool,
    /// Release crossed the threshold; the host should start refreshing.
    pub refresh: bool,
}

/// Clock-free pull-to-refresh state machine.
#[derive(Debug, Clone, Default)]
pub struct PullToRefresh {
    config: PullToRefreshConfig,
    start_y: Option<f64>,
    status: PullStatus,
}

impl PullToRefresh {
    #[must_use]
    pub fn new(config: PullToRefreshConfig) -> Self {
        Self { config, start_y: None, status: PullStatus::default() }
    }

    #[must_use]
    pub fn status(&self) -> PullStatus {
        self.status
    }

    pub fn handle(&mut self, input: &TouchInput) -> PullOutcome {
        match input.phase {
            TouchPhase::Start => {
                self.touch_start(&input.contacts, input.scroll_top);
                PullOutcome::default()
            }
            TouchPhase::Move => PullOutcome {
                prevent_default: self.touch_move(&input.contacts, input.scroll_top),
                refresh: false,
            },
            TouchPhase::End | TouchPhase::Cancel => PullOutcome { prevent_default: false, refresh: self.touch_end() },
        }
    }

    pub fn touch_start(&mut self, contacts: &[Contact], scroll_top: f64) {
        if self.status.is_refreshing {
            return;
        }
        if at_top(scroll_top) {
            self.start_y = contacts.first().map(|c| c.y);
        }
    }

    /// Returns `true` when the move was consumed as a pull.
    pub fn touch_move(&mut self, contacts: &[Contact], scroll_top: f64) -> bool {
        if self.status.is_refreshing {
            return false;
        }
        let (Some(start_y), Some(lead)) = (self.start_y, contacts.first()) else {
            return false;
        };

        let delta = lead.y - start_y;
        if delta <= 0.0 || !at_top(scroll_top) {
            return false;
        }

        let cap = self.config.threshold * PULL_REFRESH_MAX_FACTOR;
        self.status.is_pulling = true;
        self.status.pull_distance = (delta / self.config.resistance).min(cap);
        true
    }

    /// Returns `true` when the release should start a refresh.
    pub fn touch_end(&mut self) -> bool {
        if self.status.is_refreshing || self.start_y.take().is_none() {
            return false;
        }

        if self.status.pull_distance >= self.config.threshold {
            self.status.is_refreshing = true;
            self.status.pull_distance = self.config.threshold;
            true
        } else {
            self.status.is_pulling = false;
            self.status.pull_distance = 0.0;
            false
        }
    }

    /// The host finished refreshing (successfully or not).
    pub fn complete_refresh(&mut self) {
        self.start_y = None;
        self.status = PullStatus::default();
    }
}

fn at_top(scroll_top: f64) -> bool {
    // iOS rubber-banding reports negative offsets while at the top.
    scroll_top <= 0.0
}

type RefreshFn = Box<dyn FnMut()>;
type StatusFn = Box<dyn FnMut(PullStatus)>;

/// Callbacks for [`PullToRefreshEngine`].
#[derive(Default)]
pub struct PullHandlers {
    on_refresh: Option<RefreshFn>,
    on_status: Option<StatusFn>,
}

impl PullHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per triggered refresh. Report completion with `complete_refresh`.
    #[must_use]
    pub fn on_refresh(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_refresh = Some(Box::new(f));
        self
    }

    /// Called whenever [`PullStatus`] changes.
    #[must_use]
    pub fn on_status(mut self, f: impl FnMut(PullStatus) + 'static) -> Self {
        self.on_status = Some(Box::new(f));
        self
    }

    fn notify(&mut self, status: Option<PullStatus>, refresh: bool) {
        if let (Some(status), Some(f)) = (status, self.on_status.as_mut()) {
            f(status);
        }
        if refresh {
            if let Some(f) = self.on_refresh.as_mut() {
                f();
            }
        }
    }
}

impl std::fmt::Debug for PullHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullHandlers")
            .field("on_refresh", &self.on_refresh.is_some())
            .field("on_status", &self.on_status.is_some())
            .finish()
    }
}

/// Pull-to-refresh bound to one surface.
///
/// Wraps [`PullToRefresh`] with a replaceable [`PullHandlers`] record. Status
/// callbacks fire only when [`PullStatus`] actually changes.
#[derive(Debug)]
pub struct PullToRefreshEngine {
    recognizer: RefCell<PullToRefresh>,
    handlers: HandlerSlot<PullHandlers>,
}

impl PullToRefreshEngine {
    #[must_use]
    pub fn new(handlers: PullHandlers, config: PullToRefreshConfig) -> Self {
        Self { recognizer: RefCell::new(PullToRefresh::new(config)), handlers: HandlerSlot::new(handlers) }
    }

    pub fn handle(&self, input: &TouchInput) -> EventOutcome {
        if self.handlers.is_released() {
            return EventOutcome::default();
        }

        let (before, outcome, after) = {
            let mut recognizer = self.recognizer.borrow_mut();
            let before = recognizer.status();
            let outcome = recognizer.handle(input);
            (before, outcome, recognizer.status())
        };

        if outcome.refresh {
            debug!(pull_distance = after.pull_distance, "pull-to-refresh triggered");
        }
        let changed = (before != after).then_some(after);
        if changed.is_some() || outcome.refresh {
            self.handlers.with(|h| h.notify(changed, outcome.refresh));
        }
        EventOutcome { prevent_default: outcome.prevent_default }
    }

    /// Report that the refresh started by `on_refresh` has finished.
    pub fn complete_refresh(&self) {
        let (before, after) = {
            let mut recognizer = self.recognizer.borrow_mut();
            let before = recognizer.status();
            recognizer.complete_refresh();
            (before, recognizer.status())
        };
        if before != after {
            self.handlers.with(|h| h.notify(Some(after), false));
        }
    }

    pub fn set_handlers(&self, handlers: PullHandlers) {
        self.handlers.replace(handlers);
    }

    #[must_use]
    pub fn status(&self) -> PullStatus {
        self.recognizer.borrow().status()
    }

    pub fn release(&self) {
        if self.handlers.release() {
            self.recognizer.borrow_mut().complete_refresh();
            debug!("pull-to-refresh released");
        }
    }
}

impl TouchTarget for PullToRefreshEngine {
    fn phases(&self) -> &'static [TouchPhase] {
        &[TouchPhase::Start, TouchPhase::Move, TouchPhase::End, TouchPhase::Cancel]
    }

    fn handle(&self, input: &TouchInput) -> EventOutcome {
        PullToRefreshEngine::handle(self, input)
    }

    fn release(&self) {
        PullToRefreshEngine::release(self);
    }
}

/// Attach pull-to-refresh to a scrollable surface.
pub fn attach_pull_to_refresh<S: Surface>(
    surface: Option<S>,
    handlers: PullHandlers,
    config: PullToRefreshConfig,
) -> Result<Option<Attachment<S, PullToRefreshEngine>>, GestureError> {
    let config = config.validate()?;
    attach(surface, PullToRefreshEngine::new(handlers, config))
}
