//! Binding recognizers to a platform surface.
//!
//! A [`Surface`] is anything that can register and unregister raw touch
//! listeners: a DOM element in the browser (`web` feature), or an in-memory
//! fake in tests. A [`TouchTarget`] is the recognizer side: it names the
//! phases it wants and handles each event.
//!
//! [`attach`] registers one listener per phase, each holding a shared handle
//! to the target, and returns an [`Attachment`]. Listeners are registered
//! exactly once per attachment; handler updates go through the target
//! ([`Attachment::set_handlers`]) and never re-register. Dropping or
//! detaching the attachment unregisters every listener synchronously and
//! releases the target's handlers.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::rc::Rc;

use tracing::{debug, warn};

use crate::clock::{Clock, default_clock};
use crate::config::GestureConfig;
use crate::engine::GestureEngine;
use crate::error::GestureError;
use crate::gesture::GestureHandlers;
use crate::input::{EventOutcome, TouchInput, TouchPhase};

/// Callback a surface invokes for each raw event of one phase.
pub type Listener = Box<dyn FnMut(&TouchInput) -> EventOutcome>;

/// Platform side: listener registration for one element.
pub trait Surface {
    /// Token returned by `listen`, handed back to `unlisten`.
    type Registration;

    /// Register `listener` for `phase`. The surface must honor
    /// [`EventOutcome::prevent_default`] where the platform allows it.
    fn listen(&self, phase: TouchPhase, listener: Listener) -> Result<Self::Registration, GestureError>;

    /// Remove a listener. Must be synchronous: no call reaches the listener afterwards.
    fn unlisten(&self, registration: Self::Registration);
}

/// Recognizer side: what an attachment drives.
pub trait TouchTarget {
    /// Phases to register listeners for.
    fn phases(&self) -> &'static [TouchPhase];

    fn handle(&self, input: &TouchInput) -> EventOutcome;

    /// Drop callbacks and state. Called once on detach.
    fn release(&self);
}

/// Options for [`attach_gestures`].
pub struct AttachOptions {
    pub config: GestureConfig,
    pub clock: Rc<dyn Clock>,
}

impl Default for AttachOptions {
    fn default() -> Self {
        Self { config: GestureConfig::default(), clock: default_clock() }
    }
}

impl AttachOptions {
    #[must_use]
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }
}

/// Live binding between a surface and a target. Detaches on drop.
pub struct Attachment<S: Surface, T: TouchTarget + 'static> {
    surface: S,
    target: Rc<T>,
    registrations: Vec<S::Registration>,
}

impl<S: Surface, T: TouchTarget + 'static> Attachment<S, T> {
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of listeners currently registered on the surface.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Unregister all listeners and release the target.
    pub fn detach(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.registrations.is_empty() {
            return;
        }
        let count = self.registrations.len();
        for registration in self.registrations.drain(..) {
            self.surface.unlisten(registration);
        }
        self.target.release();
        debug!(listeners = count, "detached from surface");
    }
}

impl<S: Surface> Attachment<S, GestureEngine> {
    /// Swap the gesture handlers without touching listener registration.
    pub fn set_handlers(&self, handlers: GestureHandlers) {
        self.target.set_handlers(handlers);
    }
}

impl<S: Surface, T: TouchTarget + 'static> Drop for Attachment<S, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Register `target` on `surface`.
///
/// An absent surface (not mounted yet) is not an error: nothing is registered
/// and `Ok(None)` is returned. If the platform refuses one of the listeners,
/// the ones already registered are removed before the error is returned.
pub fn attach<S: Surface, T: TouchTarget + 'static>(
    surface: Option<S>,
    target: T,
) -> Result<Option<Attachment<S, T>>, GestureError> {
    let Some(surface) = surface else {
        debug!("attach skipped: no surface");
        return Ok(None);
    };

    let target = Rc::new(target);
    let phases = target.phases();
    let mut registrations = Vec::with_capacity(phases.len());

    for &phase in phases {
        let listener_target = Rc::clone(&target);
        let listener: Listener = Box::new(move |input: &TouchInput| listener_target.handle(input));
        match surface.listen(phase, listener) {
            Ok(registration) => registrations.push(registration),
            Err(e) => {
                warn!(error = %e, "listener registration failed; rolling back attach");
                for registration in registrations.drain(..) {
                    surface.unlisten(registration);
                }
                target.release();
                return Err(e);
            }
        }
    }

    debug!(listeners = registrations.len(), "attached to surface");
    Ok(Some(Attachment { surface, target, registrations }))
}

/// Attach a [`GestureEngine`] built from `handlers` and `options`.
///
/// The config is validated before anything is registered.
pub fn attach_gestures<S: Surface>(
    surface: Option<S>,
    handlers: GestureHandlers,
    options: AttachOptions,
) -> Result<Option<Attachment<S, GestureEngine>>, GestureError> {
    let config = options.config.validate()?;
    attach(surface, GestureEngine::new(handlers, config, options.clock))
}
