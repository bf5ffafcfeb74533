//! In-memory [`Surface`] for driving recognizers without a platform.
//!
//! Clones share the same listener table, so a test can hand one clone to
//! [`crate::surface::attach`] and keep another to dispatch events.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::GestureError;
use crate::input::{Contact, EventOutcome, TouchInput, TouchPhase};
use crate::surface::{Listener, Surface};

type SharedListener = Rc<RefCell<Listener>>;

#[derive(Default)]
struct Table {
    next_id: u64,
    listeners: Vec<(u64, TouchPhase, SharedListener)>,
    registrations_made: usize,
    refuse: Option<TouchPhase>,
    scroll_top: f64,
}

#[derive(Clone, Default)]
pub struct MemorySurface {
    table: Rc<RefCell<Table>>,
}

/// Registration token for [`MemorySurface`].
#[derive(Debug)]
pub struct MemoryRegistration(u64);

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `listen` fail for `phase`.
    pub fn refuse(&self, phase: TouchPhase) {
        self.table.borrow_mut().refuse = Some(phase);
    }

    /// Scroll offset reported with subsequent events.
    pub fn set_scroll_top(&self, scroll_top: f64) {
        self.table.borrow_mut().scroll_top = scroll_top;
    }

    /// Deliver one event to every listener registered for `phase`.
    ///
    /// Returns the combined outcome: prevented if any listener prevented.
    pub fn dispatch(&self, phase: TouchPhase, contacts: Vec<Contact>) -> EventOutcome {
        let (input, listeners) = {
            let table = self.table.borrow();
            let input = TouchInput::new(phase, contacts).with_scroll_top(table.scroll_top);
            let listeners: Vec<SharedListener> = table
                .listeners
                .iter()
                .filter(|(_, p, _)| *p == phase)
                .map(|(_, _, l)| Rc::clone(l))
                .collect();
            (input, listeners)
        };

        let mut outcome = EventOutcome::default();
        for listener in listeners {
            let mut listener = listener.borrow_mut();
            let result = (*listener)(&input);
            outcome.prevent_default |= result.prevent_default;
        }
        outcome
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    #[must_use]
    pub fn listens_to(&self, phase: TouchPhase) -> bool {
        self.table.borrow().listeners.iter().any(|(_, p, _)| *p == phase)
    }

    /// Total `listen` calls that succeeded over the surface's lifetime.
    #[must_use]
    pub fn registrations_made(&self) -> usize {
        self.table.borrow().registrations_made
    }
}

impl Surface for MemorySurface {
    type Registration = MemoryRegistration;

    fn listen(&self, phase: TouchPhase, listener: Listener) -> Result<MemoryRegistration, GestureError> {
        let mut table = self.table.borrow_mut();
        if table.refuse == Some(phase) {
            return Err(GestureError::Listener { event: phase.event_name(), message: "refused".into() });
        }
        let id = table.next_id;
        table.next_id += 1;
        table.registrations_made += 1;
        table.listeners.push((id, phase, Rc::new(RefCell::new(listener))));
        Ok(MemoryRegistration(id))
    }

    fn unlisten(&self, registration: MemoryRegistration) {
        self.table.borrow_mut().listeners.retain(|(id, _, _)| *id != registration.0);
    }
}
