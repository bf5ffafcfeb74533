//! Injectable monotonic clock.
//!
//! The tap recognizer reads the time once per contact-end. Hosts pass a
//! [`Clock`] so tests can drive time explicitly with [`ManualClock`].

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::rc::Rc;

/// Source of monotonic timestamps in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Process-monotonic clock backed by `std::time::Instant`.
///
/// Not usable on `wasm32-unknown-unknown`; browser builds use
/// `web::PerformanceClock` instead.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// The platform's real clock.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[must_use]
pub fn default_clock() -> Rc<dyn Clock> {
    Rc::new(crate::web::PerformanceClock::new())
}

/// The platform's real clock.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
#[must_use]
pub fn default_clock() -> Rc<dyn Clock> {
    Rc::new(SystemClock::new())
}
