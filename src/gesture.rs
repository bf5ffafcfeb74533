//! Recognized gestures and the handler record that receives them.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::Serialize;

/// A semantically classified interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// Two contacts moved together; delta of the first contact since the previous event.
    Pan { dx: f64, dy: f64 },
    /// Two-contact distance changed. `scale` is relative to the previous pinch
    /// distance; `scale == 1.0` on touch-down announces the baseline.
    Pinch { distance: f64, scale: f64 },
    /// A single contact was lifted near where it went down.
    Tap,
    /// A second tap landed inside the double-tap window.
    DoubleTap,
}

type PanFn = Box<dyn FnMut(f64, f64)>;
type PinchFn = Box<dyn FnMut(f64, f64)>;
type TapFn = Box<dyn FnMut()>;

/// Optional callbacks, one per gesture. Missing callbacks are skipped silently.
#[derive(Default)]
pub struct GestureHandlers {
    on_pan: Option<PanFn>,
    on_pinch: Option<PinchFn>,
    on_tap: Option<TapFn>,
    on_double_tap: Option<TapFn>,
}

impl GestureHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `f(delta_x, delta_y)`
    #[must_use]
    pub fn on_pan(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_pan = Some(Box::new(f));
        self
    }

    /// `f(distance, scale)`
    #[must_use]
    pub fn on_pinch(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_pinch = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_tap(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_double_tap(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_double_tap = Some(Box::new(f));
        self
    }

    /// Invoke the callback matching `gesture`, if one is registered.
    pub fn dispatch(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Pan { dx, dy } => {
                if let Some(f) = self.on_pan.as_mut() {
                    f(dx, dy);
                }
            }
            Gesture::Pinch { distance, scale } => {
                if let Some(f) = self.on_pinch.as_mut() {
                    f(distance, scale);
                }
            }
            Gesture::Tap => {
                if let Some(f) = self.on_tap.as_mut() {
                    f();
                }
            }
            Gesture::DoubleTap => {
                if let Some(f) = self.on_double_tap.as_mut() {
                    f();
                }
            }
        }
    }
}

impl std::fmt::Debug for GestureHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureHandlers")
            .field("on_pan", &self.on_pan.is_some())
            .field("on_pinch", &self.on_pinch.is_some())
            .field("on_tap", &self.on_tap.is_some())
            .field("on_double_tap", &self.on_double_tap.is_some())
            .finish()
    }
}
