#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::input::sanitize;

/// Device family chosen once at session start. Exported to TypeScript via
/// `#[wasm_bindgen]`; the host decides which one applies.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keyboard plus mouse-look.
    Pointer = 0,
    /// Virtual joystick, jump button, and touch-drag camera.
    Touch = 1,
}

impl InputMode {
    /// Build the look-input source for this mode.
    #[must_use]
    pub fn source(self) -> Box<dyn InputSource> {
        match self {
            Self::Pointer => Box::new(PointerSource),
            Self::Touch => Box::new(TouchSource::default()),
        }
    }
}

/// Turns device-specific look gestures into yaw deltas (radians).
///
/// Methods a device does not support keep their default no-op, so the
/// session can forward every event without checking the mode.
pub trait InputSource {
    fn mode(&self) -> InputMode;

    /// Whether the host should show the joystick, jump button and touch
    /// camera area.
    fn uses_virtual_controls(&self) -> bool {
        false
    }

    /// Relative mouse motion in pixels (`MouseEvent.movementX`).
    fn pointer_move(&mut self, _dx: f32, _sensitivity: f32) -> Option<f32> {
        None
    }

    /// A finger went down on the camera area at screen `x`.
    fn touch_start(&mut self, _x: f32) {}

    /// The finger moved to screen `x`.
    fn touch_move(&mut self, _x: f32, _sensitivity: f32) -> Option<f32> {
        None
    }

    fn touch_end(&mut self) {}
}

/// Desktop: every mouse movement turns the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSource;

impl InputSource for PointerSource {
    fn mode(&self) -> InputMode {
        InputMode::Pointer
    }

    fn pointer_move(&mut self, dx: f32, sensitivity: f32) -> Option<f32> {
        Some(-sanitize(dx) * sensitivity)
    }
}

/// Mobile: dragging across the camera area turns the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchSource {
    rotating: bool,
    last_x: f32,
}

impl InputSource for TouchSource {
    fn mode(&self) -> InputMode {
        InputMode::Touch
    }

    fn uses_virtual_controls(&self) -> bool {
        true
    }

    fn touch_start(&mut self, x: f32) {
        self.rotating = true;
        self.last_x = sanitize(x);
    }

    fn touch_move(&mut self, x: f32, sensitivity: f32) -> Option<f32> {
        if !self.rotating {
            return None;
        }
        let x = sanitize(x);
        let delta = x - self.last_x;
        self.last_x = x;
        Some(-delta * sensitivity)
    }

    fn touch_end(&mut self) {
        self.rotating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENS: f32 = 0.003;

    #[test]
    fn mode_round_trips_through_source() {
        assert_eq!(InputMode::Pointer.source().mode(), InputMode::Pointer);
        assert_eq!(InputMode::Touch.source().mode(), InputMode::Touch);
    }

    #[test]
    fn only_touch_uses_virtual_controls() {
        assert!(!InputMode::Pointer.source().uses_virtual_controls());
        assert!(InputMode::Touch.source().uses_virtual_controls());
    }

    #[test]
    fn pointer_move_turns_left_for_positive_dx() {
        let mut source = PointerSource;
        let delta = source.pointer_move(100.0, SENS).expect("pointer handles mouse");
        assert!((delta + 0.3).abs() < 1e-6);
    }

    #[test]
    fn pointer_move_sanitizes() {
        let mut source = PointerSource;
        let delta = source.pointer_move(f32::NAN, SENS).expect("pointer handles mouse");
        assert!(delta.abs() < 1e-9);
    }

    #[test]
    fn pointer_ignores_touch() {
        let mut source = PointerSource;
        source.touch_start(10.0);
        assert!(source.touch_move(60.0, SENS).is_none());
    }

    #[test]
    fn touch_ignores_mouse() {
        let mut source = TouchSource::default();
        assert!(source.pointer_move(100.0, SENS).is_none());
    }

    #[test]
    fn touch_drag_accumulates_relative_deltas() {
        let mut source = TouchSource::default();
        assert!(source.touch_move(50.0, SENS).is_none(), "no drag before start");

        source.touch_start(100.0);
        let first = source.touch_move(110.0, SENS).expect("rotating");
        assert!((first + 0.03).abs() < 1e-6);
        let second = source.touch_move(90.0, SENS).expect("rotating");
        assert!((second - 0.06).abs() < 1e-6);

        source.touch_end();
        assert!(source.touch_move(200.0, SENS).is_none());
    }
}
