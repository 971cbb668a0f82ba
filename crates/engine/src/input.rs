use glam::Vec2;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Intent magnitudes at or below this are treated as "no movement".
const DEAD_ZONE: f32 = 0.001;

/// Discrete player actions. Exported to TypeScript via `#[wasm_bindgen]` so
/// on-screen buttons can drive the same state as the keyboard.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp = 0,
    MoveDown = 1,
    MoveLeft = 2,
    MoveRight = 3,
    Jump = 4,
}

/// Map a JS `KeyboardEvent.key` value to an [`Action`]. Case-insensitive.
#[must_use]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" => Some(Action::MoveUp),
        "arrowdown" => Some(Action::MoveDown),
        "arrowleft" => Some(Action::MoveLeft),
        "arrowright" => Some(Action::MoveRight),
        " " | "spacebar" => Some(Action::Jump),
        _ => None,
    }
}

/// Coerce NaN and infinities to zero.
#[inline]
#[must_use]
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Normalized movement direction for one frame: `x` strafes right, `z`
/// pushes "up" on the stick (forward). Length is exactly 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementIntent {
    pub x: f32,
    pub z: f32,
}

impl MovementIntent {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    /// Normalize a raw combined axis pair, sanitizing non-finite components.
    #[must_use]
    pub fn from_raw(raw_x: f32, raw_z: f32) -> Self {
        let x = sanitize(raw_x);
        let z = sanitize(raw_z);
        let magnitude = x.hypot(z);
        if magnitude > DEAD_ZONE {
            Self {
                x: x / magnitude,
                z: z / magnitude,
            }
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.z)
    }
}

/// Held buttons plus the latest joystick vector.
///
/// Discrete and continuous channels are summed, not overridden: holding
/// right while the stick points left cancels out.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One-shot jump from a direct jump event; cleared by the next frame.
    jump_pulse: bool,
    /// Stick vector, `x` strafe and `y` depth. Magnitude clamped to 1 by
    /// the producer.
    joystick: Vec2,
}

impl InputState {
    /// Handle a key down event. `key` is the JS `KeyboardEvent.key` value.
    pub fn key_down(&mut self, key: &str) {
        if let Some(action) = action_for_key(key) {
            self.begin_action(action);
        }
    }

    /// Handle a key up event.
    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = action_for_key(key) {
            self.end_action(action);
        }
    }

    /// Activate an action.
    pub fn begin_action(&mut self, action: Action) {
        self.set_action(action, true);
    }

    /// Deactivate an action.
    pub fn end_action(&mut self, action: Action) {
        self.set_action(action, false);
    }

    fn set_action(&mut self, action: Action, active: bool) {
        match action {
            Action::MoveUp => self.up = active,
            Action::MoveDown => self.down = active,
            Action::MoveLeft => self.left = active,
            Action::MoveRight => self.right = active,
            Action::Jump => self.jump = active,
        }
    }

    /// Store the continuous stick vector. Non-finite components become 0.
    pub fn set_joystick(&mut self, x: f32, z: f32) {
        self.joystick = Vec2::new(sanitize(x), sanitize(z));
    }

    #[must_use]
    pub fn joystick(&self) -> Vec2 {
        self.joystick
    }

    /// Latch a one-shot jump (the on-screen jump button).
    pub fn press_jump(&mut self) {
        self.jump_pulse = true;
    }

    /// Whether the held jump key or a latched jump pulse is active.
    #[must_use]
    pub fn jump_requested(&self) -> bool {
        self.jump || self.jump_pulse
    }

    /// Clear the jump pulse after a frame has seen it, fired or not.
    pub fn consume_jump_pulse(&mut self) {
        self.jump_pulse = false;
    }

    /// Combine keys and stick into this frame's normalized intent.
    #[must_use]
    pub fn intent(&self) -> MovementIntent {
        let raw_x = axis(self.right, self.left) + self.joystick.x;
        let raw_z = axis(self.up, self.down) + self.joystick.y;
        MovementIntent::from_raw(raw_x, raw_z)
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}
