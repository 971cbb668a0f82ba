#[cfg(feature = "wasm")]
use std::cell::RefCell;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod joystick;
pub mod player;
pub mod pose;
pub mod session;
pub mod source;

#[cfg(feature = "wasm")]
use config::MovementConfig;
#[cfg(feature = "wasm")]
use glam::Vec2;
#[cfg(feature = "wasm")]
use input::Action;
#[cfg(feature = "wasm")]
use pose::FramePose;
#[cfg(feature = "wasm")]
use session::Session;
#[cfg(feature = "wasm")]
use source::InputMode;

#[cfg(feature = "wasm")]
thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(feature = "wasm")]
fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    SESSION.with(|s| s.borrow_mut().as_mut().map(f))
}

/// Calls a JS `(pose: Float32Array) => void` with the packed [`FramePose`].
/// Must run with `SESSION` released: the callback may call back into any
/// export.
#[cfg(feature = "wasm")]
fn present(render: &js_sys::Function, pose: &FramePose) {
    let floats = js_sys::Float32Array::from(&pose.as_floats()[..]);
    if let Err(err) = render.call1(&JsValue::NULL, &floats) {
        log::error!("render callback threw: {err:?}");
    }
}

/// Creates a fresh session for `mode` and starts it. `config` is an optional
/// partial `MovementConfig` object; `undefined` uses the defaults.
///
/// Returns whether the host should show the on-screen controls.
///
/// # Errors
///
/// Fails if `config` does not decode or does not validate. The previous
/// session, if any, is left untouched.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn start_session(mode: InputMode, config: JsValue) -> Result<bool, JsError> {
    let config: MovementConfig = if config.is_undefined() || config.is_null() {
        MovementConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .inspect_err(|e| log::warn!("rejected session config: {e}"))?
    };
    let mut session = Session::new(mode, config)
        .inspect_err(|e| log::warn!("rejected session config: {e}"))?;
    session.start();
    let virtual_controls = session.uses_virtual_controls();
    SESSION.with(|s| *s.borrow_mut() = Some(session));
    Ok(virtual_controls)
}

/// Restart the current session after [`end_session`], keeping the player's
/// pose. Returns `false` if no session exists.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
#[must_use]
pub fn resume_session() -> bool {
    with_session(Session::start).is_some()
}

/// Stop the frame loop. The next [`frame`] call returns `false`.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn end_session() {
    with_session(Session::end);
}

/// Advances one frame at timestamp `now` (seconds) and calls `render` with
/// the packed pose. Returns whether to request another animation frame.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
#[must_use]
pub fn frame(now: f64, render: &js_sys::Function) -> bool {
    let Some(pose) = with_session(|s| s.advance_frame(now)).flatten() else {
        return false;
    };
    present(render, &pose);
    true
}

/// Handle a key-down event. `key` is the JS `event.key` value.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_key_down(key: &str) {
    with_session(|s| s.on_key(key, true));
}

/// Handle a key-up event.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_key_up(key: &str) {
    with_session(|s| s.on_key(key, false));
}

/// Press an on-screen action button.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn begin_action(action: Action) {
    with_session(|s| s.on_discrete_input(action, true));
}

/// Release an on-screen action button.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn end_action(action: Action) {
    with_session(|s| s.on_discrete_input(action, false));
}

/// Continuous move vector, each axis in [-1, 1], z up.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_move(x: f32, z: f32) {
    with_session(|s| s.on_continuous_move(x, z));
}

/// The jump button was pressed.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_jump() {
    with_session(Session::on_jump_event);
}

/// Rotate the player by a pre-scaled yaw delta in radians.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_yaw_delta(delta: f32) {
    with_session(|s| s.on_yaw_delta(delta));
}

/// Handle a mouse move. `dx` is `event.movementX` in pixels.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_pointer_move(dx: f32) {
    with_session(|s| s.on_pointer_move(dx));
}

/// First touch went down on the camera area at screen `x`.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_touch_start(x: f32) {
    with_session(|s| s.on_touch_start(x));
}

/// First touch moved to screen `x`.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_touch_move(x: f32) {
    with_session(|s| s.on_touch_move(x));
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn handle_touch_end() {
    with_session(Session::on_touch_end);
}

/// Virtual stick pressed; `(cx, cy)` is the element's current center.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn stick_press(cx: f32, cy: f32) {
    with_session(|s| s.on_stick_press(Vec2::new(cx, cy)));
}

/// Pointer moved over the stick. Returns the knob offset `[x, y]` in pixels
/// while dragging.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
#[must_use]
pub fn stick_drag(px: f32, py: f32) -> Option<Vec<f32>> {
    with_session(|s| s.on_stick_drag(Vec2::new(px, py)))
        .flatten()
        .map(|knob| knob.to_array().to_vec())
}

/// Pointer released or left the stick.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn stick_release() {
    with_session(Session::on_stick_release);
}

/// The stick element moved (window resize).
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn stick_recenter(cx: f32, cy: f32) {
    with_session(|s| s.on_stick_recenter(Vec2::new(cx, cy)));
}
