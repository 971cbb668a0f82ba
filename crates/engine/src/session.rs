use glam::Vec2;

use crate::camera::CameraState;
use crate::clock::FrameClock;
use crate::config::MovementConfig;
use crate::error::ConfigError;
use crate::input::{Action, InputState};
use crate::joystick::VirtualStick;
use crate::player::{PlayerState, clamp_step, integrate};
use crate::pose::{CameraPose, FramePose, PlayerPose};
use crate::source::{InputMode, InputSource};

/// Receives one pose write per simulated frame. Implemented by the host's
/// renderer bridge.
pub trait Presenter {
    fn render_frame(&mut self, player: &PlayerPose, camera: &CameraPose);
}

/// All per-session state: player, camera, input, frame clock, and the
/// device-specific look source.
///
/// Input handlers only touch input state, except look gestures which turn
/// the player immediately. Everything committed before a frame tick is seen
/// by that tick.
pub struct Session {
    config: MovementConfig,
    player: PlayerState,
    camera: CameraState,
    input: InputState,
    stick: VirtualStick,
    source: Box<dyn InputSource>,
    clock: FrameClock,
    active: bool,
}

impl Session {
    /// Create an inactive session after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config field is unusable.
    pub fn new(mode: InputMode, config: MovementConfig) -> Result<Self, ConfigError> {
        Ok(Self::build(mode, config.validate()?))
    }

    /// Inactive session with the stock tuning.
    #[must_use]
    pub fn with_defaults(mode: InputMode) -> Self {
        Self::build(mode, MovementConfig::default())
    }

    fn build(mode: InputMode, config: MovementConfig) -> Self {
        Self {
            config,
            player: PlayerState::spawn(&config),
            camera: CameraState::spawn(&config),
            input: InputState::default(),
            stick: VirtualStick::default(),
            source: mode.source(),
            clock: FrameClock::default(),
            active: false,
        }
    }

    /// Begin (or resume) running. Held input is released and the frame
    /// clock restarts, so the first tick integrates a zero step. The player
    /// and camera keep their poses.
    pub fn start(&mut self) {
        self.input.reset();
        self.stick.release();
        self.clock.reset();
        self.active = true;
        log::info!(
            "session started ({:?} input, player at {:?})",
            self.source.mode(),
            self.player.position
        );
    }

    /// Stop running. Further ticks return `false` until [`Session::start`].
    pub fn end(&mut self) {
        if self.active {
            log::info!("session ended, player at {:?}", self.player.position);
        }
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.source.mode()
    }

    /// Whether the host should show the on-screen joystick and buttons.
    #[must_use]
    pub fn uses_virtual_controls(&self) -> bool {
        self.source.uses_virtual_controls()
    }

    /// A discrete action was pressed or released.
    pub fn on_discrete_input(&mut self, action: Action, pressed: bool) {
        if !self.active {
            return;
        }
        if pressed {
            self.input.begin_action(action);
        } else {
            self.input.end_action(action);
        }
    }

    /// A keyboard key changed state. `key` is `KeyboardEvent.key`.
    pub fn on_key(&mut self, key: &str, pressed: bool) {
        if !self.active {
            return;
        }
        if pressed {
            self.input.key_down(key);
        } else {
            self.input.key_up(key);
        }
    }

    /// Continuous movement vector from the host, each axis in `[-1, 1]`.
    pub fn on_continuous_move(&mut self, x: f32, z: f32) {
        if !self.active {
            return;
        }
        self.input.set_joystick(x, z);
    }

    /// The virtual stick was pressed; `center` is its current screen center.
    pub fn on_stick_press(&mut self, center: Vec2) {
        if !self.active {
            return;
        }
        self.stick.press(center);
    }

    /// The pointer moved over the virtual stick. Returns the knob offset in
    /// pixels while a drag is in progress.
    pub fn on_stick_drag(&mut self, pointer: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let vector = self.stick.drag(pointer)?;
        self.input.set_joystick(vector.x, vector.y);
        Some(self.stick.knob_offset(vector))
    }

    /// The pointer left or was released from the virtual stick.
    pub fn on_stick_release(&mut self) {
        if !self.active {
            return;
        }
        let vector = self.stick.release();
        self.input.set_joystick(vector.x, vector.y);
    }

    /// The stick element moved on screen. Accepted while inactive, since the
    /// layout can change during a pause.
    pub fn on_stick_recenter(&mut self, center: Vec2) {
        self.stick.recenter(center);
    }

    /// Turn the player by `delta` radians right away.
    pub fn on_yaw_delta(&mut self, delta: f32) {
        if !self.active {
            return;
        }
        self.player.apply_yaw_delta(delta);
    }

    /// Relative mouse motion in pixels.
    pub fn on_pointer_move(&mut self, dx: f32) {
        if !self.active {
            return;
        }
        if let Some(delta) = self.source.pointer_move(dx, self.config.yaw_sensitivity) {
            self.player.apply_yaw_delta(delta);
        }
    }

    pub fn on_touch_start(&mut self, x: f32) {
        if !self.active {
            return;
        }
        self.source.touch_start(x);
    }

    pub fn on_touch_move(&mut self, x: f32) {
        if !self.active {
            return;
        }
        if let Some(delta) = self.source.touch_move(x, self.config.yaw_sensitivity) {
            self.player.apply_yaw_delta(delta);
        }
    }

    pub fn on_touch_end(&mut self) {
        if !self.active {
            return;
        }
        self.source.touch_end();
    }

    /// A direct jump event (the on-screen jump button). Honoured on the next
    /// frame if the player is grounded then.
    pub fn on_jump_event(&mut self) {
        if !self.active {
            return;
        }
        self.input.press_jump();
    }

    /// Advance player then camera by `dt` seconds and return the new poses.
    pub fn step(&mut self, dt: f32) -> FramePose {
        let dt = clamp_step(dt, self.config.max_step_time);
        let intent = self.input.intent();
        let jump = self.input.jump_requested();
        self.input.consume_jump_pulse();

        self.player = integrate(self.player, intent, jump, dt, &self.config);

        let smoothing = self
            .config
            .smoothing_mode
            .factor(self.config.camera_smoothing, dt);
        self.camera.follow(&self.player, smoothing, &self.config);

        FramePose::new(
            &PlayerPose::from(&self.player),
            &CameraPose::new(&self.camera, &self.player),
        )
    }

    /// Measure the step since the last tick at `now` (seconds) and run it.
    /// `None` while the session is inactive.
    pub fn advance_frame(&mut self, now: f64) -> Option<FramePose> {
        if !self.active {
            return None;
        }
        let dt = self.clock.tick(now, self.config.max_step_time);
        Some(self.step(dt))
    }

    /// Frame callback. `now` is in seconds. Runs one step and hands the
    /// result to `presenter`. Returns whether the host should schedule
    /// another tick.
    pub fn on_frame_tick(&mut self, now: f64, presenter: &mut dyn Presenter) -> bool {
        let Some(pose) = self.advance_frame(now) else {
            return false;
        };
        presenter.render_frame(&pose.player(), &pose.camera());
        true
    }
}
