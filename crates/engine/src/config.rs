use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Horizontal walk speed in world units per second.
pub const PLAYER_SPEED: f32 = 5.0;
/// Downward acceleration applied while airborne.
pub const GRAVITY: f32 = 9.8;
/// Upward velocity given by a jump.
pub const JUMP_POWER: f32 = 6.0;
/// Half-extent of the square play area on X and Z.
pub const WORLD_BOUNDS: f32 = 10.0;
/// How far the camera trails the player along `forward(yaw)`.
pub const CAMERA_DISTANCE: f32 = 3.0;
/// Camera height above the player's origin.
pub const CAMERA_HEIGHT: f32 = 1.5;
/// Per-frame fraction of the remaining distance the camera closes.
pub const CAMERA_SMOOTHING: f32 = 0.5;
/// Radians of yaw per pixel of mouse or touch drag.
pub const YAW_SENSITIVITY: f32 = 0.003;
/// Longest step the integrator accepts, in seconds.
pub const MAX_STEP_TIME: f32 = 0.1;
/// Resting height of the player's origin (half the box height).
pub const GROUND_LEVEL: f32 = 0.8;

/// How the camera smoothing factor relates to frame time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SmoothingMode {
    /// Apply the configured factor once per frame, whatever the frame time.
    /// Camera lag therefore depends on frame rate.
    #[default]
    PerFrame,
    /// Treat the factor as calibrated for `reference_hz` and rescale it by
    /// the actual step: `1 - (1 - s)^(dt * reference_hz)`.
    FrameRateIndependent {
        #[serde(rename = "referenceHz")]
        reference_hz: f32,
    },
}

impl SmoothingMode {
    /// Effective interpolation fraction for a step of `dt` seconds.
    #[must_use]
    pub fn factor(self, base: f32, dt: f32) -> f32 {
        match self {
            Self::PerFrame => base,
            Self::FrameRateIndependent { reference_hz } => {
                1.0 - (1.0 - base).powf(dt * reference_hz)
            }
        }
    }
}

/// Session tuning. Fixed from `start` until `end`.
///
/// Field names serialize in camelCase so a JS host can pass a partial object
/// (`{ speed: 7 }`); anything missing takes its default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovementConfig {
    pub speed: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub world_bounds: f32,
    pub camera_distance: f32,
    pub camera_height: f32,
    pub camera_smoothing: f32,
    pub smoothing_mode: SmoothingMode,
    pub yaw_sensitivity: f32,
    pub max_step_time: f32,
    pub ground_level: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            world_bounds: WORLD_BOUNDS,
            camera_distance: CAMERA_DISTANCE,
            camera_height: CAMERA_HEIGHT,
            camera_smoothing: CAMERA_SMOOTHING,
            smoothing_mode: SmoothingMode::PerFrame,
            yaw_sensitivity: YAW_SENSITIVITY,
            max_step_time: MAX_STEP_TIME,
            ground_level: GROUND_LEVEL,
        }
    }
}

impl MovementConfig {
    /// Check every field and return the config unchanged if it is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first field that is non-finite, has
    /// the wrong sign, or (for smoothing) falls outside `(0, 1]`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let fields = [
            ("speed", self.speed),
            ("gravity", self.gravity),
            ("jumpPower", self.jump_power),
            ("worldBounds", self.world_bounds),
            ("cameraDistance", self.camera_distance),
            ("cameraHeight", self.camera_height),
            ("cameraSmoothing", self.camera_smoothing),
            ("yawSensitivity", self.yaw_sensitivity),
            ("maxStepTime", self.max_step_time),
            ("groundLevel", self.ground_level),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        for (field, value) in [
            ("speed", self.speed),
            ("gravity", self.gravity),
            ("jumpPower", self.jump_power),
            ("cameraDistance", self.camera_distance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("worldBounds", self.world_bounds),
            ("maxStepTime", self.max_step_time),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.camera_smoothing <= 0.0 || self.camera_smoothing > 1.0 {
            return Err(ConfigError::SmoothingOutOfRange(self.camera_smoothing));
        }

        if let SmoothingMode::FrameRateIndependent { reference_hz } = self.smoothing_mode {
            if !reference_hz.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: "referenceHz",
                });
            }
            if reference_hz <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: "referenceHz",
                    value: reference_hz,
                });
            }
        }

        Ok(self)
    }
}
