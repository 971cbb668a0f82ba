use glam::Vec3;

use crate::config::MovementConfig;
use crate::player::PlayerState;

/// Height above the player's origin that the camera aims at.
const LOOK_AT_OFFSET: f32 = 0.5;

/// Facing vector for a yaw angle. Matches the renderer's convention for a
/// mesh rotated by `yaw` about +Y.
#[must_use]
pub fn forward(yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.sin_cos();
    Vec3::new(sin, 0.0, cos)
}

/// Third-person camera. Only [`CameraState::follow`] moves it; the look
/// target is recomputed from the player each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
}

impl CameraState {
    /// Initial placement: directly behind spawn on +Z, raised by the camera
    /// height.
    #[must_use]
    pub fn spawn(config: &MovementConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.camera_height, config.camera_distance),
        }
    }

    /// Point the camera eases toward: `camera_distance` back along
    /// `forward(yaw)` from the player.
    #[must_use]
    pub fn target(player: &PlayerState, config: &MovementConfig) -> Vec3 {
        player.position - forward(player.yaw) * config.camera_distance
    }

    /// Ease X and Z toward the target by `smoothing` and snap Y to the
    /// player's height plus the camera height.
    pub fn follow(&mut self, player: &PlayerState, smoothing: f32, config: &MovementConfig) {
        let target = Self::target(player, config);
        self.position.x += (target.x - self.position.x) * smoothing;
        self.position.z += (target.z - self.position.z) * smoothing;
        self.position.y = player.position.y + config.camera_height;
    }

    /// Where the camera aims: slightly above the player's origin.
    #[must_use]
    pub fn look_at(player: &PlayerState) -> Vec3 {
        player.position + Vec3::Y * LOOK_AT_OFFSET
    }
}
