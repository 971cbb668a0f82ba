use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::camera::CameraState;
use crate::player::PlayerState;

/// Player transform handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl From<&PlayerState> for PlayerPose {
    fn from(player: &PlayerState) -> Self {
        Self {
            position: player.position,
            yaw: player.yaw,
        }
    }
}

/// Camera transform handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    #[must_use]
    pub fn new(camera: &CameraState, player: &PlayerState) -> Self {
        Self {
            position: camera.position,
            look_at: CameraState::look_at(player),
        }
    }
}

/// Both poses packed for a zero-copy hand-off to JS as a `Float32Array`.
///
/// Layout (f32 index): player position 0..3, yaw 3, camera position 4..7,
/// look-at 8..11. Slots 7 and 11 are padding so each vector starts on a
/// 16-byte boundary, which keeps the struct uploadable as a uniform.
///
/// Total size: 48 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FramePose {
    pub player_position: Vec3, // offset  0
    pub yaw: f32,              // offset 12
    pub camera_position: Vec3, // offset 16
    _pad0: f32,                // offset 28
    pub look_at: Vec3,         // offset 32
    _pad1: f32,                // offset 44
}

impl FramePose {
    /// Number of `f32` slots in the packed layout.
    pub const FLOATS: usize = 12;

    #[must_use]
    pub fn new(player: &PlayerPose, camera: &CameraPose) -> Self {
        Self {
            player_position: player.position,
            yaw: player.yaw,
            camera_position: camera.position,
            _pad0: 0.0,
            look_at: camera.look_at,
            _pad1: 0.0,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerPose {
        PlayerPose {
            position: self.player_position,
            yaw: self.yaw,
        }
    }

    #[must_use]
    pub fn camera(&self) -> CameraPose {
        CameraPose {
            position: self.camera_position,
            look_at: self.look_at,
        }
    }

    #[must_use]
    pub fn as_floats(&self) -> &[f32; Self::FLOATS] {
        bytemuck::cast_ref(self)
    }
}
