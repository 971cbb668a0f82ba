use glam::Vec3;

use crate::config::MovementConfig;
use crate::input::{MovementIntent, sanitize};

/// The player's pose and vertical motion. Only [`integrate`] and yaw
/// deltas write to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Rotation about +Y, radians.
    pub yaw: f32,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl PlayerState {
    /// Standing at the origin on the ground, facing yaw 0.
    #[must_use]
    pub fn spawn(config: &MovementConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.ground_level, 0.0),
            yaw: 0.0,
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Turn by `delta` radians. Non-finite deltas are dropped.
    pub fn apply_yaw_delta(&mut self, delta: f32) {
        self.yaw += sanitize(delta);
    }

    /// World-space horizontal displacement direction for an intent at the
    /// current yaw. Stick-up is forward, which is -Z at yaw 0.
    #[must_use]
    pub fn heading(&self, intent: MovementIntent) -> (f32, f32) {
        let strafe = intent.x;
        let forward = -intent.z;
        let (sin, cos) = self.yaw.sin_cos();
        (
            strafe * cos - forward * sin,
            strafe * sin + forward * cos,
        )
    }
}

/// Clamp a frame step to `[0, max]`. Negative and non-finite steps become 0.
#[must_use]
pub fn clamp_step(dt: f32, max: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt.min(max) } else { 0.0 }
}

/// Advance the player by one frame.
///
/// Order: horizontal move, jump, gravity, ground clamp, bounds clamp.
/// Bounds are applied after movement so pushing into a wall pins the player
/// at the edge.
#[must_use]
pub fn integrate(
    state: PlayerState,
    intent: MovementIntent,
    jump_requested: bool,
    dt: f32,
    config: &MovementConfig,
) -> PlayerState {
    let dt = clamp_step(dt, config.max_step_time);
    let mut next = state;

    let intent = MovementIntent {
        x: sanitize(intent.x),
        z: sanitize(intent.z),
    };
    let (dx, dz) = next.heading(intent);
    let step = config.speed * dt;
    next.position.x += dx * step;
    next.position.z += dz * step;

    if jump_requested && next.grounded {
        next.vertical_velocity = config.jump_power;
        next.grounded = false;
        log::debug!("jump at {:?}", next.position);
    }

    if !next.grounded {
        next.vertical_velocity -= config.gravity * dt;
        next.position.y += next.vertical_velocity * dt;
    }

    if next.position.y < config.ground_level {
        if !state.grounded {
            log::debug!("landed at {:?}", next.position);
        }
        next.vertical_velocity = 0.0;
        next.position.y = config.ground_level;
        next.grounded = true;
    }

    let bound = config.world_bounds;
    next.position.x = next.position.x.clamp(-bound, bound);
    next.position.z = next.position.z.clamp(-bound, bound);

    next
}
