use glam::Vec2;

use crate::input::sanitize;

/// Knob travel in CSS pixels before the stick saturates.
pub const STICK_RADIUS: f32 = 50.0;

/// On-screen virtual joystick. Converts pointer positions (screen space, y
/// down) into a stick vector `(x, z)` with magnitude at most 1, z up.
#[derive(Clone, Debug)]
pub struct VirtualStick {
    center: Vec2,
    radius: f32,
    active: bool,
}

impl Default for VirtualStick {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl VirtualStick {
    #[must_use]
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: STICK_RADIUS,
            active: false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move the stick's center, e.g. after the element is laid out again.
    pub fn recenter(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Begin a drag. The element may have moved since the last press, so the
    /// caller passes the current center.
    pub fn press(&mut self, center: Vec2) {
        self.center = center;
        self.active = true;
    }

    /// Pointer moved to `pointer`. Returns the stick vector, or `None` if
    /// the stick is not being dragged.
    #[must_use]
    pub fn drag(&mut self, pointer: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let offset = Vec2::new(sanitize(pointer.x), sanitize(pointer.y)) - self.center;
        let clamped = offset.clamp_length_max(self.radius);
        Some(Vec2::new(clamped.x / self.radius, -clamped.y / self.radius))
    }

    /// Pointer released or left the element. Always yields the zero vector.
    pub fn release(&mut self) -> Vec2 {
        self.active = false;
        Vec2::ZERO
    }

    /// Knob offset in pixels for a stick vector, for positioning the
    /// inner element.
    #[must_use]
    pub fn knob_offset(&self, stick: Vec2) -> Vec2 {
        Vec2::new(stick.x * self.radius, -stick.y * self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_without_press_is_ignored() {
        let mut stick = VirtualStick::new(Vec2::new(100.0, 100.0));
        assert!(stick.drag(Vec2::new(120.0, 100.0)).is_none());
    }

    #[test]
    fn drag_right_and_up() {
        let mut stick = VirtualStick::default();
        stick.press(Vec2::new(100.0, 100.0));

        let v = stick.drag(Vec2::new(125.0, 100.0)).expect("active");
        assert!((v.x - 0.5).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        // Screen y grows downward; dragging up pushes z positive.
        let v = stick.drag(Vec2::new(100.0, 75.0)).expect("active");
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn drag_clamps_to_radius() {
        let mut stick = VirtualStick::default();
        stick.press(Vec2::ZERO);
        let v = stick.drag(Vec2::new(300.0, 400.0)).expect("active");
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!((v.x - 0.6).abs() < 1e-5);
        assert!((v.y + 0.8).abs() < 1e-5);
    }

    #[test]
    fn release_returns_zero_and_deactivates() {
        let mut stick = VirtualStick::default();
        stick.press(Vec2::ZERO);
        assert!(stick.is_active());
        assert_eq!(stick.release(), Vec2::ZERO);
        assert!(!stick.is_active());
        assert!(stick.drag(Vec2::new(10.0, 0.0)).is_none());
    }

    #[test]
    fn press_recaptures_center() {
        let mut stick = VirtualStick::new(Vec2::ZERO);
        stick.press(Vec2::new(50.0, 50.0));
        let v = stick.drag(Vec2::new(50.0, 50.0)).expect("active");
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn recenter_shifts_reference() {
        let mut stick = VirtualStick::new(Vec2::ZERO);
        stick.press(Vec2::ZERO);
        stick.recenter(Vec2::new(-50.0, 0.0));
        let v = stick.drag(Vec2::ZERO).expect("active");
        assert!((v.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_pointer_is_treated_as_origin() {
        let mut stick = VirtualStick::default();
        stick.press(Vec2::ZERO);
        let v = stick.drag(Vec2::new(f32::NAN, f32::INFINITY)).expect("active");
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn knob_offset_inverts_mapping() {
        let mut stick = VirtualStick::default();
        stick.press(Vec2::ZERO);
        let pointer = Vec2::new(20.0, -30.0);
        let v = stick.drag(pointer).expect("active");
        let knob = stick.knob_offset(v);
        assert!((knob - pointer).length() < 1e-4);
    }
}
