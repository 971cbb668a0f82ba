use crate::player::clamp_step;

/// Measures time between frame callbacks.
///
/// Timestamps are seconds on any monotonic clock (the host passes
/// `performance.now() / 1000`). The first tick after a reset yields 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Forget the previous timestamp.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record `now` and return the elapsed step, clamped to `[0, max_step]`.
    pub fn tick(&mut self, now: f64, max_step: f32) -> f32 {
        if !now.is_finite() {
            return 0.0;
        }
        let elapsed = self.last.map_or(0.0, |last| (now - last) as f32);
        self.last = Some(now);
        if elapsed > max_step {
            log::debug!("frame hitch of {elapsed:.3}s clamped to {max_step}s");
        }
        clamp_step(elapsed, max_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert!(clock.tick(12.5, 0.1).abs() < 1e-9);
    }

    #[test]
    fn measures_elapsed() {
        let mut clock = FrameClock::default();
        clock.tick(1.0, 0.1);
        let dt = clock.tick(1.016, 0.1);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_pause_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(1.0, 0.1);
        let dt = clock.tick(31.0, 0.1);
        assert!((dt - 0.1).abs() < 1e-9);
        // The clamped gap does not carry over.
        let dt = clock.tick(31.02, 0.1);
        assert!((dt - 0.02).abs() < 1e-5);
    }

    #[test]
    fn time_going_backwards_yields_zero() {
        let mut clock = FrameClock::default();
        clock.tick(5.0, 0.1);
        assert!(clock.tick(4.0, 0.1).abs() < 1e-9);
    }

    #[test]
    fn non_finite_timestamp_is_ignored() {
        let mut clock = FrameClock::default();
        clock.tick(1.0, 0.1);
        assert!(clock.tick(f64::NAN, 0.1).abs() < 1e-9);
        let dt = clock.tick(1.05, 0.1);
        assert!((dt - 0.05).abs() < 1e-5);
    }

    #[test]
    fn reset_restarts_measurement() {
        let mut clock = FrameClock::default();
        clock.tick(1.0, 0.1);
        clock.reset();
        assert!(clock.tick(1.05, 0.1).abs() < 1e-9);
    }
}
