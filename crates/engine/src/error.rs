use thiserror::Error;

/// Reasons a host-supplied [`MovementConfig`](crate::config::MovementConfig)
/// is rejected at session start.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field was NaN or infinite.
    #[error("config field `{field}` must be finite")]
    NonFinite { field: &'static str },

    /// A magnitude that may be zero but not negative.
    #[error("config field `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// A size or duration that must be strictly positive.
    #[error("config field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// Camera smoothing outside `(0, 1]` either never moves or overshoots.
    #[error("camera smoothing must lie in (0, 1], got {0}")]
    SmoothingOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ConfigError::Negative {
            field: "speed",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "config field `speed` must not be negative, got -1"
        );

        let err = ConfigError::NonFinite { field: "gravity" };
        assert!(err.to_string().contains("gravity"));
    }

    #[test]
    fn smoothing_message_includes_value() {
        let err = ConfigError::SmoothingOutOfRange(1.5);
        assert_eq!(err.to_string(), "camera smoothing must lie in (0, 1], got 1.5");
    }
}
