use std::fmt;

/// Reasons a [`crate::Config`] is rejected
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NonPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    NonFinite { field: &'static str, value: f32 },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    MaxBelowStart { start: f32, max: f32 },
    InvertedLimits { bottom: f32, top: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} out of range: {value} (allowed {min}..={max})"),
            Self::MaxBelowStart { start, max } => write!(
                f,
                "max speed {max} is below start speed {start}"
            ),
            Self::InvertedLimits { bottom, top } => write!(
                f,
                "vertical limits inverted: bottom={bottom}, top={top}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
