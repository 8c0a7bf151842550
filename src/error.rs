//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-controls crate.
#[derive(Debug)]
pub enum ControlsError {
    /// Distance limits inverted or negative.
    DistanceRange {
        /// Configured minimum distance.
        min: f32,
        /// Configured maximum distance.
        max: f32,
    },
    /// Zoom limits inverted or negative.
    ZoomRange {
        /// Configured minimum zoom.
        min: f32,
        /// Configured maximum zoom.
        max: f32,
    },
    /// Polar angle limits inverted or outside `[0, PI]`.
    PolarRange {
        /// Configured minimum polar angle.
        min: f32,
        /// Configured maximum polar angle.
        max: f32,
    },
    /// Azimuth limits are not a valid sub-interval of `[-PI, PI]`.
    AzimuthWindow {
        /// Configured minimum azimuth angle.
        min: f32,
        /// Configured maximum azimuth angle.
        max: f32,
    },
    /// Damping factor outside `[0, 1)`.
    DampingFactor(f32),
    /// TOML preset parsing/serialization failure.
    PresetParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DistanceRange { min, max } => {
                write!(f, "invalid distance limits: min {min} > max {max} or negative")
            }
            Self::ZoomRange { min, max } => {
                write!(f, "invalid zoom limits: min {min} > max {max} or negative")
            }
            Self::PolarRange { min, max } => {
                write!(f, "invalid polar limits [{min}, {max}]: must be an ordered sub-interval of [0, pi]")
            }
            Self::AzimuthWindow { min, max } => {
                write!(f, "invalid azimuth limits [{min}, {max}]: bounded ends must form an ordered sub-interval of [-pi, pi]")
            }
            Self::DampingFactor(v) => {
                write!(f, "damping factor {v} outside [0, 1)")
            }
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
