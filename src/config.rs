//! Controller tunables with TOML preset support.
//!
//! Every field is live-mutable at runtime through
//! [`set_config`](crate::controls::OrbitController::set_config) and takes
//! effect on the next processed event or update. Invariants are enforced at
//! configuration time; malformed limits are rejected with a descriptive
//! error, never silently clamped.

use std::f32::consts::PI;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ControlsError;
use crate::input::PointerButton;

/// Which physical pointer button drives which camera mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct MouseBindings {
    /// Button that starts a rotate drag.
    pub rotate: PointerButton,
    /// Button that starts a dolly drag.
    pub dolly: PointerButton,
    /// Button that starts a pan drag.
    pub pan: PointerButton,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            rotate: PointerButton::Primary,
            dolly: PointerButton::Middle,
            pan: PointerButton::Secondary,
        }
    }
}

/// Orbit controller tunables.
///
/// Serializes to/from TOML for control presets; all fields use
/// `#[serde(default)]` so partial files work. Angle limits are radians.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
pub struct ControlsConfig {
    /// Master enable; when false every input event is ignored.
    pub enabled: bool,

    /// Enable rotate gestures.
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Reverse the sign of vertical orbit drags.
    pub reverse_orbit: bool,

    /// Enable dolly/zoom gestures.
    pub enable_zoom: bool,
    /// Zoom sensitivity multiplier (dolly step is `0.95^zoom_speed`).
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Closest allowed orbit radius (perspective/generic dolly).
    pub min_distance: f32,
    /// Farthest allowed orbit radius (perspective/generic dolly).
    pub max_distance: f32,
    /// Smallest allowed zoom factor (orthographic dolly).
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest allowed zoom factor (orthographic dolly).
    #[schemars(skip)]
    pub max_zoom: f32,

    /// Enable pan gestures.
    pub enable_pan: bool,
    /// Pan sensitivity multiplier for pointer and touch drags.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Pixels panned per arrow-key press.
    #[schemars(title = "Key Pan Speed", range(min = 1.0, max = 30.0), extend("step" = 1.0))]
    pub key_pan_speed: f32,
    /// Enable arrow-key panning.
    pub enable_keys: bool,

    /// Lower polar angle limit, within `[0, PI]`.
    pub min_polar_angle: f32,
    /// Upper polar angle limit, within `[0, PI]`.
    pub max_polar_angle: f32,
    /// Lower azimuth limit; `-inf` leaves the orbit unbounded.
    pub min_azimuth_angle: f32,
    /// Upper azimuth limit; `inf` leaves the orbit unbounded.
    pub max_azimuth_angle: f32,

    /// Decay pending rotation across frames instead of consuming it at once.
    pub enable_damping: bool,
    /// Per-update decay factor, within `[0, 1)`.
    #[schemars(title = "Damping", range(min = 0.0, max = 0.99), extend("step" = 0.01))]
    pub damping_factor: f32,

    /// Spin around the target while no gesture is active.
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one turn per 30 seconds at 60 fps.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,

    /// Pointer button to mode mapping.
    #[schemars(skip)]
    pub mouse: MouseBindings,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_rotate: true,
            rotate_speed: 1.0,
            reverse_orbit: false,
            enable_zoom: true,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            enable_pan: true,
            pan_speed: 1.0,
            key_pan_speed: 7.0,
            enable_keys: true,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            enable_damping: false,
            damping_factor: 0.25,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            mouse: MouseBindings::default(),
        }
    }
}

impl ControlsConfig {
    /// Check every limit invariant.
    ///
    /// Comparisons are written so NaN fields also fail validation.
    pub fn validate(&self) -> Result<(), ControlsError> {
        if !(self.min_distance >= 0.0 && self.min_distance <= self.max_distance) {
            return Err(ControlsError::DistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if !(self.min_zoom >= 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(ControlsError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.min_polar_angle >= 0.0
            && self.min_polar_angle <= self.max_polar_angle
            && self.max_polar_angle <= PI)
        {
            return Err(ControlsError::PolarRange {
                min: self.min_polar_angle,
                max: self.max_polar_angle,
            });
        }
        let azimuth_ok = self.min_azimuth_angle <= self.max_azimuth_angle
            && (self.min_azimuth_angle == f32::NEG_INFINITY
                || self.min_azimuth_angle >= -PI)
            && (self.max_azimuth_angle == f32::INFINITY
                || self.max_azimuth_angle <= PI);
        if !azimuth_ok {
            return Err(ControlsError::AzimuthWindow {
                min: self.min_azimuth_angle,
                max: self.max_azimuth_angle,
            });
        }
        if !(self.damping_factor >= 0.0 && self.damping_factor < 1.0) {
            return Err(ControlsError::DampingFactor(self.damping_factor));
        }
        Ok(())
    }

    /// Generate JSON Schema describing the UI-exposed tunables.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControlsConfig)
    }

    /// Load and validate a config from a TOML file. Missing fields use
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content = std::fs::read_to_string(path).map_err(ControlsError::Io)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ControlsError::PresetParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ControlsError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ControlsError::Io)?;
        }
        std::fs::write(path, content).map_err(ControlsError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ControlsError;

    #[test]
    fn default_is_valid_and_round_trips_through_toml() {
        let config = ControlsConfig::default();
        config.validate().unwrap();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ControlsConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
rotate_speed = 0.5
enable_damping = true
";
        let config: ControlsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rotate_speed, 0.5);
        assert!(config.enable_damping);
        // Everything else should be default
        assert_eq!(config.key_pan_speed, 7.0);
        assert_eq!(config.max_distance, f32::INFINITY);
        assert_eq!(config.mouse, MouseBindings::default());
    }

    #[test]
    fn inverted_distance_limits_rejected() {
        let config = ControlsConfig {
            min_distance: 10.0,
            max_distance: 5.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControlsError::DistanceRange { .. })
        ));
    }

    #[test]
    fn polar_limits_outside_zero_pi_rejected() {
        let config = ControlsConfig {
            max_polar_angle: 4.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControlsError::PolarRange { .. })
        ));
    }

    #[test]
    fn bounded_azimuth_window_must_fit_in_pi_range() {
        let config = ControlsConfig {
            min_azimuth_angle: -4.0,
            max_azimuth_angle: 1.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControlsError::AzimuthWindow { .. })
        ));

        // Half-bounded windows are fine
        let config = ControlsConfig {
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: 1.0,
            ..ControlsConfig::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn inverted_azimuth_window_rejected() {
        let config = ControlsConfig {
            min_azimuth_angle: 1.0,
            max_azimuth_angle: -1.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControlsError::AzimuthWindow { .. })
        ));
    }

    #[test]
    fn damping_factor_must_stay_below_one() {
        let config = ControlsConfig {
            damping_factor: 1.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControlsError::DampingFactor(_))
        ));
    }

    #[test]
    fn nan_limits_rejected() {
        let config = ControlsConfig {
            min_polar_angle: f32::NAN,
            ..ControlsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_width_limits_are_valid() {
        let config = ControlsConfig {
            min_distance: 5.0,
            max_distance: 5.0,
            ..ControlsConfig::default()
        };
        config.validate().unwrap();
    }
}
