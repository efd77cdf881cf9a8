//! Tunable simulation parameters
//!
//! An explicit configuration value handed to the simulation at construction.
//! Unset overrides fall back to the named defaults.

use serde::{Deserialize, Serialize};

/// Simulation tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target render frame rate (render requests per second)
    pub fps: f32,
    /// Initial horizontal scroll speed (distance units per millisecond)
    pub initial_speed: f32,
    /// Speed increase applied every tick
    pub acceleration: f32,
    /// Upward velocity granted at the start of a jump
    pub jump_impulse: f32,
    /// Downward acceleration applied per tick while airborne
    pub gravity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 50.0,
            initial_speed: 0.2,
            acceleration: 0.0001,
            jump_impulse: 5.0,
            gravity: 0.15,
        }
    }
}

impl Config {
    /// Milliseconds between render requests
    #[inline]
    pub fn render_interval_ms(&self) -> f32 {
        1000.0 / self.fps
    }

    /// Defaults with the set fields of `overrides` applied on top
    pub fn with_overrides(overrides: &ConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            fps: overrides.fps.unwrap_or(defaults.fps),
            initial_speed: overrides.initial_speed.unwrap_or(defaults.initial_speed),
            acceleration: overrides.acceleration.unwrap_or(defaults.acceleration),
            jump_impulse: overrides.jump_impulse.unwrap_or(defaults.jump_impulse),
            gravity: overrides.gravity.unwrap_or(defaults.gravity),
        }
    }
}

/// Partial configuration, e.g. parsed from a JSON file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub fps: Option<f32>,
    pub initial_speed: Option<f32>,
    pub acceleration: Option<f32>,
    pub jump_impulse: Option<f32>,
    pub gravity: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fps, 50.0);
        assert_eq!(config.initial_speed, 0.2);
        assert_eq!(config.acceleration, 0.0001);
        assert_eq!(config.jump_impulse, 5.0);
        assert_eq!(config.gravity, 0.15);
        assert!((config.render_interval_ms() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_override_merge() {
        let overrides = ConfigOverrides {
            fps: Some(30.0),
            gravity: Some(0.2),
            ..Default::default()
        };
        let config = Config::with_overrides(&overrides);
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.gravity, 0.2);
        // Unset fields keep their defaults
        assert_eq!(config.initial_speed, 0.2);
        assert_eq!(config.jump_impulse, 5.0);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"initial_speed": 0.3}"#).unwrap();
        let config = Config::with_overrides(&overrides);
        assert_eq!(config.initial_speed, 0.3);
        assert_eq!(config.fps, 50.0);
    }
}
