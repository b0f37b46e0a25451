//! Data-driven game balance
//!
//! Everything the simulation reads lives here so it can be overridden from
//! the settings file without touching code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play area width
    pub width: f32,
    /// Play area height
    pub height: f32,
    /// Ship movement per tick per pressed axis
    pub ship_speed: f32,
    /// Ship sprite bounds
    pub ship_size: Vec2,
    /// Ship collision radius
    pub ship_radius: f32,
    /// Asteroid sprite bounds
    pub asteroid_size: Vec2,
    /// Asteroid collision radius
    pub asteroid_radius: f32,
    /// Live asteroids during play
    pub asteroid_count: usize,
    /// Slowest asteroid speed (inclusive)
    pub asteroid_speed_min: u32,
    /// Fastest asteroid speed (exclusive)
    pub asteroid_speed_max: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            ship_speed: SHIP_SPEED,
            ship_size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            ship_radius: SHIP_RADIUS,
            asteroid_size: Vec2::new(ASTEROID_WIDTH, ASTEROID_HEIGHT),
            asteroid_radius: ASTEROID_RADIUS,
            asteroid_count: ASTEROID_COUNT,
            asteroid_speed_min: ASTEROID_SPEED_MIN,
            asteroid_speed_max: ASTEROID_SPEED_MAX,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(invalid(format!(
                "play area must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, size) in [("ship", self.ship_size), ("asteroid", self.asteroid_size)] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(invalid(format!("{name} size must be positive, got {size}")));
            }
            // Spawn placement draws from [0, extent - size), which must be non-empty
            if size.x >= self.width || size.y >= self.height {
                return Err(invalid(format!(
                    "{name} size {size} does not fit a {}x{} play area",
                    self.width, self.height
                )));
            }
        }
        if !(self.ship_radius > 0.0 && self.asteroid_radius > 0.0) {
            return Err(invalid("collision radii must be positive".to_string()));
        }
        if self.ship_speed < 0.0 {
            return Err(invalid(format!("ship speed must not be negative, got {}", self.ship_speed)));
        }
        if self.asteroid_count == 0 {
            return Err(invalid("asteroid count must be at least 1".to_string()));
        }
        if self.asteroid_speed_min < 1 || self.asteroid_speed_min >= self.asteroid_speed_max {
            return Err(invalid(format!(
                "asteroid speed range [{}, {}) must be non-empty and start at 1 or more",
                self.asteroid_speed_min, self.asteroid_speed_max
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SettingsError {
    SettingsError::Invalid(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.asteroid_count, 8);
        assert_eq!(tuning.width, 800.0);
        assert_eq!(tuning.height, 600.0);
    }

    #[test]
    fn test_rejects_empty_speed_range() {
        let tuning = Tuning {
            asteroid_speed_min: 5,
            asteroid_speed_max: 5,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(SettingsError::Invalid(_))));

        let tuning = Tuning {
            asteroid_speed_min: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_sprites() {
        let tuning = Tuning {
            asteroid_size: Vec2::new(800.0, 40.0),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "asteroid_count": 3 }"#).unwrap();
        assert_eq!(tuning.asteroid_count, 3);
        assert_eq!(tuning.ship_speed, SHIP_SPEED);
    }
}
