//! The player's ship
//!
//! Keyboard-driven, no inertia: velocity is rebuilt from the held keys on
//! every update, then the sprite bounds are clamped to the play area.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::tuning::Tuning;

/// Held state of the four direction keys (any combination may be down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Velocity for these keys. Opposing keys do not cancel: right wins
    /// over left and down wins over up.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if self.left {
            vel.x = -speed;
        }
        if self.right {
            vel.x = speed;
        }
        if self.up {
            vel.y = -speed;
        }
        if self.down {
            vel.y = speed;
        }
        vel
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Sprite bounds, used for clamping and drawing
    pub rect: Rect,
    /// Collision radius around the rect center
    pub radius: f32,
    /// Velocity applied on the last update
    pub vel: Vec2,
    /// Movement per tick per pressed axis
    pub speed: f32,
}

impl Ship {
    /// New ship centred in the play area, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let center = Vec2::new(tuning.width / 2.0, tuning.height / 2.0);
        Self {
            rect: Rect::centered(center, tuning.ship_size),
            radius: tuning.ship_radius,
            vel: Vec2::ZERO,
            speed: tuning.ship_speed,
        }
    }

    /// Move by the held keys, then keep the sprite inside the play area
    pub fn update(&mut self, keys: DirectionKeys, tuning: &Tuning) {
        self.vel = keys.velocity(self.speed);
        self.rect.pos += self.vel;
        self.rect.clamp_within(tuning.width, tuning.height);
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.rect.center(), self.radius)
    }
}
