//! Asteroids
//!
//! Each asteroid enters from one of the four screen edges and crosses the
//! play area in a straight line. Once it has fully left through the opposite
//! side it is recycled in place with a fresh edge and position, so the
//! population never changes while a session is running.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::tuning::Tuning;

/// Edge an asteroid entered from. Fixed for the asteroid's current crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
        SpawnEdge::Right,
    ];

    /// Unit direction of travel (screen coords, +Y down)
    pub fn direction(self) -> Vec2 {
        match self {
            SpawnEdge::Top => Vec2::Y,
            SpawnEdge::Bottom => Vec2::NEG_Y,
            SpawnEdge::Left => Vec2::X,
            SpawnEdge::Right => Vec2::NEG_X,
        }
    }

    /// Sprite center just outside this edge, at a random offset along it
    ///
    /// The offset is a whole number in `[0, extent - size)` so the sprite
    /// never starts hanging past the far corner.
    pub fn spawn_center<R: Rng + ?Sized>(self, rng: &mut R, size: Vec2, tuning: &Tuning) -> Vec2 {
        match self {
            SpawnEdge::Top => Vec2::new(random_offset(rng, tuning.width - size.x), -size.y),
            SpawnEdge::Bottom => Vec2::new(
                random_offset(rng, tuning.width - size.x),
                tuning.height + size.y,
            ),
            SpawnEdge::Left => Vec2::new(-size.x, random_offset(rng, tuning.height - size.y)),
            SpawnEdge::Right => Vec2::new(
                tuning.width + size.x,
                random_offset(rng, tuning.height - size.y),
            ),
        }
    }
}

fn random_offset<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    let upper = (extent as i32).max(1);
    rng.random_range(0..upper) as f32
}

/// An asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    /// Sprite bounds
    pub rect: Rect,
    /// Collision radius around the rect center
    pub radius: f32,
    /// Units per tick, fixed for the asteroid's whole life
    speed: u32,
    /// Edge of the current crossing
    edge: SpawnEdge,
    /// How many times this asteroid has been recycled
    pub respawns: u32,
}

impl Asteroid {
    /// Place an asteroid explicitly (fixtures, replays)
    pub fn new(id: u32, rect: Rect, radius: f32, speed: u32, edge: SpawnEdge) -> Self {
        Self {
            id,
            rect,
            radius,
            speed,
            edge,
            respawns: 0,
        }
    }

    /// New asteroid just off a random edge with a random speed
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, tuning: &Tuning) -> Self {
        let mut asteroid = Self::new(
            id,
            Rect::new(0.0, 0.0, tuning.asteroid_size.x, tuning.asteroid_size.y),
            tuning.asteroid_radius,
            0,
            SpawnEdge::Top,
        );
        asteroid.place(rng, tuning);
        asteroid.speed = rng.random_range(tuning.asteroid_speed_min..tuning.asteroid_speed_max);
        asteroid
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn edge(&self) -> SpawnEdge {
        self.edge
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.rect.center(), self.radius)
    }

    /// Advance one tick. Returns true if the asteroid left the play area and
    /// was recycled at a new edge.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> bool {
        self.rect.pos += self.edge.direction() * self.speed as f32;

        if self.has_crossed(tuning) {
            self.respawn(rng, tuning);
            return true;
        }
        false
    }

    /// True once the sprite is entirely past the edge opposite its entry
    pub fn has_crossed(&self, tuning: &Tuning) -> bool {
        match self.edge {
            SpawnEdge::Top => self.rect.top() > tuning.height,
            SpawnEdge::Bottom => self.rect.bottom() < 0.0,
            SpawnEdge::Left => self.rect.left() > tuning.width,
            SpawnEdge::Right => self.rect.right() < 0.0,
        }
    }

    /// Recycle at a fresh random edge. Speed is kept.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        self.place(rng, tuning);
        self.respawns += 1;
        log::trace!(
            "Asteroid {} respawned from {:?} at {} (respawn #{})",
            self.id,
            self.edge,
            self.rect.center(),
            self.respawns
        );
    }

    fn place<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];
        let center = edge.spawn_center(rng, self.rect.size, tuning);
        self.rect.set_center(center);
        self.edge = edge;
    }
}
