//! Shape generation for sprites and the backdrop
//!
//! Everything is generated procedurally, so the game needs no image files.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::sim::Rect;

/// Points around an asteroid outline
pub const ASTEROID_VERTICES: usize = 11;

/// A backdrop star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// 0-1
    pub brightness: f32,
}

/// Scatter `count` stars over the play area
pub fn starfield(seed: u64, count: usize, area: Vec2) -> Vec<Star> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // Mostly faint pinpricks, a few bright ones
            let bright = rng.random_bool(0.1);
            Star {
                pos: Vec2::new(rng.random_range(0.0..area.x), rng.random_range(0.0..area.y)),
                radius: if bright { 1.6 } else { rng.random_range(0.4..1.0) },
                brightness: if bright { 1.0 } else { rng.random_range(0.25..0.7) },
            }
        })
        .collect()
}

/// Rotate `point` about `pivot` by `angle` radians
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    pivot + Vec2::from_angle(angle).rotate(point - pivot)
}

/// Ship hull triangle (nose up), rotated about the rect center
pub fn ship_hull(rect: &Rect, angle: f32) -> [Vec2; 3] {
    let c = rect.center();
    let nose = Vec2::new(c.x, rect.top());
    let left = Vec2::new(rect.left(), rect.bottom());
    let right = Vec2::new(rect.right(), rect.bottom());
    [nose, left, right].map(|p| rotate_about(p, c, angle))
}

/// Engine flame below the hull, scaled by `throttle` in 0-1
pub fn ship_flame(rect: &Rect, angle: f32, throttle: f32) -> [Vec2; 3] {
    let c = rect.center();
    let half = rect.width() * 0.15;
    let base_y = rect.bottom();
    let tip = Vec2::new(c.x, base_y + rect.height() * (0.2 + 0.3 * throttle.clamp(0.0, 1.0)));
    [Vec2::new(c.x - half, base_y), Vec2::new(c.x + half, base_y), tip]
        .map(|p| rotate_about(p, c, angle))
}

/// Jagged asteroid outline inscribed in the rect, stable per asteroid id
pub fn asteroid_outline(id: u32, rect: &Rect, angle: f32) -> Vec<Vec2> {
    let mut rng = Pcg32::seed_from_u64(id as u64);
    let c = rect.center();
    let half = rect.size / 2.0;
    (0..ASTEROID_VERTICES)
        .map(|i| {
            let theta = i as f32 / ASTEROID_VERTICES as f32 * TAU + angle;
            let jag = rng.random_range(0.7..1.0);
            c + Vec2::from_angle(theta) * half * jag
        })
        .collect()
}
