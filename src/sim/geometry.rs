//! Axis-aligned sprite bounds and collision circles
//!
//! Sprite bounds drive screen clamping and edge checks; the circle is the
//! separate, usually smaller, shape used for hit tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (screen coords, +Y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Shift the rectangle so no edge lies outside `[0, width] x [0, height]`.
    ///
    /// Edges are checked in bottom, top, right, left order, so a rectangle
    /// larger than the area ends up pinned to the top-left.
    pub fn clamp_within(&mut self, width: f32, height: f32) {
        if self.bottom() > height {
            self.pos.y = height - self.size.y;
        }
        if self.top() < 0.0 {
            self.pos.y = 0.0;
        }
        if self.right() > width {
            self.pos.x = width - self.size.x;
        }
        if self.left() < 0.0 {
            self.pos.x = 0.0;
        }
    }

    /// True if the rectangle lies entirely inside `[0, width] x [0, height]`
    pub fn is_within(&self, width: f32, height: f32) -> bool {
        self.left() >= 0.0 && self.top() >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// Collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circles overlap when the distance between centers is at most the sum
    /// of the radii. Touching circles count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_centered_round_trip() {
        let mut r = Rect::centered(Vec2::new(400.0, 300.0), Vec2::new(50.0, 38.0));
        assert_eq!(r.pos, Vec2::new(375.0, 281.0));
        r.set_center(Vec2::new(0.0, 0.0));
        assert_eq!(r.pos, Vec2::new(-25.0, -19.0));
    }

    #[test]
    fn test_clamp_within() {
        let mut r = Rect::new(790.0, -5.0, 50.0, 38.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.right(), 800.0);
        assert_eq!(r.top(), 0.0);

        let mut r = Rect::new(-3.0, 590.0, 50.0, 38.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.bottom(), 600.0);
        assert!(r.is_within(800.0, 600.0));
    }

    #[test]
    fn test_circle_overlap() {
        let a = Circle::new(Vec2::new(400.0, 300.0), 20.0);
        assert!(a.overlaps(&Circle::new(Vec2::new(430.0, 300.0), 20.0)));
        // Tangent counts
        assert!(a.overlaps(&Circle::new(Vec2::new(440.0, 300.0), 20.0)));
        assert!(!a.overlaps(&Circle::new(Vec2::new(440.5, 300.0), 20.0)));
    }
}
