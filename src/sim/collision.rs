//! Collision detection between the ship and the asteroid field
//!
//! Circle against circle only. The sprite rectangles play no part here.
//! Detection never mutates entities; reacting to a hit is the session's job.

use super::asteroid::Asteroid;
use super::entity::Body;
use super::ship::Ship;

/// True if the two bodies' collision circles touch or overlap
#[inline]
pub fn bodies_collide(a: &impl Body, b: &impl Body) -> bool {
    a.bounding_circle().overlaps(&b.bounding_circle())
}

/// True if the ship touches any asteroid
pub fn detect(ship: &Ship, asteroids: &[Asteroid]) -> bool {
    asteroids.iter().any(|a| bodies_collide(ship, a))
}

/// IDs of every asteroid touching the ship, in registration order
pub fn colliding_asteroids(ship: &Ship, asteroids: &[Asteroid]) -> Vec<u32> {
    asteroids
        .iter()
        .filter(|a| bodies_collide(ship, *a))
        .map(|a| a.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::SpawnEdge;
    use crate::sim::geometry::Rect;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ship_at(center: Vec2, radius: f32) -> Ship {
        let mut ship = Ship::new(&Tuning::default());
        ship.rect.set_center(center);
        ship.radius = radius;
        ship
    }

    fn asteroid_at(id: u32, center: Vec2, radius: f32) -> Asteroid {
        let rect = Rect::centered(center, Vec2::new(40.0, 40.0));
        Asteroid::new(id, rect, radius, 1, SpawnEdge::Top)
    }

    #[test]
    fn test_overlap_is_hit() {
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        let asteroid = asteroid_at(1, Vec2::new(430.0, 300.0), 20.0);
        assert!(detect(&ship, &[asteroid]));
    }

    #[test]
    fn test_tangent_is_hit() {
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        let asteroid = asteroid_at(1, Vec2::new(400.0, 340.0), 20.0);
        assert!(detect(&ship, &[asteroid]));
    }

    #[test]
    fn test_rects_overlap_but_circles_miss() {
        // Diagonal neighbours: sprite boxes overlap, circles do not
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        let asteroid = asteroid_at(1, Vec2::new(432.0, 332.0), 20.0);
        assert!(!detect(&ship, &[asteroid]));
    }

    #[test]
    fn test_empty_field_never_hits() {
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        assert!(!detect(&ship, &[]));
        assert!(colliding_asteroids(&ship, &[]).is_empty());
    }

    #[test]
    fn test_colliding_asteroids_lists_every_hit() {
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        let field = vec![
            asteroid_at(1, Vec2::new(430.0, 300.0), 20.0),
            asteroid_at(2, Vec2::new(100.0, 100.0), 20.0),
            asteroid_at(3, Vec2::new(400.0, 270.0), 20.0),
        ];
        assert_eq!(colliding_asteroids(&ship, &field), vec![1, 3]);
    }

    #[test]
    fn test_detect_agrees_with_pairwise_check() {
        let ship = ship_at(Vec2::new(400.0, 300.0), 20.0);
        let near = asteroid_at(1, Vec2::new(400.0, 335.0), 20.0);
        let far = asteroid_at(2, Vec2::new(400.0, 345.0), 20.0);
        assert!(bodies_collide(&ship, &near));
        assert!(!bodies_collide(&ship, &far));
        assert_eq!(detect(&ship, &[far.clone()]), bodies_collide(&ship, &far));
        assert_eq!(colliding_asteroids(&ship, &[far, near]), vec![1]);
    }

    proptest! {
        #[test]
        fn prop_detect_matches_distance(
            sx in -100.0f32..900.0, sy in -100.0f32..700.0,
            ax in -100.0f32..900.0, ay in -100.0f32..700.0,
            sr in 1.0f32..50.0, ar in 1.0f32..50.0,
        ) {
            let ship = ship_at(Vec2::new(sx, sy), sr);
            let asteroid = asteroid_at(1, Vec2::new(ax, ay), ar);
            let dist = ship.rect.center().distance(asteroid.rect.center());
            let reach = sr + ar;
            // Skip the float boundary band where sqrt and squared comparisons may disagree
            prop_assume!((dist - reach).abs() > 1e-3);

            let hit = detect(&ship, std::slice::from_ref(&asteroid));
            prop_assert_eq!(hit, dist <= reach);
            prop_assert_eq!(bodies_collide(&ship, &asteroid), bodies_collide(&asteroid, &ship));
        }
    }
}
