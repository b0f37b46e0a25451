//! Shared entity view and the live entity set

use super::asteroid::Asteroid;
use super::geometry::{Circle, Rect};
use super::ship::Ship;

/// Anything with sprite bounds and a collision circle
pub trait Body {
    fn bounds(&self) -> Rect;
    fn bounding_circle(&self) -> Circle;
}

impl Body for Ship {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn bounding_circle(&self) -> Circle {
        Ship::bounding_circle(self)
    }
}

impl Body for Asteroid {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn bounding_circle(&self) -> Circle {
        Asteroid::bounding_circle(self)
    }
}

/// Borrowed view of one live entity
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Ship(&'a Ship),
    Asteroid(&'a Asteroid),
}

impl Body for Entity<'_> {
    fn bounds(&self) -> Rect {
        match self {
            Entity::Ship(ship) => ship.bounds(),
            Entity::Asteroid(asteroid) => asteroid.bounds(),
        }
    }

    fn bounding_circle(&self) -> Circle {
        match self {
            Entity::Ship(ship) => Body::bounding_circle(*ship),
            Entity::Asteroid(asteroid) => Body::bounding_circle(*asteroid),
        }
    }
}

/// All live entities of a session: one ship plus the asteroid field
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    pub ship: Ship,
    /// Kept in registration order
    pub asteroids: Vec<Asteroid>,
}

impl EntityRegistry {
    pub fn new(ship: Ship, asteroids: Vec<Asteroid>) -> Self {
        Self { ship, asteroids }
    }

    /// Entities in draw order: ship first, then asteroids as registered
    pub fn iter(&self) -> impl Iterator<Item = Entity<'_>> {
        std::iter::once(Entity::Ship(&self.ship)).chain(self.asteroids.iter().map(Entity::Asteroid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::SpawnEdge;
    use crate::tuning::Tuning;

    #[test]
    fn test_iter_draw_order() {
        let tuning = Tuning::default();
        let asteroids = (1..=3)
            .map(|id| Asteroid::new(id, Rect::new(0.0, 0.0, 40.0, 40.0), 20.0, 1, SpawnEdge::Left))
            .collect();
        let registry = EntityRegistry::new(Ship::new(&tuning), asteroids);

        let order: Vec<Option<u32>> = registry
            .iter()
            .map(|e| match e {
                Entity::Ship(_) => None,
                Entity::Asteroid(a) => Some(a.id),
            })
            .collect();
        assert_eq!(order, vec![None, Some(1), Some(2), Some(3)]);
        assert_eq!(registry.iter().count(), 4);
    }

    #[test]
    fn test_body_circle_follows_rect_center() {
        let tuning = Tuning::default();
        let registry = EntityRegistry::new(Ship::new(&tuning), Vec::new());
        let entity = registry.iter().next().unwrap();
        let circle = entity.bounding_circle();
        assert_eq!(circle.center, entity.bounds().center());
        assert_eq!(circle.radius, tuning.ship_radius);
    }
}
