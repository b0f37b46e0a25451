//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering, audio or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, SpawnEdge};
pub use collision::{bodies_collide, colliding_asteroids, detect};
pub use entity::{Body, Entity, EntityRegistry};
pub use geometry::{Circle, Rect};
pub use ship::{DirectionKeys, Ship};
pub use state::{GameEvent, Session, SessionState};
pub use tick::{Flow, TickInput, tick};
