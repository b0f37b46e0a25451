//! Backend-independent draw list
//!
//! `build_scene` turns a session into an ordered list of draw commands:
//! backdrop first, then entities in registry order, then start-screen text.

use glam::Vec2;

use crate::sim::{Body, Entity, Rect, Session, SessionState};

/// Start screen text: (line, font size, anchor as a fraction of the play area)
pub const START_SCREEN_TEXT: [(&str, u16, Vec2); 3] = [
    ("AVOIDER", 64, Vec2::new(0.5, 0.25)),
    ("Arrow keys to survive!", 22, Vec2::new(0.5, 0.5)),
    ("Press the space key to begin", 18, Vec2::new(0.5, 0.75)),
];

/// Radians of asteroid spin per tick at the fastest rate
const SPIN_PER_TICK: f32 = 0.02;
/// Ship roll when strafing
const SHIP_BANK: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Ship,
    Asteroid { id: u32 },
}

/// One entity to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Sprite bounds in play-area coordinates
    pub rect: Rect,
    /// Rotation about the rect center, radians
    pub angle: f32,
    /// Engine output in [0, 1]; zero for anything without an engine
    pub thrust: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Background,
    Sprite(Sprite),
    /// Text with its top edge centred on `anchor`
    Text {
        text: &'static str,
        size: u16,
        anchor: Vec2,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(sprite) => Some(sprite),
            _ => None,
        })
    }
}

/// Build the draw list for the session's current state.
///
/// The start screen looks the same before the first round and after a crash;
/// after a crash it is drawn over the frozen final frame.
pub fn build_scene(session: &Session) -> Scene {
    let mut commands = vec![DrawCommand::Clear, DrawCommand::Background];

    if session.state != SessionState::AwaitingStart {
        commands.extend(
            session
                .registry
                .iter()
                .map(|entity| DrawCommand::Sprite(sprite_for(entity, session.round_ticks))),
        );
    }

    if session.state.shows_start_screen() {
        let area = Vec2::new(session.tuning.width, session.tuning.height);
        commands.extend(START_SCREEN_TEXT.iter().map(|&(text, size, at)| DrawCommand::Text {
            text,
            size,
            anchor: at * area,
        }));
    }

    Scene { commands }
}

fn sprite_for(entity: Entity<'_>, ticks: u64) -> Sprite {
    match entity {
        Entity::Ship(ship) => Sprite {
            kind: SpriteKind::Ship,
            rect: entity.bounds(),
            angle: if ship.vel.x == 0.0 {
                0.0
            } else {
                ship.vel.x.signum() * SHIP_BANK
            },
            thrust: if ship.vel == Vec2::ZERO { 0.0 } else { 1.0 },
        },
        Entity::Asteroid(asteroid) => Sprite {
            kind: SpriteKind::Asteroid { id: asteroid.id },
            rect: entity.bounds(),
            angle: spin_rate(asteroid.id) * ticks as f32,
            thrust: 0.0,
        },
    }
}

/// Per-asteroid spin in radians per tick, in [-SPIN_PER_TICK, SPIN_PER_TICK]
fn spin_rate(id: u32) -> f32 {
    ((id % 7) as f32 - 3.0) / 3.0 * SPIN_PER_TICK
}
