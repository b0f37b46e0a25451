//! Fixed-rate simulation tick
//!
//! One call advances the session by exactly one frame.

use serde::{Deserialize, Serialize};

use super::collision::colliding_asteroids;
use super::ship::DirectionKeys;
use super::state::{GameEvent, Session, SessionState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction keys
    pub keys: DirectionKeys,
    /// Start signal (space held)
    pub start: bool,
    /// Quit signal (window close)
    pub quit: bool,
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Advance the session by one tick
///
/// Quit is honoured in every state. On the start screen only the start
/// signal does anything; that tick swaps in fresh entities and nothing moves
/// until the next one. While playing: ship, then asteroids, then collision.
pub fn tick(session: &mut Session, input: &TickInput) -> Flow {
    session.events.clear();

    if input.quit {
        log::info!(
            "Quit requested in state {:?} after {} ticks",
            session.state,
            session.time_ticks
        );
        session.events.push(GameEvent::QuitRequested);
        return Flow::Quit;
    }

    session.time_ticks += 1;

    match session.state {
        SessionState::AwaitingStart | SessionState::Over => {
            if input.start {
                session.begin_round();
            }
        }
        SessionState::Playing => step_playing(session, input),
    }

    Flow::Continue
}

fn step_playing(session: &mut Session, input: &TickInput) {
    session.round_ticks += 1;

    let tuning = &session.tuning;
    let registry = &mut session.registry;

    registry.ship.update(input.keys, tuning);

    for asteroid in &mut registry.asteroids {
        if asteroid.update(&mut session.rng, tuning) {
            session.events.push(GameEvent::AsteroidRespawned {
                id: asteroid.id,
                edge: asteroid.edge(),
            });
        }
    }

    let hits = colliding_asteroids(&registry.ship, &registry.asteroids);
    if !hits.is_empty() {
        session.end_round(hits);
    }
}
