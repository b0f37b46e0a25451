//! Session state and entity lifecycle
//!
//! A `Session` owns everything one game window plays through: the state
//! machine, the live entities and the seeded RNG every spawn draws from.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, SpawnEdge};
use super::entity::EntityRegistry;
use super::ship::Ship;
use crate::tuning::Tuning;

/// Which systems run on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Start screen before the first round
    AwaitingStart,
    /// Round in progress
    Playing,
    /// Ship was hit; start screen over the final frame
    Over,
}

impl SessionState {
    /// States that show the title and instructions
    pub fn shows_start_screen(self) -> bool {
        matches!(self, SessionState::AwaitingStart | SessionState::Over)
    }
}

/// Things that happened during the last tick, for audio and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Fresh entities were spawned and play began
    RoundStarted { round: u32 },
    /// An asteroid left the play area and was recycled
    AsteroidRespawned { id: u32, edge: SpawnEdge },
    /// The ship was hit; the round is over
    ShipDestroyed {
        asteroid_ids: Vec<u32>,
        ticks_survived: u64,
    },
    /// The player asked to close the game
    QuitRequested,
}

/// One game window's worth of state
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub state: SessionState,
    pub registry: EntityRegistry,
    /// Ticks since the session was created
    pub time_ticks: u64,
    /// Ticks since the current round started
    pub round_ticks: u64,
    /// Rounds started so far
    pub rounds: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    pub(super) rng: Pcg32,
    next_id: u32,
}

impl Session {
    /// New session on the start screen. Entities are spawned up front so the
    /// registry is never empty, and replaced when play starts.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut session = Self {
            seed,
            tuning,
            state: SessionState::AwaitingStart,
            registry: EntityRegistry::new(Ship::new(&Tuning::default()), Vec::new()),
            time_ticks: 0,
            round_ticks: 0,
            rounds: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        session.registry = session.spawn_registry();
        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Discard every entity and start a new round with a fresh field
    pub fn begin_round(&mut self) {
        self.registry = self.spawn_registry();
        self.state = SessionState::Playing;
        self.round_ticks = 0;
        self.rounds += 1;
        log::info!(
            "Round {} started: 1 ship, {} asteroids",
            self.rounds,
            self.registry.asteroids.len()
        );
        self.events.push(GameEvent::RoundStarted { round: self.rounds });
    }

    /// End the current round after the ship was hit
    pub fn end_round(&mut self, asteroid_ids: Vec<u32>) {
        self.state = SessionState::Over;
        log::info!(
            "Ship destroyed by asteroid(s) {:?} after {} ticks",
            asteroid_ids,
            self.round_ticks
        );
        self.events.push(GameEvent::ShipDestroyed {
            asteroid_ids,
            ticks_survived: self.round_ticks,
        });
    }

    fn spawn_registry(&mut self) -> EntityRegistry {
        let ship = Ship::new(&self.tuning);
        let mut asteroids = Vec::with_capacity(self.tuning.asteroid_count);
        for _ in 0..self.tuning.asteroid_count {
            let id = self.next_entity_id();
            asteroids.push(Asteroid::spawn(id, &mut self.rng, &self.tuning));
        }
        EntityRegistry::new(ship, asteroids)
    }
}
