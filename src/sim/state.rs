//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]. Resetting a session
//! means constructing a fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Canvas extents the player is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle at `pos` lies entirely inside the canvas
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// The flower center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    /// A player centered in the arena
    pub fn centered(arena: &Arena) -> Self {
        Self {
            pos: arena.center(),
            radius: PLAYER_RADIUS,
        }
    }
}

/// Petals orbiting the player
///
/// Only the count and the shared rotation are stored; positions are
/// derived from the player position on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Petals {
    pub count: u32,
    /// Shared rotation angle in [0, 2π)
    pub rotation: f32,
}

impl Default for Petals {
    fn default() -> Self {
        Self {
            count: INITIAL_PETALS,
            rotation: 0.0,
        }
    }
}

impl Petals {
    /// Advance the shared rotation by one tick
    pub fn rotate(&mut self, speed: f32) {
        self.rotation = normalize_angle(self.rotation + speed);
    }

    /// Orbit angle of petal `index`
    pub fn angle(&self, index: u32) -> f32 {
        std::f32::consts::TAU * index as f32 / self.count as f32 + self.rotation
    }

    /// World position of petal `index` around `center`
    pub fn position(&self, center: Vec2, index: u32) -> Vec2 {
        center + polar_to_cartesian(PETAL_ORBIT, self.angle(index))
    }

    /// All petal positions in index order
    pub fn positions(&self, center: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.count).map(move |i| self.position(center, i))
    }
}

/// A monster homing in on the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Monster {
    /// Step toward `target` by `speed` (pure pursuit)
    pub fn home_toward(&mut self, target: Vec2) {
        let delta = target - self.pos;
        let angle = delta.y.atan2(delta.x);
        self.pos += polar_to_cartesian(self.speed, angle);
    }
}

/// Something that happened during a tick, for the host to act on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A petal destroyed a monster
    MonsterKilled {
        id: u32,
        pos: Vec2,
        /// Score after the kill
        score: u32,
        /// Petal count after the kill
        petals: u32,
    },
    /// A monster reached the player; the session has been reset
    GameOver { final_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawn randomness
    pub rng: Pcg32,
    pub arena: Arena,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub petals: Petals,
    /// Active monsters in spawn order
    pub monsters: Vec<Monster>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            score: 0,
            time_ticks: 0,
            player: Player::centered(&arena),
            petals: Petals::default(),
            monsters: Vec::new(),
            next_id: 1,
        }
    }

    /// Fresh session in the same arena, seeded from this session's RNG
    pub fn next_session(&mut self) -> Self {
        let seed = self.rng.random::<u64>();
        Self::new(seed, self.arena)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Current petal positions in index order
    pub fn petal_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.petals.positions(self.player.pos)
    }
}
