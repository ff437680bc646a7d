//! Monster spawning
//!
//! Spawns are driven by wall-clock time, not by tick count. [`Spawner`]
//! accumulates elapsed seconds and reports how many spawns are due;
//! [`spawn_monster`] does the actual placement.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Monster};
use crate::consts::*;

/// Fixed-interval spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns
    pub interval: f32,
    elapsed: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL)
    }
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the number of spawns now due
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt.max(0.0);
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }

    /// Restart the interval from zero
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds until the next spawn
    pub fn remaining(&self) -> f32 {
        (self.interval - self.elapsed).max(0.0)
    }
}

/// Spawn one monster just outside the left or right canvas edge
///
/// Returns the new monster's entity ID.
pub fn spawn_monster(state: &mut GameState) -> u32 {
    let radius = state
        .rng
        .random_range(MONSTER_MIN_RADIUS..MONSTER_MAX_RADIUS);
    let x = if state.rng.random_bool(0.5) {
        -radius
    } else {
        state.arena.width + radius
    };
    let y = state.rng.random_range(0.0..state.arena.height);
    let speed = state
        .rng
        .random_range(MONSTER_MIN_SPEED..MONSTER_MAX_SPEED);

    let id = state.next_entity_id();
    state.monsters.push(Monster {
        id,
        pos: glam::Vec2::new(x, y),
        radius,
        speed,
    });
    log::debug!(
        "Spawned monster {} at ({:.0}, {:.0}) r={:.1} v={:.2}",
        id,
        x,
        y,
        radius,
        speed
    );
    id
}
