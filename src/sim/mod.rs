//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, monster_reaches_player, petal_hit, sd_circle};
pub use spawner::{Spawner, spawn_monster};
pub use state::{Arena, GameEvent, GameState, Monster, Petals, Player};
pub use tick::{TickInput, tick};
