//! Bloom Defense - A single-screen flower-vs-monsters arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, petals, homing, collisions)
//! - `renderer`: Render surface interface and WebGPU SDF renderer
//! - `platform`: Keyboard input mapping and HUD adapters
//! - `game`: Host-facing session driver (fixed timestep, spawn timer, resets)
//! - `settings`: Persisted player preferences

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock step accepted from the host (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player (flower center)
    pub const PLAYER_RADIUS: f32 = 30.0;
    /// Distance moved per tick for each held direction
    pub const PLAYER_STEP: f32 = 5.0;

    /// Petals
    pub const INITIAL_PETALS: u32 = 6;
    pub const PETAL_ORBIT: f32 = 60.0;
    pub const PETAL_RADIUS: f32 = 15.0;
    /// Petal rotation per tick (radians)
    pub const ROTATION_SPEED: f32 = 0.05;

    /// Monsters
    pub const MONSTER_MIN_RADIUS: f32 = 20.0;
    pub const MONSTER_MAX_RADIUS: f32 = 40.0;
    pub const MONSTER_MIN_SPEED: f32 = 1.0;
    pub const MONSTER_MAX_SPEED: f32 = 3.0;
    /// Seconds between monster spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;

    /// Points per monster destroyed by a petal
    pub const KILL_SCORE: u32 = 10;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
