//! Host-facing session driver
//!
//! Owns the simulation state, keyboard state and spawn timer. Hosts feed it
//! key events and elapsed wall-clock time; it runs fixed-step ticks and
//! reports score changes and game-over to the HUD.

use crate::consts::*;
use crate::platform::{Hud, InputState};
use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{Arena, GameEvent, GameState, Spawner, spawn_monster, tick};

/// A running game session plus its host-side timers
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    spawner: Spawner,
    accumulator: f32,
    /// Completed runs since startup
    pub runs: u32,
}

impl Game {
    pub fn new(seed: u64, arena: Arena, settings: &Settings) -> Self {
        log::info!(
            "New session: seed {} arena {}x{}",
            seed,
            arena.width,
            arena.height
        );
        Self {
            state: GameState::new(seed, arena),
            input: InputState::new(settings.keymap.clone()),
            spawner: Spawner::default(),
            accumulator: 0.0,
            runs: 0,
        }
    }

    /// Record a key press/release; unbound keys are ignored
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.handle_key(key, pressed)
    }

    /// Spawn one monster now (the spawn timer callback)
    pub fn spawn(&mut self) -> u32 {
        spawn_monster(&mut self.state)
    }

    /// Run exactly one simulation tick and report its events to the HUD
    pub fn tick(&mut self, hud: &mut impl Hud) -> Vec<GameEvent> {
        let input = self.input.tick_input();
        let events = tick(&mut self.state, &input);

        for event in &events {
            match event {
                GameEvent::MonsterKilled { score, .. } => hud.set_score_text(*score),
                GameEvent::GameOver { final_score } => {
                    hud.notify_game_over(*final_score);
                    hud.set_score_text(self.state.score);
                    self.restart_timers();
                    self.runs += 1;
                    log::info!(
                        "Session {} started (seed {})",
                        self.runs + 1,
                        self.state.seed
                    );
                }
            }
        }

        events
    }

    /// Advance by `dt` seconds of wall-clock time
    ///
    /// Spawns whatever the spawn timer says is due, then runs as many fixed
    /// ticks as the accumulated time allows.
    pub fn update(&mut self, dt: f32, hud: &mut impl Hud) -> Vec<GameEvent> {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        for _ in 0..self.spawner.advance(dt) {
            self.spawn();
        }

        self.accumulator += dt;
        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;

            let tick_events = self.tick(hud);
            let game_over = tick_events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }));
            events.extend(tick_events);
            if game_over {
                // Leftover time belongs to the finished run
                break;
            }
        }

        events
    }

    /// Draw the current state
    pub fn render(&self, surface: &mut impl RenderSurface) {
        draw_frame(&self.state, surface);
    }

    /// Seconds until the next spawn
    pub fn next_spawn_in(&self) -> f32 {
        self.spawner.remaining()
    }

    /// Host-side part of a session reset
    fn restart_timers(&mut self) {
        self.spawner.reset();
        self.accumulator = 0.0;
        self.input.release_all();
    }
}
