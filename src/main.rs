//! Bloom Defense entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use bloom_defense::consts::*;
    use bloom_defense::platform::Hud;
    use bloom_defense::renderer::SdfRenderState;
    use bloom_defense::sim::Arena;
    use bloom_defense::{Game, Settings};

    /// Score text and game-over alert in the page
    struct DomHud {
        document: Document,
    }

    impl Hud for DomHud {
        fn set_score_text(&mut self, score: u32) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        fn notify_game_over(&mut self, final_score: u32) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("Game Over! Your score: {final_score}"));
            }
        }
    }

    /// Game instance holding all host state
    struct Host {
        game: Game,
        hud: DomHud,
        render_state: Option<SdfRenderState>,
        last_time: f64,
        // FPS tracking
        show_fps: bool,
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Host {
        fn new(game: Game, document: Document, show_fps: bool) -> Self {
            Self {
                game,
                hud: DomHud { document },
                render_state: None,
                last_time: 0.0,
                show_fps,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance the simulation by wall-clock time
        fn update(&mut self, dt: f32, time: f64) {
            self.game.update(dt, &mut self.hud);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                self.game.render(render_state);
                match render_state.present(time) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn update_fps(&self) {
            if !self.show_fps {
                return;
            }
            if let Some(el) = self.hud.document.get_element_by_id("fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Bloom Defense starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #game-canvas element");
                return;
            }
        };

        let arena = Arena::default();
        canvas.set_width(arena.width as u32);
        canvas.set_height(arena.height as u32);

        let settings = Settings::load();
        // Write back so the stored JSON lists every field
        settings.save();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Game::new(seed, arena, &settings);
        let host = Rc::new(RefCell::new(Host::new(
            game,
            document.clone(),
            settings.show_fps,
        )));

        match SdfRenderState::for_canvas(canvas, arena).await {
            Ok(mut render_state) => {
                render_state.set_start_time(js_sys::Date::now());
                host.borrow_mut().render_state = Some(render_state);
            }
            Err(e) => {
                log::error!("Renderer unavailable: {}", e);
                return;
            }
        }

        host.borrow_mut().hud.set_score_text(0);

        setup_input_handlers(&document, host.clone());

        // Start game loop
        request_animation_frame(host);

        log::info!("Bloom Defense running!");
    }

    fn setup_input_handlers(document: &Document, host: Rc<RefCell<Host>>) {
        // Key down / key up
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.handle_key(&event.key(), pressed);
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (click outside) - key-ups would be lost
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                host.borrow_mut().game.input.release_all();
                log::info!("Released held keys (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();

            // Calculate delta time
            let dt = if h.last_time > 0.0 {
                ((time - h.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            h.last_time = time;

            h.update(dt, time);
            h.render(time);
            h.update_fps();
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bloom Defense (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    // Optional first argument: seconds to simulate
    let seconds = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(60.0);
    headless::run(seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bloom_defense::consts::SIM_DT;
    use bloom_defense::platform::LogHud;
    use bloom_defense::renderer::DrawList;
    use bloom_defense::sim::{Arena, GameEvent};
    use bloom_defense::{Game, Settings};

    /// Keys held in turn, one per second, so the flower sweeps a square
    const PATROL: [&str; 4] = ["d", "s", "a", "w"];

    pub fn run(seconds: f32) {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(0x5EED);
        let mut game = Game::new(seed, Arena::default(), &settings);
        let mut hud = LogHud::default();
        let mut frame = DrawList::new();

        let frames = (seconds / SIM_DT).round() as u32;
        let frames_per_leg = (1.0 / SIM_DT).round() as u32;
        let mut kills = 0u32;
        let mut held: Option<&str> = None;

        for i in 0..frames {
            let leg = PATROL[((i / frames_per_leg) % PATROL.len() as u32) as usize];
            if held != Some(leg) {
                if let Some(key) = held {
                    game.handle_key(key, false);
                }
                game.handle_key(leg, true);
                held = Some(leg);
            }

            for event in game.update(SIM_DT, &mut hud) {
                if matches!(event, GameEvent::MonsterKilled { .. }) {
                    kills += 1;
                }
            }

            frame.commands.clear();
            game.render(&mut frame);
        }

        log::info!(
            "Simulated {:.0}s: {} kills, {} game overs, score {}, {} petals, {} monsters, {} draw calls last frame",
            seconds,
            kills,
            hud.games_over,
            game.state.score,
            game.state.petals.count,
            game.state.monsters.len(),
            frame.commands.len()
        );
    }
}
