//! Mind's Eye entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, MouseEvent};

    use mind_eye::audio::AudioManager;
    use mind_eye::consts::*;
    use mind_eye::game::{Phase, ProgressSink, Session, Signal, SignalSink};
    use mind_eye::platform::LocalStore;
    use mind_eye::settings::Settings;

    /// Level transition splash duration in milliseconds
    const TRANSITION_MS: f64 = 1000.0;

    /// Audio handle shared between the session and the mute button
    #[derive(Clone)]
    struct SharedAudio(Rc<RefCell<AudioManager>>);

    impl SignalSink for SharedAudio {
        fn play(&mut self, signal: Signal) {
            self.0.borrow_mut().play(signal);
        }
    }

    /// Console reporting for level changes
    struct ConsoleProgress;

    impl ProgressSink for ConsoleProgress {
        fn level_advance(&mut self, level_index: u32, total_correct: u32) {
            log::info!(
                "Level {} up next ({} correct so far)",
                level_index,
                total_correct
            );
        }

        fn session_reset(&mut self) {
            log::info!("Session reset");
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        audio: SharedAudio,
        settings: Settings,
        last_time: f64,
        /// Countdown for the level transition splash
        transition_left: f64,
        // Track phase to catch the entry into Transition
        last_phase: Phase,
        started: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let audio = SharedAudio(Rc::new(RefCell::new(AudioManager::from_settings(&settings))));
            let session = Session::new(
                seed,
                Box::new(LocalStore::new()),
                Box::new(audio.clone()),
                Some(Box::new(ConsoleProgress)),
            );
            Self {
                session,
                audio,
                settings,
                last_time: 0.0,
                transition_left: 0.0,
                last_phase: Phase::Memorize,
                started: false,
            }
        }

        /// Advance the memorization and transition countdowns
        fn update(&mut self, dt_ms: f64) {
            if !self.started {
                return;
            }
            // Cap dt so a backgrounded tab doesn't eat the whole countdown
            let dt_ms = dt_ms.min(100.0);

            let phase = self.session.phase();
            if phase != self.last_phase {
                if phase == Phase::Transition {
                    self.transition_left = TRANSITION_MS;
                }
                self.last_phase = phase;
            }

            match phase {
                Phase::Memorize => self.session.update_timer(dt_ms as f32),
                Phase::Transition => {
                    self.transition_left -= dt_ms;
                    if self.transition_left <= 0.0 {
                        self.session.next_level();
                        rebuild_board(&self.session);
                    }
                }
                _ => {}
            }
        }

        fn toggle_mute(&mut self) {
            let muted = !self.audio.0.borrow().muted();
            self.audio.0.borrow_mut().set_muted(muted);
            self.settings.muted = muted;
            self.settings.save();
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(game: &Game) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let session = &game.session;

        if let Some(el) = document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&format!("Score: {}", session.score())));
        }
        if let Some(el) = document.get_element_by_id("hud-best") {
            el.set_text_content(Some(&format!("Best: {}", session.best_score())));
        }
        if let Some(el) = document.get_element_by_id("hud-level") {
            el.set_text_content(Some(&format!("Level {}", session.level_index())));
        }

        // Status line mirrors the phase
        if let Some(el) = document.get_element_by_id("status-text") {
            let text = match session.phase() {
                Phase::Memorize => "Memorize!",
                Phase::Input => "Go!",
                Phase::Transition => "Next Level!",
                Phase::GameOver | Phase::Complete => "",
            };
            el.set_text_content(Some(text));
        }

        // Start overlay
        if let Some(el) = document.get_element_by_id("start-overlay") {
            let class = if game.started {
                "overlay hidden"
            } else {
                "overlay"
            };
            let _ = el.set_attribute("class", class);
        }

        // Game over overlay with final stats
        if let Some(el) = document.get_element_by_id("game-over") {
            if game.started && session.phase() == Phase::GameOver {
                let _ = el.set_attribute("class", "overlay");
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&format!("Final Score: {}", session.score())));
                }
                if let Some(best_el) = document.get_element_by_id("final-best") {
                    best_el.set_text_content(Some(&format!("Best: {}", session.best_score())));
                }
            } else {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }

        // Mute button label
        if let Some(el) = document.get_element_by_id("mute-btn") {
            let muted = game.audio.0.borrow().muted();
            el.set_text_content(Some(if muted { "Unmute" } else { "Mute" }));
        }
    }

    /// Sync tile elements with the current level
    fn update_board(game: &Game) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let session = &game.session;
        let memorizing = session.phase() == Phase::Memorize;

        for tile in &session.level().tiles {
            let Some(el) = document.get_element_by_id(&format!("tile-{}", tile.id)) else {
                continue;
            };
            let class = match tile.correct {
                Some(true) => "tile correct",
                Some(false) => "tile wrong",
                None if memorizing => "tile revealed",
                None => "tile",
            };
            let _ = el.set_attribute("class", class);

            // Numbers show during memorization and on judged tiles
            let text = if memorizing || tile.selected {
                tile.number.to_string()
            } else {
                String::new()
            };
            el.set_text_content(Some(&text));
        }
    }

    /// Recreate tile elements for the current level
    fn rebuild_board(session: &Session) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let Some(board) = document.get_element_by_id("board") else {
            return;
        };
        board.set_inner_html("");

        for tile in &session.level().tiles {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            el.set_id(&format!("tile-{}", tile.id));
            let _ = el.set_attribute("class", "tile revealed");
            let _ = el.set_attribute(
                "style",
                &format!("left:{}px;top:{}px", tile.pos.x, tile.pos.y),
            );
            el.set_text_content(Some(&tile.number.to_string()));
            let _ = board.append_child(&el);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mind's Eye starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        // Size the board to match the placement coordinates
        if let Some(board) = document.get_element_by_id("board") {
            let _ = board.set_attribute(
                "style",
                &format!("width:{}px;height:{}px", BOARD_WIDTH, BOARD_HEIGHT),
            );
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        rebuild_board(&game.borrow().session);

        setup_board_handler(game.clone());
        setup_start_button(game.clone());
        setup_play_again_button(game.clone());
        setup_mute_button(game.clone());

        request_animation_frame(game);

        log::info!("Mind's Eye running!");
    }

    /// One click listener on the board; tiles are matched by element id
    fn setup_board_handler(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(board) = document.get_element_by_id("board") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target() else { return };
                let Ok(el) = target.dyn_into::<Element>() else { return };
                let id = el.id();
                let Some(raw) = id.strip_prefix("tile-") else { return };
                let Ok(tile_id) = raw.parse::<u32>() else { return };
                game.borrow_mut().session.select_tile(tile_id);
            });
            let _ =
                board.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.started = true;
                // Browsers unlock audio on the first user gesture
                g.audio.0.borrow().resume();
                log::info!("Run started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_again_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("play-again-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.session.reset();
                g.started = false;
                g.last_phase = Phase::Memorize;
                rebuild_board(&g.session);
                log::info!("Back to the start screen");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_mute_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("mute-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms);
            update_hud(&g);
            update_board(&g);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mind's Eye (native) starting...");
    log::info!("The browser build is the playable one - run with `trunk serve`");

    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted round against the in-memory store, printed to stdout
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use mind_eye::consts::{MEMORIZE_MS, TILES_PER_LEVEL};
    use mind_eye::game::{Session, Signal, SignalSink};
    use mind_eye::platform::MemoryStore;

    // Prints signals instead of playing them
    struct LogSink;

    impl SignalSink for LogSink {
        fn play(&mut self, signal: Signal) {
            println!("  signal: {:?}", signal);
        }
    }

    println!("\nScripted round:");
    let mut session = Session::new(42, Box::new(MemoryStore::new()), Box::new(LogSink), None);
    println!(
        "Level {} sequence: {:?}",
        session.level_index(),
        session.level().sequence
    );

    session.update_timer(MEMORIZE_MS);
    for id in 0..TILES_PER_LEVEL {
        session.select_tile(id);
    }
    println!(
        "Level solved: score {}, next up level {}",
        session.score(),
        session.level_index()
    );

    session.next_level();
    session.update_timer(MEMORIZE_MS);
    session.select_tile(1); // deliberate miss
    println!("Missed on purpose: phase {:?}", session.phase());

    session.reset();
    println!("Best after reset: {}", session.best_score());
}
