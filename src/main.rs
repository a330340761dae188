//! Neon Bricks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use neon_bricks::renderer::CanvasSurface;
    use neon_bricks::{Session, Settings};

    /// Id of the canvas element the game draws into
    const CANVAS_ID: &str = "gameCanvas";

    struct Game {
        session: Session,
        surface: CanvasSurface,
    }

    impl Game {
        /// Run one frame and handle the end of a session
        fn update(&mut self) {
            match self.session.frame(&mut self.surface) {
                Ok(Some(outcome)) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(outcome.message());
                    }
                    self.session.restart();
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("{}", e);
                    self.session.restart();
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Neon Bricks starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(canvas)?;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(settings),
            surface,
        }));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Neon Bricks running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                let latched = if held {
                    g.session.latch.key_down(&key)
                } else {
                    g.session.latch.key_up(&key)
                };
                if latched {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().update();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_bricks::renderer::DrawList;
    use neon_bricks::{Session, Settings};

    env_logger::init();
    log::info!("Neon Bricks (native) starting...");
    log::info!("Native mode runs a headless demo session - serve the wasm build to play");

    let mut settings = Settings::load();
    // Nobody is at the keyboard
    settings.autopilot = true;
    let max_ticks = settings.max_headless_ticks;

    let mut session = Session::new(settings);
    let mut frame = DrawList::new();

    for _ in 0..max_ticks {
        frame.clear();
        match session.frame(&mut frame) {
            Ok(Some(outcome)) => {
                println!(
                    "{} Score {} with {} lives after {} ticks",
                    outcome.message(),
                    session.state.score,
                    session.state.lives,
                    session.state.time_ticks
                );
                return;
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }
    }

    println!(
        "Stopped after {} ticks: score {}/{}, {} lives, last frame had {} draw calls",
        session.state.time_ticks,
        session.state.score,
        session.state.max_score(),
        session.state.lives,
        frame.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
