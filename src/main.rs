//! Flappy Samurai entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use flappy_samurai::platform::storage::LocalStorageBestScore;
    use flappy_samurai::platform::{Action, key_action};
    use flappy_samurai::renderer::{GpuRenderer, InitError};
    use flappy_samurai::sim::{Viewport, autopilot};
    use flappy_samurai::ui::DomScoreboard;
    use flappy_samurai::{Activation, LoopControl, Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageBestScore, DomScoreboard>,
        renderer: GpuRenderer,
        /// A frame callback is pending
        looping: bool,
        /// Demo mode - autopilot plays the game
        autopilot: bool,
    }

    impl Game {
        /// Run one frame; returns whether another should be scheduled
        fn frame(&mut self, time: f64) -> bool {
            if self.autopilot
                && autopilot::should_flap(self.session.state(), self.session.tuning())
            {
                self.session.flap();
            }

            let control = self.session.frame(time, &mut self.renderer);
            self.looping = control == LoopControl::Continue;
            self.looping
        }

        /// Apply an input action; returns whether the loop needs restarting
        fn handle(&mut self, action: Action) -> bool {
            match action {
                Action::Activate => {
                    self.session.activate() == Activation::Restarted && !self.looping
                }
                Action::ToggleAutopilot => {
                    self.autopilot = !self.autopilot;
                    log::info!("Autopilot: {}", self.autopilot);
                    false
                }
            }
        }
    }

    pub async fn run() -> Result<(), InitError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Flappy Samurai starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The drawing surface is fixed-size; read it once
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);
        let viewport = Viewport::new(width as f32, height as f32);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        // Nothing starts until the GPU side is ready
        let renderer = GpuRenderer::new(surface, &adapter, width, height).await?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(
            Tuning::load(),
            viewport,
            seed,
            LocalStorageBestScore::new(),
            DomScoreboard::new(&document),
        );
        session.reset();

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            looping: true,
            autopilot: false,
        }));

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Flappy Samurai running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if let Some(action) = key_action(&event.key()) {
                    event.prevent_default();
                    dispatch(&game, action);
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Mouse, pen and touch all arrive as pointer events
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                dispatch(&game, Action::Activate);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn dispatch(game: &Rc<RefCell<Game>>, action: Action) {
        let restart = game.borrow_mut().handle(action);
        if restart {
            game.borrow_mut().looping = true;
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = game.borrow_mut().frame(time);
        // Game over leaves the last frame on screen until a restart
        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Flappy Samurai failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_samurai::renderer::HeadlessRenderer;
    use flappy_samurai::sim::{Viewport, autopilot};
    use flappy_samurai::ui::LogScoreboard;
    use flappy_samurai::{LoopControl, MemoryBestScore, Session, Tuning};

    /// Runs played by the headless demo
    const DEMO_RUNS: u64 = 3;
    /// Simulated frame interval (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Cap per run so a perfect autopilot still terminates
    const MAX_FRAMES: u32 = 60 * 120;

    env_logger::init();
    log::info!("Flappy Samurai (native) starting...");
    log::info!(
        "Native mode runs a headless autopilot demo - run with `trunk serve` for the web version"
    );

    let mut session = Session::new(
        Tuning::load(),
        Viewport::new(480.0, 640.0),
        0x5A_4D_55_52,
        MemoryBestScore::default(),
        LogScoreboard::default(),
    );
    let mut renderer = HeadlessRenderer::default();
    let mut now = 0.0;

    for run in 1..=DEMO_RUNS {
        session.reset();
        let mut frames = 0;
        loop {
            if autopilot::should_flap(session.state(), session.tuning()) {
                session.flap();
            }
            now += FRAME_MS;
            frames += 1;
            if session.frame(now, &mut renderer) == LoopControl::Halt || frames >= MAX_FRAMES {
                break;
            }
        }
        println!(
            "Run {}: score {} after {:.1}s (best {})",
            run,
            session.state().score,
            session.state().elapsed_ms / 1000.0,
            session.state().best
        );
    }

    log::info!(
        "Drew {} frames ({} triangles in the last one)",
        renderer.frames,
        renderer.last_triangles
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
