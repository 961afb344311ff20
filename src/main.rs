//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use dino_dash::platform::web::{AnimationFrameScheduler, FrameCallback};
    use dino_dash::platform::{FrameLoop, Intent, IntentSender, is_activate_key};
    use dino_dash::renderer::canvas::CanvasRenderer;
    use dino_dash::{Game, Tuning};

    /// Everything the frame callback touches
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        frame_loop: FrameLoop<AnimationFrameScheduler>,
    }

    impl App {
        fn on_animation_frame(&mut self) {
            let App {
                game,
                renderer,
                frame_loop,
            } = self;
            frame_loop.on_frame(|| {
                game.frame(renderer);
            });
        }
    }

    /// Tuning from an optional `<script id="dino-tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("dino-tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dino Dash starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let tuning = load_tuning(&document);
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);

        // Sprite sizes must be known before the game can size hitboxes
        let mut renderer = CanvasRenderer::new(&canvas)?;
        renderer.load_sprites(tuning.all_sprites()).await?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, tuning, &renderer)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let input = game.input();

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            frame_loop: FrameLoop::new(AnimationFrameScheduler::new(callback.clone())),
        }));
        {
            let app = app.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                app.borrow_mut().on_animation_frame();
            }));
        }

        setup_input_handlers(&canvas, input)?;
        setup_lifecycle(app.clone())?;

        app.borrow_mut().frame_loop.start();

        log::info!("Dino Dash running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, input: IntentSender) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Click / tap on the canvas
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                input.post(Intent::Activate);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if is_activate_key(&event.key()) {
                    // Keep space/arrow from scrolling the page
                    event.prevent_default();
                    input.post(Intent::Activate);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Stop scheduling frames when the page is torn down, resume if it is
    /// restored from the back/forward cache
    fn setup_lifecycle(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().frame_loop.stop();
            });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().frame_loop.start();
            });
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Dino Dash failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dino Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dino_dash::Game;
    use dino_dash::Tuning;
    use dino_dash::renderer::HeadlessRenderer;
    use dino_dash::sim::{GameEvent, SpriteId};
    use glam::Vec2;

    /// About five minutes at 60 fps
    const MAX_FRAMES: u64 = 18_000;
    /// Jump when the next obstacle is this many ticks away
    const LOOKAHEAD_TICKS: f32 = 12.0;

    fn sprite_size(sprite: &SpriteId) -> Option<Vec2> {
        if sprite.as_str().starts_with("miukuMauku") {
            Some(Vec2::new(64.0, 80.0))
        } else {
            Some(Vec2::new(40.0, 40.0))
        }
    }

    fn should_jump(game: &Game) -> bool {
        let state = game.state();
        let player_right = game.tuning().player_x + game.catalog().player_size.x;
        let reach = state.obstacle_move_speed * LOOKAHEAD_TICKS;

        state.player.is_grounded()
            && state.obstacles.iter().any(|o| {
                let gap = o.x - player_right;
                gap > 0.0 && gap < reach
            })
    }

    pub fn run() {
        let mut game = match Game::new(42, Tuning::default(), &sprite_size) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Could not set up game: {}", e);
                return;
            }
        };
        let mut renderer = HeadlessRenderer::default();

        game.activate();
        for _ in 0..MAX_FRAMES {
            if should_jump(&game) {
                game.activate();
            }
            for event in game.frame(&mut renderer) {
                if let GameEvent::RunEnded { score } = event {
                    println!("Autopilot crashed after {} ticks, score {:05}", game.state().tick_count, score);
                    return;
                }
            }
        }
        println!(
            "Autopilot survived {} frames, score {}",
            MAX_FRAMES,
            game.state().score_text()
        );
    }
}
