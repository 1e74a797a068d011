//! Strider entry point
//!
//! Handles platform-specific wiring and drives the simulation loop. The
//! renderer is external: on wasm each frame's snapshot is handed to an
//! optional JS `renderFrame(json)` hook, and the final score goes to an
//! optional JS `submitScore(score)` hook (the remote-persistence
//! collaborator). Native builds run a headless scripted demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::PointerEvent;

    use strider::{Runner, Tuning};

    /// One live match plus the tuning needed to start the next
    struct Game {
        runner: Runner,
        tuning: Tuning,
    }

    impl Game {
        fn new(tuning: Tuning, over_flag: Rc<RefCell<bool>>) -> Self {
            let hook = Box::new(move |score: u64| {
                *over_flag.borrow_mut() = true;
                submit_score(score);
            });
            Self {
                runner: Runner::new(tuning.clone(), hook),
                tuning,
            }
        }
    }

    /// Forward the final score to the page's persistence hook, if present.
    fn submit_score(score: u64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str("submitScore")) {
            if let Some(f) = hook.dyn_ref::<js_sys::Function>() {
                let _ = f.call1(&JsValue::NULL, &JsValue::from_f64(score as f64));
                return;
            }
        }
        log::warn!("no submitScore hook on window; score {score} dropped");
    }

    /// Hand the frame to the page's renderer hook, if present.
    fn render_frame(json: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str("renderFrame")) {
            if let Some(f) = hook.dyn_ref::<js_sys::Function>() {
                let _ = f.call1(&JsValue::NULL, &JsValue::from_str(json));
            }
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(f.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?;

        let over_flag = Rc::new(RefCell::new(false));
        let game = Rc::new(RefCell::new(Game::new(Tuning::default(), over_flag.clone())));

        // pressStart / pressEnd: the only two input signals the core takes
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().runner.press_start();
            });
            canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().runner.press_end();
            });
            canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Retry on pointer-down once the previous match reported
        {
            let game = game.clone();
            let over_flag = over_flag.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                if *over_flag.borrow() {
                    let mut g = game.borrow_mut();
                    let tuning = g.tuning.clone();
                    *over_flag.borrow_mut() = false;
                    *g = Game::new(tuning, over_flag.clone());
                }
            });
            canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Release a held press when the tab hides: pointerup never arrives
        // for a press that outlives focus, and a stuck press would damp the
        // next jump. The FrameClock absorbs the timestamp gap on resume.
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().runner.press_end();
                    log::info!("tab hidden, press released");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // rAF loop; the FrameClock inside the runner absorbs tab-hidden gaps
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let game = game.clone();
            *g.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
                let snapshot = game.borrow_mut().runner.tick(timestamp_ms);
                match serde_json::to_string(&snapshot) {
                    Ok(json) => render_frame(&json),
                    Err(e) => log::warn!("snapshot serialization failed: {e}"),
                }
                request_animation_frame(f.borrow().as_ref().unwrap());
            }));
        }
        request_animation_frame(g.borrow().as_ref().unwrap());

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use strider::consts::{PLAYER_X, PLAYER_WIDTH, REFERENCE_FRAME_MS};
    use strider::sim::Phase;
    use strider::{Runner, Tuning};

    env_logger::init();
    log::info!("strider headless demo starting");

    let reported = std::rc::Rc::new(std::cell::Cell::new(None));
    let r = reported.clone();
    let mut runner = Runner::new(
        Tuning::default(),
        Box::new(move |score| r.set(Some(score))),
    );

    // Scripted pilot: jump whenever a jumpable obstacle closes in
    let mut tick = 0u64;
    while reported.get().is_none() && tick < 120_000 {
        let state = runner.state();
        let should_jump = state
            .obstacles
            .iter()
            .filter(|o| o.kind != strider::sim::ObstacleKind::FlyingLarge)
            .any(|o| {
                let gap = o.pos.x - (PLAYER_X + PLAYER_WIDTH);
                gap > 0.0 && gap < state.speed * 12.0
            });
        if should_jump && !state.player.jumping && state.phase == Phase::Running {
            runner.press_start();
        }

        let snapshot = runner.tick(tick as f64 * f64::from(REFERENCE_FRAME_MS));
        if tick % 600 == 0 {
            log::info!(
                "t={}s score={} speed={:.2} obstacles={}",
                tick / 60,
                snapshot.score,
                runner.state().speed,
                snapshot.obstacles.len()
            );
        }
        tick += 1;
    }

    match reported.get() {
        Some(score) => println!("game over: final score {score}"),
        None => println!("demo cut off while still alive"),
    }
}
