pub mod buffer;
pub mod runner;

pub use buffer::BufferRenderer;
pub use runner::GameRunner;
pub use orrery_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`, and the game type must provide `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::orrery_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Build and initialize the game. `data_json` optionally replaces the
        /// built-in data set. Fails (throws in JS) on invalid data or a second call.
        #[wasm_bindgen]
        pub fn game_init(data_json: Option<String>) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            RUNNER.with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    *slot = Some($crate::GameRunner::new(<$game_type>::new()));
                }
            });

            match with_runner(|r| r.init(data_json.as_deref())) {
                Ok(()) => {
                    log::info!("{}: initialized", $game_name);
                    Ok(())
                }
                Err(e) => {
                    log::error!("{}: init failed: {}", $game_name, e);
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.dispatch(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_click(x: f32, y: f32) {
            with_runner(|r| r.dispatch(InputEvent::PointerClick { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_drag(dx: f32, dy: f32) {
            with_runner(|r| r.dispatch(InputEvent::Drag { dx, dy }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.dispatch(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.dispatch(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_control(id: u32, value: f32) {
            with_runner(|r| r.dispatch(InputEvent::Control { id, value }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.dispatch(InputEvent::Resize { width, height }));
        }

        /// Pending UI messages as a JSON array.
        #[wasm_bindgen]
        pub fn game_take_messages() -> String {
            with_runner(|r| r.take_messages_json())
        }

        // ---- Buffer accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_instance_floats() -> u32 {
            with_runner(|r| r.instance_floats())
        }

        #[wasm_bindgen]
        pub fn get_translucent_start() -> u32 {
            with_runner(|r| r.translucent_start())
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_background() -> u32 {
            with_runner(|r| r.background())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }
    };
}
