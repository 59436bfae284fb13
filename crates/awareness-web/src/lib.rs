pub mod runner;

pub use runner::GameRunner;

// Re-exported so `export_game!` expansions only need this crate in scope.
#[doc(hidden)]
pub use awareness_engine;
#[doc(hidden)]
pub use js_sys;
#[doc(hidden)]
pub use web_sys;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// awareness_web::export_game!(MyGame, "my-game");
/// ```
///
/// Calls made before `game_init()` are logged and answered with a zero value.
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `awareness_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::awareness_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: not initialized, call game_init() first", $game_name);
                    R::default()
                }
            })
        }

        /// Create the game. `game_configure` may follow before the first tick.
        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            if console_log::init_with_level(log::Level::Info).is_err() {
                $crate::web_sys::console::warn_1(&"logger already installed".into());
            }

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: created", $game_name);
        }

        /// Apply JSON tuning, then start the game.
        #[wasm_bindgen]
        pub fn game_configure(json: &str) {
            with_runner(|r| r.configure(json));
        }

        #[wasm_bindgen]
        pub fn game_start() {
            with_runner(|r| {
                r.init();
                log::info!("{}: initialized", $game_name);
            });
        }

        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        /// Tick using the host wall clock, for hosts without a frame timestamp.
        #[wasm_bindgen]
        pub fn game_tick_now() {
            let now_ms = $crate::js_sys::Date::now();
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u8) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32, button: u8) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.vector_vertices_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_text_json() -> String {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or_else(|| String::from("[]"), |r| r.text_json())
            })
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.game_events_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn game_quit_requested() -> bool {
            with_runner(|r| r.quit_requested())
        }
    };
}

#[cfg(test)]
mod tests {
    use awareness_engine::{EngineContext, Game, InputQueue, Renderer};
    use wasm_bindgen::prelude::*;

    pub struct Idle;

    impl Idle {
        pub fn new() -> Self {
            Idle
        }
    }

    impl Game for Idle {
        fn init(&mut self, _ctx: &mut EngineContext) {}
        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
        fn render(&self, _renderer: &mut dyn Renderer) {}
    }

    crate::export_game!(Idle, "idle");

    #[test]
    fn exports_before_init_answer_with_zero_values() {
        game_start();
        game_configure("{}");
        game_tick(16.0);
        game_key_down(27);
        RUNNER.with(|cell| assert!(cell.borrow().is_none()));

        assert!(get_vector_vertices_ptr().is_null());
        assert!(get_game_events_ptr().is_null());
        assert_eq!(get_vector_vertex_count(), 0);
        assert_eq!(get_text_json(), "[]");
        assert_eq!(get_world_width(), 0.0);
        assert!(!game_quit_requested());
    }
}
