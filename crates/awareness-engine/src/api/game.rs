use crate::api::types::GameEvent;
use crate::core::time::DEFAULT_MAX_DT;
use crate::input::queue::InputQueue;
use crate::renderer::traits::{Renderer, Viewport};
use crate::systems::rng::{RandomSource, Rng};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Initial drawable size in pixels, until the host reports a resize.
    pub viewport: Viewport,
    /// Seed for the context's random source.
    pub seed: u64,
    /// Largest frame delta the clock will report, in seconds.
    pub max_dt: f32,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 10.0,
            world_height: 10.0,
            viewport: Viewport::default(),
            seed: 42,
            max_dt: DEFAULT_MAX_DT,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply host-supplied JSON tuning. Called before init, if at all.
    fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let _ = json;
        Ok(())
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick: apply input, advance timers, spawn/cull entities.
    /// `ctx.dt` holds this frame's clamped delta.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass: issue this frame's draw commands.
    fn render(&self, renderer: &mut dyn Renderer);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Delta time of the current frame, in seconds.
    pub dt: f32,
    /// Total time since the first frame, in seconds.
    pub elapsed: f64,
    /// Current drawable size in pixels.
    pub viewport: Viewport,
    pub events: Vec<GameEvent>,
    rng: Box<dyn RandomSource>,
    quit_requested: bool,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create a context whose random source is an `Rng` with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(Rng::new(seed)))
    }

    /// Create a context with an injected random source.
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            dt: 0.0,
            elapsed: 0.0,
            viewport: Viewport::default(),
            events: Vec::new(),
            rng,
            quit_requested: false,
        }
    }

    /// The context's random source.
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Replace the random source (e.g. with a scripted one in tests).
    pub fn set_rng(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ask the host to stop the loop after this frame.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Start a new frame: record timing and clear per-frame transient data.
    pub fn begin_frame(&mut self, dt: f32, elapsed: f64, viewport: Viewport) {
        self.dt = dt;
        self.elapsed = elapsed;
        self.viewport = viewport;
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
