use awareness_engine::{
    Clock, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, Renderer,
    VectorRenderer, Viewport,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because
/// wasm-bindgen cannot export generic structs directly.
///
/// One `tick` is one frame: clock → update (input first, then timers) →
/// render into the vector buffer → present.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: Clock,
    renderer: VectorRenderer,
    config: GameConfig,
    initialized: bool,
    /// This frame's text commands, encoded for the host.
    text_json: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::with_seed(config.seed),
            input: InputQueue::new(),
            clock: Clock::with_max_dt(config.max_dt),
            renderer: VectorRenderer::new(config.viewport),
            config,
            initialized: false,
            text_json: String::from("[]"),
        }
    }

    /// Apply host JSON tuning. Rejected JSON is logged and ignored.
    /// Has no effect once the game is initialized.
    pub fn configure(&mut self, json: &str) {
        if self.initialized {
            log::warn!("configure ignored: game already initialized");
            return;
        }
        match self.game.configure(json) {
            Ok(()) => log::info!("configuration applied"),
            Err(e) => log::warn!("configuration rejected, keeping defaults: {}", e),
        }
    }

    /// Initialize the game. Call once after construction (and configure).
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx = EngineContext::with_seed(self.config.seed);
        self.ctx.viewport = self.renderer.viewport();
        self.clock = Clock::with_max_dt(self.config.max_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The host's drawable area changed. Zero-sized areas are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return;
        }
        self.renderer.set_viewport(viewport);
        self.input.push(InputEvent::Resize { width, height });
    }

    /// Run one frame. `now_ms` is a monotonic host timestamp in milliseconds.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick_millis(now_ms);
        self.ctx
            .begin_frame(dt, self.clock.elapsed(), self.renderer.viewport());

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();
        self.ctx.events.truncate(self.config.max_events);

        self.renderer.clear();
        self.game.render(&mut self.renderer);
        self.renderer.present();

        self.text_json = match self.renderer.texts_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to encode text commands: {}", e);
                String::from("[]")
            }
        };
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn quit_requested(&self) -> bool {
        self.ctx.quit_requested()
    }

    // ---- Pointer accessors for host reads ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.renderer.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.renderer.vertex_count() as u32
    }

    pub fn text_json(&self) -> String {
        self.text_json.clone()
    }

    pub fn game_events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
