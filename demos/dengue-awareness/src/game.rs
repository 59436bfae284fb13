//! Dengue Awareness: nine illustrated scenes on a 15-second rotation.
//!
//! Keyboard toggles and digit shortcuts, hover/click boxes in the clean
//! environment scene, a mosquito swarm that can be thinned with `D`.

use awareness_engine::{EngineContext, Game, GameConfig, GameEvent, InputQueue, Renderer};

use crate::config::AwarenessConfig;
use crate::controls::{Command, InputController};
use crate::draw;
use crate::world::World;

// ── World layout ─────────────────────────────────────────────────────

/// Scene space spans [-5, 5] on both axes.
const WORLD_SIZE: f32 = 10.0;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = new scene index.
pub const EVENT_SCENE_CHANGED: f32 = 1.0;
/// a = pool index of the victim, b = kills so far.
pub const EVENT_MOSQUITO_KILLED: f32 = 2.0;
/// a = element index.
pub const EVENT_ELEMENT_SELECTED: f32 = 3.0;

pub struct DengueAwareness {
    world: World,
    input: InputController,
}

impl DengueAwareness {
    pub fn new() -> Self {
        Self::with_config(AwarenessConfig::default())
    }

    pub fn with_config(config: AwarenessConfig) -> Self {
        Self {
            world: World::new(config),
            input: InputController,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn apply(&mut self, command: Command, ctx: &mut EngineContext) {
        let world = &mut self.world;
        match command {
            Command::SelectScene(index) => {
                if world.select_scene(index, ctx.rng()) {
                    ctx.emit_event(GameEvent::new(EVENT_SCENE_CHANGED, index as f32, 0.0, 0.0));
                }
            }
            Command::Toggle(which) => {
                let on = world.flags.toggle(which);
                log::debug!("{:?} {}", which, if on { "on" } else { "off" });
            }
            Command::KillMosquito => {
                if let Some(index) = world.trigger_kill() {
                    ctx.emit_event(GameEvent::new(
                        EVENT_MOSQUITO_KILLED,
                        index as f32,
                        world.kills as f32,
                        0.0,
                    ));
                }
            }
            Command::Quit => {
                log::info!("quit requested");
                ctx.request_quit();
            }
            Command::Hover(point) => world.elements.hover(point),
            Command::Click(point) => {
                if let Some(index) = world.elements.click(point) {
                    ctx.emit_event(GameEvent::new(EVENT_ELEMENT_SELECTED, index as f32, 0.0, 0.0));
                }
            }
        }
    }
}

impl Default for DengueAwareness {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for DengueAwareness {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_SIZE,
            world_height: WORLD_SIZE,
            seed: self.world.config.seed,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let config = AwarenessConfig::from_json(json)?;
        *self = Self::with_config(config);
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.world = World::new(self.world.config.clone());
        if ctx.viewport.is_valid() {
            self.world.viewport = ctx.viewport;
        }
        self.world.enter_scene(ctx.rng());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Input first, in arrival order ────────────────────────────
        for event in input.iter() {
            if let Some(command) = self.input.translate(event, &mut self.world.viewport) {
                self.apply(command, ctx);
            }
        }

        // ── Timers ───────────────────────────────────────────────────
        if !self.world.flags.animating {
            return;
        }
        let dt = ctx.dt;
        if let Some(scene) = self.world.advance(dt, ctx.rng()) {
            ctx.emit_event(GameEvent::new(EVENT_SCENE_CHANGED, scene as f32, 0.0, 0.0));
        }
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        draw::frame(renderer, &self.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awareness_engine::{CommandRecorder, InputEvent, SequenceRng, Viewport};

    const FRAME: f32 = 0.016;

    fn started() -> (DengueAwareness, EngineContext) {
        let mut game = DengueAwareness::new();
        let mut ctx = EngineContext::with_seed(game.config().seed);
        ctx.viewport = Viewport::new(800.0, 600.0);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut DengueAwareness, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        let viewport = ctx.viewport;
        let elapsed = ctx.elapsed + dt as f64;
        ctx.begin_frame(dt, elapsed, viewport);
        game.update(ctx, input);
    }

    fn press(game: &mut DengueAwareness, ctx: &mut EngineContext, event: InputEvent) {
        let mut input = InputQueue::new();
        input.push(event);
        tick(game, ctx, &input, 0.0);
    }

    fn key(c: char) -> InputEvent {
        InputEvent::KeyDown { key_code: c as u32 }
    }

    #[test]
    fn five_seconds_in_the_journey_scene() {
        let (mut game, mut ctx) = started();
        assert_eq!(game.world().scenes.current(), 0);
        assert_eq!(game.world().mosquitoes.len(), 1);
        assert_eq!(game.world().messages.active_index(), Some(0));

        let input = InputQueue::new();
        for _ in 0..313 {
            tick(&mut game, &mut ctx, &input, FRAME);
        }
        assert_eq!(game.world().messages.active_index(), Some(1));
        assert_eq!(game.world().scenes.current(), 0);
        assert_eq!(game.world().mosquitoes.len(), 1);
    }

    #[test]
    fn digit_key_selects_scene_without_resetting_timer() {
        let (mut game, mut ctx) = started();
        let input = InputQueue::new();
        for _ in 0..10 {
            tick(&mut game, &mut ctx, &input, 1.0);
        }
        press(&mut game, &mut ctx, key('3'));
        assert_eq!(game.world().scenes.current(), 2);
        assert_eq!(game.world().scenes.timer(), 10.0);
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_SCENE_CHANGED, 2.0, 0.0, 0.0)]);

        for _ in 0..5 {
            tick(&mut game, &mut ctx, &input, 1.0);
        }
        assert_eq!(game.world().scenes.current(), 3);
    }

    #[test]
    fn paused_animation_still_takes_input() {
        let (mut game, mut ctx) = started();
        press(&mut game, &mut ctx, key('m'));
        assert!(!game.world().flags.animating);

        let input = InputQueue::new();
        for _ in 0..100 {
            tick(&mut game, &mut ctx, &input, 1.0);
        }
        assert_eq!(game.world().scenes.current(), 0);
        assert_eq!(game.world().scenes.timer(), 0.0);

        press(&mut game, &mut ctx, key('5'));
        assert_eq!(game.world().scenes.current(), 4);
        press(&mut game, &mut ctx, key('M'));
        assert!(game.world().flags.animating);
    }

    #[test]
    fn kill_key_counts_once_per_animation() {
        let (mut game, mut ctx) = started();
        ctx.set_rng(Box::new(SequenceRng::constant(0.5)));
        press(&mut game, &mut ctx, key('d'));
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_MOSQUITO_KILLED);
        press(&mut game, &mut ctx, key('D'));
        assert!(ctx.events.is_empty());
        assert_eq!(game.world().kills, 1);

        let input = InputQueue::new();
        for _ in 0..63 {
            tick(&mut game, &mut ctx, &input, FRAME);
        }
        assert!(game.world().mosquitoes.is_empty());
        assert!(!game.world().mosquitoes.is_killing());
    }

    #[test]
    fn click_selects_element_in_scene_space() {
        let (mut game, mut ctx) = started();
        press(&mut game, &mut ctx, key('2'));
        // (300, 240) px in 800x600 maps to (-1.25, 1.0); a miss.
        press(&mut game, &mut ctx, InputEvent::PointerDown { x: 300.0, y: 240.0, button: 0 });
        assert_eq!(game.world().elements.selected(), None);
        // (160, 240) px maps to (-3.0, 1.0), the water container.
        press(&mut game, &mut ctx, InputEvent::PointerDown { x: 160.0, y: 240.0, button: 0 });
        assert_eq!(game.world().elements.selected(), Some(0));
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_ELEMENT_SELECTED, 0.0, 0.0, 0.0)]);
    }

    #[test]
    fn resize_changes_pointer_mapping() {
        let (mut game, mut ctx) = started();
        let mut input = InputQueue::new();
        input.push(InputEvent::Resize { width: 400.0, height: 300.0 });
        input.push(InputEvent::PointerMove { x: 200.0, y: 150.0 });
        tick(&mut game, &mut ctx, &input, 0.0);
        assert_eq!(game.world().viewport, Viewport::new(400.0, 300.0));
        let hovered: Vec<bool> = game.world().elements.elements().iter().map(|e| e.hovered).collect();
        assert_eq!(hovered, vec![false, true, false]);
    }

    #[test]
    fn escape_requests_quit() {
        let (mut game, mut ctx) = started();
        press(&mut game, &mut ctx, InputEvent::KeyDown { key_code: 27 });
        assert!(ctx.quit_requested());
    }

    #[test]
    fn configure_applies_partial_json() {
        let mut game = DengueAwareness::new();
        game.configure(r#"{"scene_duration": 3.0, "seed": 9}"#).unwrap();
        assert_eq!(game.config().seed, 9);
        assert!(game.configure("{oops").is_err());
        assert_eq!(game.config().seed, 9);
        assert_eq!(game.world().config.scene_duration, 3.0);

        let mut ctx = EngineContext::with_seed(9);
        game.init(&mut ctx);
        let input = InputQueue::new();
        tick(&mut game, &mut ctx, &input, 3.0);
        assert_eq!(game.world().scenes.current(), 1);
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_SCENE_CHANGED, 1.0, 0.0, 0.0)]);
    }

    #[test]
    fn out_of_range_configuration_keeps_previous_settings() {
        let mut game = DengueAwareness::new();
        assert!(game.configure(r#"{"max_mosquitoes": 4611686018427387903}"#).is_err());
        assert!(game.configure(r#"{"scene_duration": 0.0}"#).is_err());
        assert_eq!(game.world().config, AwarenessConfig::default());

        let mut ctx = EngineContext::with_seed(game.config().seed);
        game.init(&mut ctx);
        let input = InputQueue::new();
        for _ in 0..3 {
            tick(&mut game, &mut ctx, &input, 0.0);
        }
        assert_eq!(game.world().scenes.current(), 0);
    }

    #[test]
    fn render_issues_a_frame() {
        let (game, _ctx) = started();
        let mut rec = CommandRecorder::new(Viewport::new(800.0, 600.0));
        game.render(&mut rec);
        assert!(!rec.commands().is_empty());
        assert!(rec.has_text("Mosquito Journey Scene"));
    }
}
