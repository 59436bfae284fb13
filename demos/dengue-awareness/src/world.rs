use awareness_engine::{RandomSource, Viewport};

use crate::animation::AnimationState;
use crate::config::AwarenessConfig;
use crate::interactive::InteractiveSet;
use crate::messages::MessageRotation;
use crate::mosquito::MosquitoPool;
use crate::people::{self, Person};
use crate::scenes::SceneController;

/// Display switches flipped by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Animation,
    DayNight,
    Ambulance,
    Emergency,
    Info,
    Options,
    Updates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub animating: bool,
    pub day: bool,
    pub ambulance: bool,
    pub emergency: bool,
    pub info: bool,
    pub options: bool,
    pub updates: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            animating: true,
            day: true,
            ambulance: true,
            emergency: true,
            info: true,
            options: false,
            updates: false,
        }
    }
}

impl Flags {
    /// Flip one switch and return its new value.
    pub fn toggle(&mut self, which: Toggle) -> bool {
        let flag = match which {
            Toggle::Animation => &mut self.animating,
            Toggle::DayNight => &mut self.day,
            Toggle::Ambulance => &mut self.ambulance,
            Toggle::Emergency => &mut self.emergency,
            Toggle::Info => &mut self.info,
            Toggle::Options => &mut self.options,
            Toggle::Updates => &mut self.updates,
        };
        *flag = !*flag;
        *flag
    }
}

/// Everything that changes while the animation runs.
pub struct World {
    pub config: AwarenessConfig,
    pub flags: Flags,
    pub scenes: SceneController,
    pub mosquitoes: MosquitoPool,
    pub people: Vec<Person>,
    pub messages: MessageRotation,
    pub elements: InteractiveSet,
    pub animation: AnimationState,
    /// Drawable size used to map pointer positions.
    pub viewport: Viewport,
    /// Mosquitoes killed so far.
    pub kills: u32,
}

impl World {
    pub fn new(config: AwarenessConfig) -> Self {
        Self {
            flags: Flags::default(),
            scenes: SceneController::new(config.scene_duration, config.reset_timer_on_select),
            mosquitoes: MosquitoPool::new(&config),
            people: people::roster(),
            messages: MessageRotation::new(config.message_duration),
            elements: InteractiveSet::new(),
            animation: AnimationState::default(),
            viewport: Viewport::default(),
            kills: 0,
            config,
        }
    }

    /// Rebuild per-scene state for the (already current) scene.
    pub fn enter_scene(&mut self, rng: &mut dyn RandomSource) {
        let index = self.scenes.current();
        let spec = self.scenes.spec();
        self.messages.rebuild(index);
        self.mosquitoes.reset(spec.reset, rng);
        self.animation.reset_kill_effect();
        log::info!(
            "scene {}: {} ({} mosquitoes)",
            index + 1,
            spec.name,
            self.mosquitoes.len()
        );
    }

    /// Jump to `index` and rebuild it. Returns false for an unknown scene.
    pub fn select_scene(&mut self, index: usize, rng: &mut dyn RandomSource) -> bool {
        if self.scenes.select(index).is_none() {
            return false;
        }
        self.enter_scene(rng);
        true
    }

    /// Kill the first living mosquito. Returns its index, or None when a
    /// kill is already animating or nothing is alive.
    pub fn trigger_kill(&mut self) -> Option<usize> {
        let index = self.mosquitoes.kill_first_alive()?;
        self.kills += 1;
        log::info!("mosquito {} killed, {} so far", index, self.kills);
        Some(index)
    }

    /// One animated frame: pools, phases, scene timer, message rotation.
    /// Returns the new scene index if the scene auto-advanced.
    pub fn advance(&mut self, dt: f32, rng: &mut dyn RandomSource) -> Option<usize> {
        let spawning = self.scenes.spec().spawns;
        if self.mosquitoes.update(dt, spawning, rng) {
            self.animation.reset_kill_effect();
        }
        for person in &mut self.people {
            person.update(dt);
        }

        self.animation.advance(dt, self.mosquitoes.is_killing());
        self.animation
            .maybe_toggle_rain(rng, self.config.rain_toggle_chance);

        let changed = self.scenes.advance(dt);
        if changed.is_some() {
            // A fresh rotation starts on its first line.
            self.enter_scene(rng);
        } else {
            self.messages.advance(dt);
        }
        changed
    }
}
