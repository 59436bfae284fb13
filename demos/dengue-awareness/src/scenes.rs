//! The nine scenes, as data.
//!
//! Update and draw code never branch on a scene number; they read the
//! current [`SceneSpec`] and act on its fields.

use glam::Vec2;

use crate::mosquito::MosquitoReset;
use crate::people::Role;

pub const SCENE_COUNT: usize = 9;

/// How much water a container prop shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Water {
    Empty,
    /// Follows the animated water level.
    Animated,
}

/// A scene-specific decoration or chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prop {
    LifeCycle { at: Vec2 },
    House { at: Vec2 },
    Container { at: Vec2, water: Water },
    /// Expanding rings; `offset` shifts the ripple phase in seconds.
    Ripple { at: Vec2, offset: f32 },
    PulseRing { at: Vec2 },
    /// Hover/click boxes owned by this scene.
    InteractiveElements,
    /// Role-less figure standing in for "everyone".
    Figure { at: Vec2, scale: f32 },
    /// Drawn only while the ambulance toggle is on.
    Ambulance { at: Vec2 },
    StatsChart,
}

/// Which mosquitoes a scene shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosquitoView {
    Hidden,
    /// The first `n` in pool order, regardless of the alive flag.
    First(usize),
    AllAlive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSpec {
    pub name: &'static str,
    pub roles: &'static [Role],
    pub mosquitoes: MosquitoView,
    pub props: &'static [Prop],
    /// Whether the spawn timer runs in this scene.
    pub spawns: bool,
    pub reset: MosquitoReset,
}

impl SceneSpec {
    pub fn shows_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub static SCENES: [SceneSpec; SCENE_COUNT] = [
    SceneSpec {
        name: "Mosquito Journey Scene",
        roles: &[],
        mosquitoes: MosquitoView::First(3),
        props: &[Prop::LifeCycle { at: v(-3.0, 2.0) }, Prop::House { at: v(-3.0, -2.0) }],
        spawns: false,
        reset: MosquitoReset::Scripted,
    },
    SceneSpec {
        name: "Clean Environment Scene",
        roles: &[Role::Cleaner],
        mosquitoes: MosquitoView::Hidden,
        props: &[
            Prop::House { at: v(-3.0, 0.0) },
            Prop::House { at: v(3.0, 0.0) },
            Prop::Container { at: v(0.0, -2.0), water: Water::Empty },
            Prop::Ripple { at: v(0.0, -2.0), offset: 0.0 },
            Prop::InteractiveElements,
        ],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Dengue Fighter Scene",
        roles: &[Role::Fighter],
        mosquitoes: MosquitoView::AllAlive,
        props: &[Prop::PulseRing { at: v(0.0, 0.0) }],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Stagnant Water Scene",
        roles: &[Role::Inspector],
        mosquitoes: MosquitoView::AllAlive,
        props: &[
            Prop::Container { at: v(-3.0, 1.0), water: Water::Animated },
            Prop::Container { at: v(0.0, 1.0), water: Water::Animated },
            Prop::Container { at: v(3.0, 1.0), water: Water::Animated },
            Prop::Ripple { at: v(-3.0, 1.0), offset: 0.0 },
            Prop::Ripple { at: v(0.0, 1.0), offset: 0.5 },
            Prop::Ripple { at: v(3.0, 1.0), offset: 1.0 },
        ],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Home Inspection Scene",
        roles: &[Role::Inspector],
        mosquitoes: MosquitoView::Hidden,
        props: &[
            Prop::House { at: v(-3.0, 0.0) },
            Prop::Container { at: v(3.0, -2.0), water: Water::Animated },
        ],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Symptoms Scene",
        roles: &[Role::Patient],
        mosquitoes: MosquitoView::Hidden,
        props: &[],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Prevention Methods Scene",
        roles: &[],
        mosquitoes: MosquitoView::Hidden,
        props: &[
            Prop::Figure { at: v(-3.0, 0.0), scale: 1.0 },
            Prop::Figure { at: v(0.0, 0.0), scale: 1.0 },
            Prop::Figure { at: v(3.0, 0.0), scale: 1.0 },
            Prop::Container { at: v(0.0, -2.0), water: Water::Empty },
        ],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Treatment Options Scene",
        roles: &[],
        mosquitoes: MosquitoView::Hidden,
        props: &[
            Prop::Ambulance { at: v(-2.0, 0.0) },
            Prop::Figure { at: v(2.0, 0.0), scale: 1.5 },
        ],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
    SceneSpec {
        name: "Statistics Scene",
        roles: &[],
        mosquitoes: MosquitoView::Hidden,
        props: &[Prop::StatsChart],
        spawns: true,
        reset: MosquitoReset::Swarm,
    },
];

pub fn scene_spec(index: usize) -> Option<&'static SceneSpec> {
    SCENES.get(index)
}

/// Current scene plus the auto-advance timer.
#[derive(Debug, Clone)]
pub struct SceneController {
    current: usize,
    timer: f32,
    duration: f32,
    reset_timer_on_select: bool,
}

impl SceneController {
    pub fn new(duration: f32, reset_timer_on_select: bool) -> Self {
        Self {
            current: 0,
            timer: 0.0,
            duration,
            reset_timer_on_select,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn spec(&self) -> &'static SceneSpec {
        &SCENES[self.current % SCENE_COUNT]
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Accumulate `dt`. Returns the new scene index when the timer ran out.
    pub fn advance(&mut self, dt: f32) -> Option<usize> {
        self.timer += dt.max(0.0);
        if self.timer < self.duration {
            return None;
        }
        self.timer = 0.0;
        self.current = (self.current + 1) % SCENE_COUNT;
        Some(self.current)
    }

    /// Jump to `index`. Out-of-range indices are ignored. Re-selecting the
    /// current scene restarts it.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= SCENE_COUNT {
            return None;
        }
        self.current = index;
        if self.reset_timer_on_select {
            self.timer = 0.0;
        }
        Some(index)
    }
}
