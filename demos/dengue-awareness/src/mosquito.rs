//! The mosquito pool: spawning, heuristic flight, deferred kills.
//!
//! Velocities are expressed per nominal 16 ms frame, and each update scales
//! them by `dt / NOMINAL_FRAME`, so a zero delta holds the swarm in place.

use awareness_engine::RandomSource;
use glam::Vec2;

use crate::config::AwarenessConfig;

/// Flight area; positions never leave it.
pub const BOUNDS_MIN: Vec2 = Vec2::new(-4.5, -2.5);
pub const BOUNDS_MAX: Vec2 = Vec2::new(4.5, 4.5);

/// Area a swarm reset scatters mosquitoes over.
const SWARM_MIN: Vec2 = Vec2::new(-4.0, -2.0);
const SWARM_MAX: Vec2 = Vec2::new(4.0, 4.0);

/// Per-axis speed band for new mosquitoes, in units per frame.
const SPEED_MIN: f32 = 0.01;
const SPEED_MAX: f32 = 0.04;
/// Nominal cruising speed; the cap is 1.5x this.
const CRUISE_SPEED: f32 = 0.02;
const MAX_SPEED: f32 = CRUISE_SPEED * 1.5;
/// Full width of the per-frame velocity jitter.
const JITTER: f32 = 0.001;
const WING_STEP: f32 = 0.1;
const BOUNCE_DAMPING: f32 = 0.95;

/// Frame length the per-frame constants were tuned for.
pub const NOMINAL_FRAME: f32 = 0.016;

const SCRIPTED_POS: Vec2 = Vec2::new(-2.0, 2.0);
const SCRIPTED_VEL: Vec2 = Vec2::new(0.02, -0.01);

/// How a scene repopulates the pool when it becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosquitoReset {
    /// One mosquito on a fixed path, for the journey narrative.
    Scripted,
    /// A fresh random swarm.
    Swarm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mosquito {
    pub pos: Vec2,
    pub vel: Vec2,
    pub wing_phase: f32,
    pub alive: bool,
}

impl Mosquito {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            wing_phase: 0.0,
            alive: true,
        }
    }

    /// Fly for `frames` nominal frames: move, flap, bounce, jitter, cap speed.
    fn step(&mut self, frames: f32, rng: &mut dyn RandomSource) {
        if frames <= 0.0 {
            return;
        }
        self.pos += self.vel * frames;
        self.wing_phase += WING_STEP * frames;

        if self.pos.x < BOUNDS_MIN.x || self.pos.x > BOUNDS_MAX.x {
            self.vel.x = -self.vel.x * BOUNCE_DAMPING;
            self.pos.x = self.pos.x.clamp(BOUNDS_MIN.x, BOUNDS_MAX.x);
        }
        if self.pos.y < BOUNDS_MIN.y || self.pos.y > BOUNDS_MAX.y {
            self.vel.y = -self.vel.y * BOUNCE_DAMPING;
            self.pos.y = self.pos.y.clamp(BOUNDS_MIN.y, BOUNDS_MAX.y);
        }

        self.vel.x += (rng.next_f32() - 0.5) * JITTER * frames;
        self.vel.y += (rng.next_f32() - 0.5) * JITTER * frames;
        self.vel = self.vel.clamp_length_max(MAX_SPEED);
    }
}

/// A kill in flight. The target is already dead; it leaves the pool when
/// the animation completes.
#[derive(Debug, Clone, PartialEq)]
pub struct KillAnimation {
    pub target: usize,
    /// Where the effect is drawn.
    pub pos: Vec2,
    pub elapsed: f32,
}

fn random_velocity(rng: &mut dyn RandomSource) -> Vec2 {
    let mut axis = || {
        let speed = rng.range(SPEED_MIN, SPEED_MAX);
        if rng.coin() {
            -speed
        } else {
            speed
        }
    };
    let x = axis();
    let y = axis();
    Vec2::new(x, y)
}

fn random_point(rng: &mut dyn RandomSource, min: Vec2, max: Vec2) -> Vec2 {
    let x = rng.range(min.x, max.x);
    let y = rng.range(min.y, max.y);
    Vec2::new(x, y)
}

pub struct MosquitoPool {
    mosquitoes: Vec<Mosquito>,
    spawn_timer: f32,
    kill: Option<KillAnimation>,
    max_population: usize,
    swarm_size: usize,
    spawn_interval: f32,
    kill_duration: f32,
}

impl MosquitoPool {
    pub fn new(config: &AwarenessConfig) -> Self {
        Self {
            mosquitoes: Vec::new(),
            spawn_timer: 0.0,
            kill: None,
            max_population: config.max_mosquitoes,
            swarm_size: config.swarm_size.min(config.max_mosquitoes),
            spawn_interval: config.spawn_interval,
            kill_duration: config.kill_duration,
        }
    }

    pub fn len(&self) -> usize {
        self.mosquitoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mosquitoes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Mosquito> {
        self.mosquitoes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mosquito> {
        self.mosquitoes.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Mosquito> {
        self.mosquitoes.iter().filter(|m| m.alive)
    }

    pub fn max_population(&self) -> usize {
        self.max_population
    }

    pub fn kill_animation(&self) -> Option<&KillAnimation> {
        self.kill.as_ref()
    }

    pub fn is_killing(&self) -> bool {
        self.kill.is_some()
    }

    /// Add one mosquito at a random spot in the flight area.
    /// Returns false when the pool is full.
    pub fn spawn(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.mosquitoes.len() >= self.max_population {
            return false;
        }
        let pos = random_point(rng, BOUNDS_MIN, BOUNDS_MAX);
        let vel = random_velocity(rng);
        self.mosquitoes.push(Mosquito::new(pos, vel));
        log::debug!("mosquito spawned at ({:.2}, {:.2}), population {}", pos.x, pos.y, self.len());
        true
    }

    /// Advance the pool by `dt` seconds. Returns true when a pending kill
    /// completed and the dead were removed this frame.
    pub fn update(&mut self, dt: f32, spawning: bool, rng: &mut dyn RandomSource) -> bool {
        let dt = dt.max(0.0);

        if spawning {
            self.spawn_timer += dt;
            if self.spawn_timer >= self.spawn_interval && self.spawn(rng) {
                self.spawn_timer = 0.0;
            }
        }

        let frames = dt / NOMINAL_FRAME;
        for m in self.mosquitoes.iter_mut().filter(|m| m.alive) {
            m.step(frames, rng);
        }

        let finished = match self.kill.as_mut() {
            Some(kill) => {
                kill.elapsed += dt;
                kill.elapsed >= self.kill_duration
            }
            None => false,
        };
        if finished {
            self.kill = None;
            self.mosquitoes.retain(|m| m.alive);
        }
        finished
    }

    /// Kill the mosquito at `index`. Ignored while another kill is
    /// animating, or when the index is stale or already dead.
    pub fn kill(&mut self, index: usize) -> bool {
        if self.kill.is_some() {
            return false;
        }
        let Some(m) = self.mosquitoes.get_mut(index).filter(|m| m.alive) else {
            return false;
        };
        m.alive = false;
        self.kill = Some(KillAnimation {
            target: index,
            pos: m.pos,
            elapsed: 0.0,
        });
        true
    }

    /// Kill the first living mosquito in pool order.
    pub fn kill_first_alive(&mut self) -> Option<usize> {
        if self.kill.is_some() {
            return None;
        }
        let index = self.mosquitoes.iter().position(|m| m.alive)?;
        self.kill(index).then_some(index)
    }

    /// Repopulate for a newly current scene. Cancels any pending kill.
    pub fn reset(&mut self, reset: MosquitoReset, rng: &mut dyn RandomSource) {
        self.mosquitoes.clear();
        self.kill = None;
        self.spawn_timer = 0.0;
        match reset {
            MosquitoReset::Scripted => {
                self.mosquitoes.push(Mosquito::new(SCRIPTED_POS, SCRIPTED_VEL));
            }
            MosquitoReset::Swarm => {
                for _ in 0..self.swarm_size {
                    let pos = random_point(rng, SWARM_MIN, SWARM_MAX);
                    let vel = random_velocity(rng);
                    self.mosquitoes.push(Mosquito::new(pos, vel));
                }
            }
        }
    }
}
