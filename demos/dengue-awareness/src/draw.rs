//! Frame rendering. Reads the world, issues draw and text commands.
//!
//! Everything is drawn in scene space ([-5, 5] on both axes, y up). Figures
//! are modelled around their own origin and placed with `at`/`scaled`.

use std::f32::consts::PI;

use awareness_engine::{Color, DrawCommand, Renderer, Shape, TextCommand, TextSize, TextureId};
use glam::Vec2;

use crate::animation::LifeStage;
use crate::people::{Person, Role};
use crate::scenes::{MosquitoView, Prop, SceneSpec, Water};
use crate::stats::{bar_fractions, YEARLY_STATS};
use crate::world::World;

// ── Host texture slots ───────────────────────────────────────────────

const TEX_WATER: TextureId = TextureId(1);
const TEX_HOUSE: TextureId = TextureId(2);
const TEX_PERSON: TextureId = TextureId(3);
const TEX_AMBULANCE: TextureId = TextureId(4);
const TEX_GRASS: TextureId = TextureId(5);
const TEX_SKY_DAY: TextureId = TextureId(6);
const TEX_SKY_NIGHT: TextureId = TextureId(7);
const TEX_RAIN: TextureId = TextureId(8);
const TEX_RIPPLE: TextureId = TextureId(9);

// ── Palette ──────────────────────────────────────────────────────────

const DAY_SKY: Color = Color::rgb(0.529, 0.808, 0.922);
const NIGHT_SKY: Color = Color::rgb(0.1, 0.1, 0.2);
const GRASS: Color = Color::rgb(0.196, 0.804, 0.196);
const HOUSE: Color = Color::rgb(0.8, 0.4, 0.2);
const ROOF: Color = Color::rgb(0.5, 0.2, 0.1);
const DOOR: Color = Color::rgb(0.4, 0.2, 0.1);
const WATER: Color = Color::rgb(0.0, 0.5, 1.0);
const CONTAINER: Color = Color::rgb(0.55, 0.55, 0.6);
const AMBULANCE: Color = Color::RED;
const SKIN: Color = Color::rgb(1.0, 0.8, 0.6);
const SLEEVE: Color = Color::rgb(0.0, 0.5, 1.0);
const FIGURE: Color = Color::rgb(0.5, 0.5, 0.55);
const RAIN: Color = Color::new(0.784, 0.784, 1.0, 0.5);
const PANEL: Color = Color::new(0.0, 0.0, 0.0, 0.7);
const HIGHLIGHT: Color = Color::new(1.0, 1.0, 0.0, 0.25);
const SELECTED: Color = Color::new(1.0, 1.0, 0.0, 0.5);

// ── Layout ───────────────────────────────────────────────────────────

const LINE: f32 = 0.02;
const MOSQUITO_SCALE: f32 = 0.5;
/// Wing flap frequency relative to the wing phase.
const WING_SPEED: f32 = 0.1;
const RAIN_DROPS: u32 = 50;
const STATS_BAR_WIDTH: f32 = 0.8;
const STATS_MAX_HEIGHT: f32 = 3.0;
const STATS_START_X: f32 = -3.5;
const STATS_SPACING: f32 = 1.2;
const STATS_BASELINE: f32 = -3.0;

/// Key help shown by the options panel.
pub const OPTIONS: [&str; 17] = [
    "1: Mosquito Journey Scene",
    "2: Clean Environment Scene",
    "3: Dengue Fighter Scene",
    "4: Stagnant Water Scene",
    "5: Home Inspection Scene",
    "6: Symptoms Scene",
    "7: Prevention Methods Scene",
    "8: Treatment Options Scene",
    "9: Statistics Scene",
    "M/m: Toggle animation",
    "N/n: Toggle day/night mode",
    "D/d: Kill mosquitoes",
    "A/a: Show ambulance",
    "E/e: Emergency contacts",
    "I/i: Show information",
    "O/o: Show options",
    "U/u: Show updates",
];

pub const UPDATES: [&str; 3] = [
    "Latest updates",
    "Weekly clean-up drive this Saturday",
    "Free dengue testing at community clinics",
];

pub const EMERGENCY: &str = "Emergency: call your local health hotline";

// ── Primitives ───────────────────────────────────────────────────────

fn rect(min: Vec2, max: Vec2) -> Shape {
    Shape::Rect { min, size: max - min }
}

fn line(from: Vec2, to: Vec2) -> Shape {
    Shape::Line { from, to, width: LINE }
}

fn fill(r: &mut dyn Renderer, min: Vec2, max: Vec2, color: Color) {
    r.draw(&DrawCommand::new(rect(min, max), color));
}

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Deterministic per-drop noise in [0, 1).
fn drop_hash(seed: u32) -> f32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    (n >> 8) as f32 / (1u32 << 24) as f32
}

// ── Figures ──────────────────────────────────────────────────────────

pub fn mosquito(r: &mut dyn Renderer, pos: Vec2, scale: f32, wing_phase: f32) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(pos).scaled(scale);

    r.draw(&place(line(v(0.0, 0.0), v(0.0, 0.5)), Color::rgb(0.2, 0.2, 0.2)));

    let flap = ((wing_phase * WING_SPEED).sin() * 0.5).cos() * 0.2;
    let wing = Color::new(0.3, 0.3, 0.3, 0.8);
    r.draw(&place(Shape::Triangle([v(0.0, 0.3), v(-flap, 0.4), v(0.0, 0.5)]), wing));
    r.draw(&place(Shape::Triangle([v(0.0, 0.3), v(flap, 0.4), v(0.0, 0.5)]), wing));

    r.draw(&place(Shape::Point { at: v(0.0, 0.5), size: 0.06 }, Color::rgb(0.1, 0.1, 0.1)));
}

fn role_color(role: Option<Role>) -> Color {
    match role {
        Some(Role::Fighter) => Color::rgb(0.0, 0.5, 1.0),
        Some(Role::Cleaner) => Color::rgb(0.0, 0.8, 0.0),
        Some(Role::Inspector) => Color::rgb(1.0, 0.5, 0.0),
        Some(Role::Patient) => Color::rgb(1.0, 0.8, 0.8),
        None => FIGURE,
    }
}

/// A person with swinging limbs. `role` None draws a plain figure.
pub fn person(r: &mut dyn Renderer, pos: Vec2, scale: f32, role: Option<Role>, phase: f32) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(pos).scaled(scale);
    let bob = (phase * 2.0).sin() * 0.05;
    let arm = (phase * 4.0).sin() * 0.3;
    let leg = (phase * 4.0 + PI).sin() * 0.2;
    let (arm_x, leg_x) = (arm.cos(), leg.cos());

    r.draw(&place(rect(v(-0.1, -0.1 + bob), v(0.1, 0.3 + bob)), role_color(role)));
    r.draw(
        &place(Shape::Circle { center: v(0.0, 0.4 + bob), radius: 0.1 }, SKIN).textured(TEX_PERSON),
    );

    for side in [-1.0, 1.0] {
        r.draw(&place(line(v(0.1 * side, 0.2 + bob), v(0.2 * side * arm_x, 0.1 + bob)), SLEEVE));
        r.draw(&place(line(v(0.05 * side, -0.1 + bob), v(0.1 * side * leg_x, -0.3 + bob)), SLEEVE));
    }

    let hand = v(0.2 * arm_x, 0.1 + bob);
    match role {
        Some(Role::Fighter) => {
            r.draw(&place(line(hand, v(0.4 * arm_x, bob)), Color::rgb(0.5, 0.5, 0.5)));
        }
        Some(Role::Cleaner) => {
            let left = v(-hand.x, hand.y);
            r.draw(&place(line(left, v(-0.4 * arm_x, -0.1 + bob)), Color::rgb(0.6, 0.3, 0.1)));
        }
        Some(Role::Inspector) => {
            r.draw(&place(rect(v(hand.x, bob), v(0.3 * arm_x, 0.1 + bob)), Color::WHITE));
        }
        Some(Role::Patient) => {
            r.draw(&place(line(hand, v(0.3 * arm_x, 0.2 + bob)), Color::RED));
        }
        None => {}
    }
}

fn house(r: &mut dyn Renderer, at: Vec2) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(at);
    r.draw(&place(rect(v(-0.5, -0.5), v(0.5, 0.5)), HOUSE).textured(TEX_HOUSE));
    r.draw(&place(Shape::Triangle([v(-0.6, 0.5), v(0.0, 0.8), v(0.6, 0.5)]), ROOF));
    r.draw(&place(rect(v(-0.1, -0.5), v(0.1, 0.0)), DOOR));
}

fn container(r: &mut dyn Renderer, at: Vec2, level: f32) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(at);
    r.draw(&place(rect(v(-0.3, -0.2), v(0.3, 0.2)), CONTAINER));
    if level > 0.0 {
        r.draw(&place(rect(v(-0.25, -0.15), v(0.25, -0.15 + level * 0.3)), WATER).textured(TEX_WATER));
    }
}

fn ripple(r: &mut dyn Renderer, at: Vec2, time: f32) {
    for i in 0..3 {
        let t = time + i as f32 * 0.5;
        let alpha = (1.0 - t * 0.5).clamp(0.0, 1.0);
        let shape = Shape::Ring { center: Vec2::ZERO, radius: 0.1 + t * 0.2, width: LINE };
        r.draw(&DrawCommand::new(shape, WATER.with_alpha(alpha)).at(at).textured(TEX_RIPPLE));
    }
}

fn pulse(r: &mut dyn Renderer, at: Vec2, phase: f32) {
    let shape = Shape::Ring { center: Vec2::ZERO, radius: 0.2 + phase * 0.1, width: LINE };
    r.draw(&DrawCommand::new(shape, Color::RED.with_alpha(1.0 - phase)).at(at));
}

fn life_cycle(r: &mut dyn Renderer, at: Vec2, phase: f32) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(at);
    match LifeStage::from_phase(phase) {
        LifeStage::Egg => {
            for i in 0..5 {
                let egg = Shape::Point { at: v(i as f32 * 0.1 - 0.2, 0.0), size: 0.05 };
                r.draw(&place(egg, Color::rgb(0.8, 0.8, 0.8)));
            }
        }
        LifeStage::Larva => r.draw(&place(line(v(-0.2, 0.0), v(0.2, 0.0)), Color::rgb(0.6, 0.6, 0.6))),
        LifeStage::Pupa => r.draw(&place(
            Shape::Triangle([v(-0.1, -0.1), v(0.1, -0.1), v(0.0, 0.1)]),
            Color::rgb(0.4, 0.4, 0.4),
        )),
        LifeStage::Adult => mosquito(r, at, MOSQUITO_SCALE, phase * 10.0),
    }
}

fn ambulance(r: &mut dyn Renderer, at: Vec2) {
    let place = |shape: Shape, color: Color| DrawCommand::new(shape, color).at(at);
    r.draw(&place(rect(v(-0.8, -0.4), v(0.8, 0.4)), AMBULANCE).textured(TEX_AMBULANCE));
    r.draw(&place(rect(v(-0.2, -0.07), v(0.2, 0.07)), Color::WHITE));
    r.draw(&place(rect(v(-0.07, -0.2), v(0.07, 0.2)), Color::WHITE));
}

fn kill_effect(r: &mut dyn Renderer, at: Vec2, t: f32) {
    if t > 1.0 {
        return;
    }
    let fade = 1.0 - t;
    let disc = Shape::Circle { center: Vec2::ZERO, radius: t * 0.5 };
    r.draw(&DrawCommand::new(disc, Color::RED.with_alpha(fade * 0.5)).at(at));
    let mark = Color::WHITE.with_alpha(fade);
    for (from, to) in [(v(-0.2, -0.2), v(0.2, 0.2)), (v(-0.2, 0.2), v(0.2, -0.2))] {
        r.draw(&DrawCommand::new(Shape::Line { from, to, width: LINE * 2.0 }, mark).at(at));
    }
}

fn stats_chart(r: &mut dyn Renderer) {
    fill(r, v(-4.5, -4.5), v(4.5, 4.5), Color::new(0.2, 0.2, 0.2, 0.8));
    r.text(&TextCommand::new("Dengue Statistics (2018-2023)", v(-1.0, 3.0)));

    for (i, stats) in YEARLY_STATS.iter().enumerate() {
        let x = STATS_START_X + i as f32 * STATS_SPACING;
        let (cases, deaths, prevention) = bar_fractions(stats);
        let bar = |from: f32, to: f32, fraction: f32| {
            rect(
                v(x + STATS_BAR_WIDTH * from, STATS_BASELINE),
                v(x + STATS_BAR_WIDTH * to, STATS_BASELINE + fraction * STATS_MAX_HEIGHT),
            )
        };
        r.draw(&DrawCommand::new(bar(0.0, 1.0, cases), Color::RED));
        r.draw(&DrawCommand::new(bar(0.25, 0.75, deaths), Color::rgb(0.7, 0.0, 0.0)));
        r.draw(&DrawCommand::new(bar(0.5, 1.0, prevention), Color::GREEN));
        r.text(
            &TextCommand::new(stats.year.to_string(), v(x + STATS_BAR_WIDTH * 0.5 - 0.1, -3.2))
                .with_size(TextSize::Small),
        );
    }
}

// ── Frame ────────────────────────────────────────────────────────────

fn background(r: &mut dyn Renderer, day: bool) {
    let (sky, texture) = if day { (DAY_SKY, TEX_SKY_DAY) } else { (NIGHT_SKY, TEX_SKY_NIGHT) };
    r.draw(&DrawCommand::new(rect(v(-5.0, -5.0), v(5.0, 5.0)), sky).textured(texture));
    r.draw(&DrawCommand::new(rect(v(-5.0, -5.0), v(5.0, -3.0)), GRASS).textured(TEX_GRASS));
}

fn props(r: &mut dyn Renderer, world: &World, spec: &SceneSpec) {
    let anim = &world.animation;
    for prop in spec.props {
        match *prop {
            Prop::LifeCycle { at } => life_cycle(r, at, anim.life_cycle),
            Prop::House { at } => house(r, at),
            Prop::Container { at, water } => {
                let level = match water {
                    Water::Empty => 0.0,
                    Water::Animated => anim.water_level,
                };
                container(r, at, level);
            }
            Prop::Ripple { at, offset } => ripple(r, at, anim.ripple + offset),
            Prop::PulseRing { at } => pulse(r, at, anim.pulse),
            Prop::InteractiveElements => {
                for element in world.elements.elements() {
                    if !(element.hovered || element.clicked) {
                        continue;
                    }
                    let half = element.size / 2.0;
                    let color = if element.clicked { SELECTED } else { HIGHLIGHT };
                    fill(r, element.center - half, element.center + half, color);
                    if element.clicked {
                        r.text(
                            &TextCommand::new(element.label, element.center - half)
                                .with_size(TextSize::Small),
                        );
                    }
                }
            }
            Prop::Figure { at, scale } => person(r, at, scale, None, 1.0),
            Prop::Ambulance { at } => {
                if world.flags.ambulance {
                    ambulance(r, at);
                }
            }
            Prop::StatsChart => stats_chart(r),
        }
    }
}

fn cast(r: &mut dyn Renderer, people: &[Person], spec: &SceneSpec) {
    for p in people.iter().filter(|p| spec.shows_role(p.role)) {
        person(r, p.pos, p.scale, Some(p.role), p.phase);
    }
}

fn swarm(r: &mut dyn Renderer, world: &World, spec: &SceneSpec) {
    match spec.mosquitoes {
        MosquitoView::Hidden => {}
        MosquitoView::First(n) => {
            for m in world.mosquitoes.iter().take(n) {
                mosquito(r, m.pos, MOSQUITO_SCALE, m.wing_phase);
            }
        }
        MosquitoView::AllAlive => {
            for m in world.mosquitoes.alive() {
                mosquito(r, m.pos, MOSQUITO_SCALE, m.wing_phase);
            }
        }
    }
}

fn rain(r: &mut dyn Renderer, phase: f32) {
    for i in 0..RAIN_DROPS {
        let x = -4.5 + drop_hash(i * 2) * 9.0;
        let y = 4.5 - (phase + drop_hash(i * 2 + 1) * 2.0);
        r.draw(&DrawCommand::new(rect(v(x, y - 0.2), v(x + 0.1, y)), RAIN).textured(TEX_RAIN));
    }
}

fn scene_banner(r: &mut dyn Renderer, spec: &SceneSpec) {
    fill(r, v(-4.5, 3.5), v(4.5, 4.5), Color::RED);
    let x = -0.15 * spec.name.len() as f32 / 2.0;
    r.text(&TextCommand::new(spec.name, v(x, 4.0)));
}

fn options_panel(r: &mut dyn Renderer) {
    fill(r, v(-4.5, 3.5), v(4.5, 4.5), PANEL);
    for (i, text) in OPTIONS.iter().enumerate() {
        r.text(&TextCommand::new(*text, v(-4.3, 4.3 - i as f32 * 0.18)).with_size(TextSize::Small));
    }
}

fn emergency_banner(r: &mut dyn Renderer) {
    fill(r, v(-4.0, 3.0), v(4.0, 3.5), Color::RED);
    r.text(&TextCommand::new(EMERGENCY, v(-3.8, 3.15)).with_size(TextSize::Small));
}

fn updates_panel(r: &mut dyn Renderer) {
    fill(r, v(2.0, -3.4), v(4.5, -2.4), PANEL);
    for (i, text) in UPDATES.iter().enumerate() {
        r.text(&TextCommand::new(*text, v(2.1, -2.65 - i as f32 * 0.25)).with_size(TextSize::Small));
    }
}

fn info_banner(r: &mut dyn Renderer, world: &World) {
    let Some(message) = world.messages.active() else {
        return;
    };
    let fade = message.fade();
    fill(r, v(-4.5, -4.5), v(4.5, -3.5), PANEL.with_alpha(0.7 * fade));
    r.text(&TextCommand::new(message.text, v(-4.0, -4.0)).with_color(Color::WHITE.with_alpha(fade)));
}

/// Draw one complete frame of `world`.
pub fn frame(r: &mut dyn Renderer, world: &World) {
    let spec = world.scenes.spec();

    background(r, world.flags.day);
    props(r, world, spec);
    cast(r, &world.people, spec);
    swarm(r, world, spec);
    if spec.mosquitoes != MosquitoView::Hidden {
        if let Some(kill) = world.mosquitoes.kill_animation() {
            kill_effect(r, kill.pos, world.animation.kill_effect);
        }
    }

    if world.animation.raining {
        rain(r, world.animation.rain);
    }
    scene_banner(r, spec);
    if world.flags.options {
        options_panel(r);
    }
    if world.flags.emergency {
        emergency_banner(r);
    }
    if world.flags.updates {
        updates_panel(r);
    }
    if world.flags.info {
        info_banner(r, world);
    }
}
