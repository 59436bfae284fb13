use wasm_bindgen::prelude::*;

mod animation;
mod config;
mod controls;
mod draw;
mod game;
mod interactive;
mod messages;
mod mosquito;
mod people;
mod scenes;
mod stats;
mod world;

pub use config::AwarenessConfig;
pub use game::DengueAwareness;

awareness_web::export_game!(DengueAwareness, "dengue-awareness");
