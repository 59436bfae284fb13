pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::GameEvent;
pub use crate::core::time::Clock;
pub use input::queue::{InputEvent, InputQueue, PRIMARY_BUTTON};
pub use renderer::traits::{
    Renderer, DrawCommand, Shape, TextCommand, TextSize,
    Color, TextureId, Viewport,
};
pub use renderer::recorder::CommandRecorder;
pub use systems::rng::{RandomSource, Rng, SequenceRng};

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorRenderer, VectorVertex};

pub use extensions::{Easing, lerp, ease};
