pub mod traits;
pub mod recorder;

// Re-export key types for convenient access
pub use traits::{
    Renderer, DrawCommand, Shape, TextCommand, TextSize,
    Color, TextureId, Viewport,
};
pub use recorder::CommandRecorder;
