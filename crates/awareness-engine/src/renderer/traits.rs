//! Renderer contract.
//!
//! The engine never talks to a graphics API. Games describe each frame as
//! a list of [`DrawCommand`]s and [`TextCommand`]s in world space and hand
//! them to whatever implements [`Renderer`]: the lyon tessellator feeding
//! the browser host, a recorder in tests, or a future native backend.

use glam::Vec2;
use serde::Serialize;

/// RGBA color (0.0 - 1.0 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Opaque handle to a texture the host has loaded.
/// Renderers without texture support fall back to the command's flat color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TextureId(pub u32);

/// Geometry of a draw command, in the command's local space.
/// Local space is scaled by `DrawCommand::scale`, then translated to
/// `DrawCommand::pos`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle; `min` is its bottom-left corner.
    Rect { min: Vec2, size: Vec2 },
    /// Filled circle.
    Circle { center: Vec2, radius: f32 },
    /// Circle outline.
    Ring { center: Vec2, radius: f32, width: f32 },
    /// Filled triangle.
    Triangle([Vec2; 3]),
    /// Straight line segment.
    Line { from: Vec2, to: Vec2, width: f32 },
    /// Square dot of the given side length.
    Point { at: Vec2, size: f32 },
}

/// One shape to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub color: Color,
    /// Translation applied after scaling.
    pub pos: Vec2,
    /// Uniform scale applied to the shape's local coordinates.
    pub scale: f32,
    pub texture: Option<TextureId>,
}

impl DrawCommand {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            pos: Vec2::ZERO,
            scale: 1.0,
            texture: None,
        }
    }

    // -- Builder pattern --

    pub fn at(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn textured(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Map a point from the command's local space into world space.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local * self.scale
    }
}

/// Relative text size; hosts pick the actual font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Normal,
}

/// A string painted at a world-space baseline position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: TextSize,
    pub color: Color,
}

impl TextCommand {
    pub fn new(text: impl Into<String>, pos: Vec2) -> Self {
        Self {
            text: text.into(),
            x: pos.x,
            y: pos.y,
            size: TextSize::Normal,
            color: Color::WHITE,
        }
    }

    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A viewport is usable for coordinate mapping only with a nonzero area.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Renderer trait for drawing backends.
///
/// Implementors only read what they are given; they never mutate game
/// state.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer { /* ... */ }
///
/// impl Renderer for CanvasRenderer {
///     fn viewport(&self) -> Viewport { Viewport::new(800.0, 600.0) }
///     fn draw(&mut self, cmd: &DrawCommand) { /* fill the shape */ }
///     fn text(&mut self, cmd: &TextCommand) { /* fillText */ }
/// }
/// ```
pub trait Renderer {
    /// Current drawable size, used for window-to-world mapping.
    fn viewport(&self) -> Viewport;

    /// Render one shape into the current frame.
    fn draw(&mut self, cmd: &DrawCommand);

    /// Render a string into the current frame.
    fn text(&mut self, cmd: &TextCommand);

    /// Called once after every command for the frame has been issued.
    fn present(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_constructors() {
        let c = Color::rgb(0.1, 0.2, 0.3);
        assert_eq!(c.a, 1.0);

        let c = Color::rgba8(255, 0, 0, 128);
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.5).abs() < 0.01);

        assert_eq!(Color::RED.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn command_maps_local_to_world() {
        let cmd = DrawCommand::new(Shape::Point { at: Vec2::ZERO, size: 1.0 }, Color::BLACK)
            .at(Vec2::new(2.0, -1.0))
            .scaled(0.5);
        assert_eq!(cmd.to_world(Vec2::new(1.0, 1.0)), Vec2::new(2.5, -0.5));
    }

    #[test]
    fn text_command_serializes_for_host() {
        let cmd = TextCommand::new("hello", Vec2::new(1.0, 2.0)).with_size(TextSize::Small);
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"text\":\"hello\""));
        assert!(json.contains("\"size\":\"small\""));
    }

    #[test]
    fn zero_viewport_is_invalid() {
        assert!(Viewport::default().is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
    }
}
