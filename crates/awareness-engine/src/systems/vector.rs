//! Lyon-based vector renderer.
//!
//! Tessellates [`DrawCommand`]s on the CPU into a flat triangle-list vertex
//! buffer that the browser host uploads as-is. Text is not rasterized here;
//! it is collected and handed to the host as JSON.
//!
//! # Usage
//!
//! ```ignore
//! let mut vectors = VectorRenderer::new(Viewport::new(800.0, 600.0));
//! game.render(&mut vectors);
//! let ptr = vectors.buffer_ptr();
//! let count = vectors.vertex_count();
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::renderer::traits::{Color, DrawCommand, Renderer, Shape, TextCommand, Viewport};

/// Per-vertex data for vector/polygon rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: Color,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Tessellation tolerance in world units. Scenes span ~10 units, so this
/// is much finer than the pixel-space default.
const TOLERANCE: f32 = 0.005;

/// Renderer backed by lyon tessellators.
///
/// Cleared each frame and populated by draw commands.
pub struct VectorRenderer {
    viewport: Viewport,
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    texts: Vec<TextCommand>,
}

impl VectorRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            texts: Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Clear vertices and text. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.texts.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Text issued this frame.
    pub fn texts(&self) -> &[TextCommand] {
        &self.texts
    }

    /// Text issued this frame, encoded for the host.
    pub fn texts_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.texts)
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn polygon_path(points: &[Vec2], closed: bool) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(closed);
        builder.build()
    }

    fn circle_path(center: Vec2, radius: f32) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        builder.build()
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Renderer for VectorRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw(&mut self, cmd: &DrawCommand) {
        let s = cmd.scale;
        if s <= 0.0 || cmd.color.a <= 0.0 {
            return;
        }
        match &cmd.shape {
            Shape::Rect { min, size } => {
                let p0 = cmd.to_world(*min);
                let p1 = cmd.to_world(*min + *size);
                let points = [p0, Vec2::new(p1.x, p0.y), p1, Vec2::new(p0.x, p1.y)];
                self.fill_path(&Self::polygon_path(&points, true), cmd.color);
            }
            Shape::Circle { center, radius } => {
                if *radius > 0.0 {
                    let path = Self::circle_path(cmd.to_world(*center), radius * s);
                    self.fill_path(&path, cmd.color);
                }
            }
            Shape::Ring { center, radius, width } => {
                if *radius > 0.0 {
                    let path = Self::circle_path(cmd.to_world(*center), radius * s);
                    self.stroke_path(&path, width * s, cmd.color);
                }
            }
            Shape::Triangle(pts) => {
                let points = pts.map(|p| cmd.to_world(p));
                self.fill_path(&Self::polygon_path(&points, true), cmd.color);
            }
            Shape::Line { from, to, width } => {
                let points = [cmd.to_world(*from), cmd.to_world(*to)];
                self.stroke_path(&Self::polygon_path(&points, false), width * s, cmd.color);
            }
            Shape::Point { at, size } => {
                let half = Vec2::splat(size * s / 2.0);
                let c = cmd.to_world(*at);
                let (p0, p1) = (c - half, c + half);
                let points = [p0, Vec2::new(p1.x, p0.y), p1, Vec2::new(p0.x, p1.y)];
                self.fill_path(&Self::polygon_path(&points, true), cmd.color);
            }
        }
    }

    fn text(&mut self, cmd: &TextCommand) {
        self.texts.push(cmd.clone());
    }
}
