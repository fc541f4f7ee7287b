//! Backend-neutral canvas that tessellates draw calls into vertices
//!
//! A GPU backend uploads `vertices()` as a triangle list and draws `texts()`
//! with its own font.

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::{Vertex, palette};

/// A text draw call, kept for the backend's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Default)]
pub struct VertexCanvas {
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
    texts: Vec<TextRun>,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    /// Vertex data as raw bytes for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: u8) {
        self.clear_color = palette::color(color);
        self.vertices.clear();
        self.texts.clear();
    }

    fn draw_pixel(&mut self, pos: Vec2, color: u8) {
        self.vertices
            .extend(shapes::quad(pos, Vec2::ONE, palette::color(color)));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: u8) {
        self.vertices.extend(shapes::circle(
            center,
            radius,
            palette::color(color),
            shapes::circle_segments(radius),
        ));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: u8) {
        self.vertices.extend(shapes::ring(
            center,
            (radius - 1.0).max(0.0),
            radius,
            palette::color(color),
            shapes::circle_segments(radius),
        ));
    }

    fn draw_filled_rect(&mut self, pos: Vec2, size: Vec2, color: u8) {
        self.vertices
            .extend(shapes::quad(pos, size, palette::color(color)));
    }

    fn draw_rect_outline(&mut self, pos: Vec2, size: Vec2, color: u8) {
        self.vertices
            .extend(shapes::rect_outline(pos, size, palette::color(color)));
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: u8) {
        self.texts.push(TextRun {
            pos,
            text: text.to_string(),
            color: palette::color(color),
        });
    }
}
