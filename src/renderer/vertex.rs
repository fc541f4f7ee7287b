//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, ready for a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// 16-color arcade palette
pub mod palette {
    const fn rgb(hex: u32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            1.0,
        ]
    }

    pub const COLORS: [[f32; 4]; 16] = [
        rgb(0x000000),
        rgb(0x2b335f),
        rgb(0x7e2072),
        rgb(0x19959c),
        rgb(0x8b4852),
        rgb(0x395c98),
        rgb(0xa9c1ff),
        rgb(0xeeeeee),
        rgb(0xd4186c),
        rgb(0xd38441),
        rgb(0xe9c35b),
        rgb(0x70c6a9),
        rgb(0x7696de),
        rgb(0xa3a3a3),
        rgb(0xff9798),
        rgb(0xedc7b0),
    ];

    /// RGBA for a palette index (wraps past 15)
    pub fn color(index: u8) -> [f32; 4] {
        COLORS[index as usize % COLORS.len()]
    }
}
