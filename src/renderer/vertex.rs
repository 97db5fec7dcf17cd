//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(0, 64, 0);
    pub const CELL_BORDER: [f32; 4] = rgb(93, 216, 228);
    pub const GOOD_APPLE: [f32; 4] = rgb(255, 0, 0);
    pub const BAD_APPLE: [f32; 4] = rgb(200, 172, 64);
    pub const OBSTACLE: [f32; 4] = rgb(172, 172, 172);
    pub const SNAKE_BODY: [f32; 4] = rgb(0, 255, 0);
    pub const SNAKE_HEAD: [f32; 4] = rgb(0, 128, 0);
}
