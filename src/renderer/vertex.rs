//! Vertex types for 2D rendering
//!
//! Positions are in playfield pixels until the pipeline maps them to clip space.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Colored 2D vertex
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

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Same color with a different alpha
    pub const fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
        [rgb[0], rgb[1], rgb[2], alpha]
    }

    pub const SKY_TOP: [f32; 4] = [0.565, 0.831, 1.0, 1.0]; // #90d4ff
    pub const SKY_BOTTOM: [f32; 4] = [0.4, 0.718, 1.0, 1.0]; // #66b7ff
    pub const CLOUD: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BLADE: [f32; 4] = [0.82, 0.85, 0.9, 1.0];
    pub const BLADE_EDGE: [f32; 4] = [0.97, 0.98, 1.0, 1.0];
    pub const GUARD: [f32; 4] = [0.78, 0.62, 0.2, 1.0];
    pub const HANDLE: [f32; 4] = [0.25, 0.12, 0.1, 1.0];
    pub const ROBE: [f32; 4] = [0.72, 0.12, 0.14, 1.0];
    pub const SASH: [f32; 4] = [0.12, 0.1, 0.16, 1.0];
    pub const SKIN: [f32; 4] = [0.98, 0.84, 0.7, 1.0];
    pub const HAIR: [f32; 4] = [0.08, 0.06, 0.06, 1.0];
}
