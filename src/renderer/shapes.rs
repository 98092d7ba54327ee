//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Single triangle
#[inline]
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [Vertex::at(a, color), Vertex::at(b, color), Vertex::at(c, color)]
}

/// Convex quad from corners in winding order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(a, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    quad(
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
        color,
    )
}

/// Axis-aligned rectangle blending from `top` to `bottom`
pub fn vertical_gradient(min: Vec2, max: Vec2, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let tl = Vertex::new(min.x, min.y, top);
    let tr = Vertex::new(max.x, min.y, top);
    let br = Vertex::new(max.x, max.y, bottom);
    let bl = Vertex::new(min.x, max.y, bottom);
    [tl, tr, br, tl, br, bl]
}

/// Rectangle given in a local frame, rotated by `angle` about `pivot`
///
/// `local_min`/`local_max` are offsets from the pivot before rotation.
pub fn rotated_rect(
    pivot: Vec2,
    local_min: Vec2,
    local_max: Vec2,
    angle: f32,
    color: [f32; 4],
) -> [Vertex; 6] {
    let rot = Vec2::from_angle(angle);
    let corners = [
        local_min,
        Vec2::new(local_max.x, local_min.y),
        local_max,
        Vec2::new(local_min.x, local_max.y),
    ]
    .map(|c| pivot + rot.rotate(c));
    quad(corners, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}
