//! Collision detection between the player and obstacles
//!
//! The player is a circle; each obstacle is two axis-aligned rectangles, one
//! above the gap and one below it. Nothing else collides.

use glam::Vec2;

use super::state::{Obstacle, Player, Viewport};
use crate::tuning::Tuning;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Point of the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.max(self.min).min(self.max)
    }
}

/// Circle vs rectangle overlap
///
/// Touching (distance exactly equal to the radius) is not a hit.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() < radius * radius
}

/// Hit boxes of an obstacle: `[above gap, below gap]`
///
/// Both boxes reach `collision_overlap` pixels into the gap so the hit edge
/// lines up with the blade tips.
pub fn obstacle_rects(obstacle: &Obstacle, tuning: &Tuning, viewport: Viewport) -> [Rect; 2] {
    let overlap = tuning.collision_overlap;
    let top = Rect::new(obstacle.x, 0.0, obstacle.width, obstacle.gap_top + overlap);
    let bottom = Rect::new(
        obstacle.x,
        obstacle.gap_bottom(tuning.gap_height) - overlap,
        obstacle.width,
        viewport.height,
    );
    [top, bottom]
}

/// Check whether the player touches either blade of an obstacle
pub fn collides(player: &Player, obstacle: &Obstacle, tuning: &Tuning, viewport: Viewport) -> bool {
    obstacle_rects(obstacle, tuning, viewport)
        .iter()
        .any(|rect| circle_rect_overlap(player.pos, tuning.player_radius, rect))
}
