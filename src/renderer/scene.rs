//! Scene construction
//!
//! Turns a [`GameState`] into one triangle list, back to front: sky, clouds,
//! katanas, samurai. Pure; reads the state and never changes it.

use glam::Vec2;

use super::shapes::{circle, quad, rect, rotated_rect, triangle, vertical_gradient};
use super::vertex::{Vertex, colors};
use crate::sim::{Cloud, GameState, Obstacle, Player};
use crate::tuning::Tuning;

/// Segments used for round shapes
const CIRCLE_SEGMENTS: u32 = 24;

/// Blade length from tip to guard
const BLADE_LENGTH: f32 = 250.0;
/// Length of the pointed part of the blade
const TIP_LENGTH: f32 = 22.0;
const GUARD_THICKNESS: f32 = 10.0;
const HANDLE_LENGTH: f32 = 70.0;

/// Tilt of an obstacle's upper katana at simulated time `now_ms`
///
/// The lower katana swings the other way at 0.9x.
pub fn sway_angle(obstacle: &Obstacle, now_ms: f64) -> f32 {
    let t = ((now_ms - obstacle.spawned_at_ms) / 1000.0) as f32;
    (t * 1.8 + obstacle.sway_seed).sin() * 0.14
}

/// Vertical sprite offset from the player's velocity: leans into the motion
pub fn player_bob(player: &Player) -> f32 {
    (-player.vy * 0.6).clamp(-6.0, 6.0)
}

/// Build the full frame
pub fn build_scene(state: &GameState, tuning: &Tuning) -> Vec<Vertex> {
    let viewport = state.viewport;
    let cloud_vertices = state.clouds.len() * 3 * CIRCLE_SEGMENTS as usize * 3;
    let mut vertices =
        Vec::with_capacity(6 + cloud_vertices + state.obstacles.len() * 60 + 400);

    vertices.extend(vertical_gradient(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));

    for cloud in &state.clouds {
        push_cloud(&mut vertices, cloud);
    }

    for obstacle in &state.obstacles {
        let sway = sway_angle(obstacle, state.elapsed_ms);
        let center_x = obstacle.x + obstacle.width / 2.0;
        // Upper katana hangs tip-down onto the gap, lower one points up at it
        push_katana(
            &mut vertices,
            Vec2::new(center_x, obstacle.gap_top),
            -1.0,
            obstacle.width,
            -sway,
        );
        push_katana(
            &mut vertices,
            Vec2::new(center_x, obstacle.gap_bottom(tuning.gap_height)),
            1.0,
            obstacle.width,
            -sway * 0.9,
        );
    }

    push_samurai(&mut vertices, &state.player, tuning.player_radius);

    vertices
}

fn push_cloud(vertices: &mut Vec<Vertex>, cloud: &Cloud) {
    let color = colors::with_alpha(colors::CLOUD, cloud.alpha);
    let s = cloud.scale;
    let puffs = [
        (Vec2::new(0.0, -6.0), 38.0),
        (Vec2::new(-46.0, 8.0), 28.0),
        (Vec2::new(46.0, 6.0), 30.0),
    ];
    for (offset, radius) in puffs {
        vertices.extend(circle(cloud.pos + offset * s, radius * s, color, CIRCLE_SEGMENTS));
    }
}

/// Katana with its tip at `tip`; `hilt_dir` is +1 when the hilt is below the
/// tip and -1 when above
fn push_katana(vertices: &mut Vec<Vertex>, tip: Vec2, hilt_dir: f32, width: f32, angle: f32) {
    let rot = Vec2::from_angle(angle);
    let to_world = |p: Vec2| tip + rot.rotate(Vec2::new(p.x, p.y * hilt_dir));
    let local_rect = |y0: f32, y1: f32, half_w: f32| {
        let (a, b) = (y0 * hilt_dir, y1 * hilt_dir);
        (Vec2::new(-half_w, a.min(b)), Vec2::new(half_w, a.max(b)))
    };

    let blade_half = width * 0.22;

    vertices.extend(triangle(
        to_world(Vec2::ZERO),
        to_world(Vec2::new(-blade_half, TIP_LENGTH)),
        to_world(Vec2::new(blade_half, TIP_LENGTH)),
        colors::BLADE,
    ));

    let (min, max) = local_rect(TIP_LENGTH, BLADE_LENGTH, blade_half);
    vertices.extend(rotated_rect(tip, min, max, angle, colors::BLADE));

    // Cutting edge highlight along one side
    vertices.extend(quad(
        [
            to_world(Vec2::ZERO),
            to_world(Vec2::new(blade_half, TIP_LENGTH)),
            to_world(Vec2::new(blade_half, BLADE_LENGTH)),
            to_world(Vec2::new(blade_half * 0.4, BLADE_LENGTH)),
        ],
        colors::BLADE_EDGE,
    ));

    let guard_end = BLADE_LENGTH + GUARD_THICKNESS;
    let (min, max) = local_rect(BLADE_LENGTH, guard_end, width * 0.5);
    vertices.extend(rotated_rect(tip, min, max, angle, colors::GUARD));

    let (min, max) = local_rect(guard_end, guard_end + HANDLE_LENGTH, blade_half * 0.9);
    vertices.extend(rotated_rect(tip, min, max, angle, colors::HANDLE));
}

fn push_samurai(vertices: &mut Vec<Vertex>, player: &Player, radius: f32) {
    let center = player.pos + Vec2::new(0.0, player_bob(player));

    // Legs alternate between the two animation frames
    let stride: f32 = if player.frame == 0 { 5.0 } else { -5.0 };
    for (x, lift) in [(-7.0, stride), (7.0, -stride)] {
        vertices.extend(rect(
            center + Vec2::new(x - 3.0, radius * 0.5),
            center + Vec2::new(x + 3.0, radius + 6.0 + lift.max(0.0)),
            colors::SASH,
        ));
    }

    vertices.extend(circle(center, radius * 0.9, colors::ROBE, CIRCLE_SEGMENTS));
    vertices.extend(rect(
        center + Vec2::new(-radius * 0.9, -2.0),
        center + Vec2::new(radius * 0.9, 3.0),
        colors::SASH,
    ));

    // Sheathed sword over the shoulder
    vertices.extend(rotated_rect(
        center,
        Vec2::new(-2.0, -radius * 1.4),
        Vec2::new(2.0, radius * 0.6),
        -0.7,
        colors::HANDLE,
    ));

    let head = center + Vec2::new(2.0, -radius * 1.05);
    vertices.extend(circle(head, radius * 0.55, colors::SKIN, CIRCLE_SEGMENTS));
    vertices.extend(circle(
        head + Vec2::new(-3.0, -radius * 0.55),
        radius * 0.22,
        colors::HAIR,
        CIRCLE_SEGMENTS / 2,
    ));
}
