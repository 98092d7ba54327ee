//! Demo autopilot
//!
//! Steers toward the centre of the next gap. Used for the attract/idle mode
//! and for headless native runs.

use super::state::GameState;
use crate::tuning::Tuning;

/// Vertical position the autopilot is aiming for
pub fn target_y(state: &GameState, tuning: &Tuning) -> f32 {
    let player_left = state.player.pos.x - tuning.player_radius;
    state
        .obstacles
        .iter()
        .filter(|o| !o.passed && o.right() >= player_left)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        // Aim a little low: a flap overshoots upward more than gravity pulls down
        .map(|o| o.gap_center(tuning.gap_height) + tuning.gap_height * 0.15)
        .unwrap_or(state.viewport.height / 2.0)
}

/// Whether the autopilot wants to flap this frame
pub fn should_flap(state: &GameState, tuning: &Tuning) -> bool {
    state.is_running() && state.player.vy >= 0.0 && state.player.pos.y > target_y(state, tuning)
}
