//! Variable timestep simulation tick
//!
//! Advances the player, obstacles and clouds by one frame delta. Constants in
//! [`Tuning`] are per reference frame, so every motion is scaled by
//! [`frame_scale`] to stay framerate independent.

use super::collision::collides;
use super::state::{GameEvent, GameOverCause, GameState};
use crate::frame_scale;
use crate::tuning::Tuning;

/// Advance the game state by `dt_ms` milliseconds
pub fn update(state: &mut GameState, tuning: &Tuning, dt_ms: f32) {
    if !state.is_running() {
        return;
    }

    // Clock anomalies must not run the simulation backwards
    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
    let scale = frame_scale(dt_ms);
    state.elapsed_ms += dt_ms as f64;

    // Player
    state.player.animate(dt_ms, tuning.frame_interval_ms);
    state.player.vy += tuning.gravity * scale;
    state.player.pos.y += state.player.vy * scale;

    update_obstacles(state, tuning, scale);

    // Spawn after moving so a new obstacle starts exactly at its spawn offset
    state.spawn_timer += dt_ms;
    if state.spawn_timer >= tuning.spawn_interval_ms {
        state.spawn_timer = 0.0;
        state.spawn_obstacle(tuning);
    }

    update_clouds(state, tuning, scale);

    let y = state.player.pos.y;
    if y < -tuning.bounds_margin || y > state.viewport.height + tuning.bounds_margin {
        state.end_run(GameOverCause::OutOfBounds);
    }
}

/// Scroll obstacles, score passes, detect hits and drop off-screen ones
fn update_obstacles(state: &mut GameState, tuning: &Tuning, scale: f32) {
    let pass_line = state.player.pos.x - tuning.pass_offset;
    let mut obstacles = std::mem::take(&mut state.obstacles);
    let mut hit = false;

    obstacles.retain_mut(|obstacle| {
        obstacle.x -= tuning.obstacle_speed * scale;

        if !obstacle.passed && obstacle.right() < pass_line {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::ScoreChanged(state.score));
            if state.score > state.best {
                state.best = state.score;
                state.events.push(GameEvent::NewBest(state.best));
            }
        }

        // Obstacles stay put on a hit so the final frame shows what happened
        if collides(&state.player, obstacle, tuning, state.viewport) {
            hit = true;
        }

        obstacle.right() >= -tuning.despawn_margin
    });

    state.obstacles = obstacles;
    if hit {
        state.end_run(GameOverCause::Collision);
    }
}

/// Drift clouds right, wrapping the ones that left the screen
fn update_clouds(state: &mut GameState, tuning: &Tuning, scale: f32) {
    let margin = tuning.cloud_wrap_margin;
    let wrap_at = state.viewport.width + margin;
    for cloud in &mut state.clouds {
        if cloud.pos.x > wrap_at {
            cloud.pos.x = -margin;
        }
        cloud.pos.x += cloud.vx * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, Obstacle, Viewport};

    const VIEWPORT: Viewport = Viewport::new(480.0, 640.0);
    const EPS: f32 = 1e-3;

    fn running_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(1234, VIEWPORT, tuning, 0);
        state.reset(tuning);
        state
    }

    fn obstacle_at(x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top,
            width: 80.0,
            passed: false,
            spawned_at_ms: 0.0,
            sway_seed: 0.0,
        }
    }

    /// Hold the player still in the middle of the playfield
    fn pin_player(state: &mut GameState) {
        state.player.pos.y = VIEWPORT.height / 2.0;
        state.player.vy = 0.0;
    }

    #[test]
    fn test_update_is_noop_unless_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, VIEWPORT, &tuning, 0);
        let before = state.player.clone();
        update(&mut state, &tuning, 16.666);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player, before);
        assert_eq!(state.elapsed_ms, 0.0);
        assert_eq!(state.spawn_timer, 0.0);

        state.reset(&tuning);
        state.end_run(GameOverCause::Collision);
        let y = state.player.pos.y;
        update(&mut state, &tuning, 500.0);
        assert_eq!(state.player.pos.y, y);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_gravity_integration_at_reference_frame() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        update(&mut state, &tuning, 16.666);
        assert!((state.player.vy - 0.3).abs() < EPS);
        assert!((state.player.pos.y - 320.3).abs() < EPS);

        update(&mut state, &tuning, 16.666);
        assert!((state.player.vy - 0.6).abs() < EPS);
        assert!((state.player.pos.y - 320.9).abs() < EPS);
    }

    #[test]
    fn test_flap_moves_player_up() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.flap(&tuning);
        update(&mut state, &tuning, 16.666);
        assert!((state.player.vy - -5.7).abs() < EPS);
        assert!((state.player.pos.y - (320.0 - 5.7)).abs() < EPS);
    }

    #[test]
    fn test_animation_frame_toggles_after_interval() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        for _ in 0..4 {
            pin_player(&mut state);
            update(&mut state, &tuning, 30.0);
        }
        // 120ms is not past the interval yet
        assert_eq!(state.player.frame, 0);
        pin_player(&mut state);
        update(&mut state, &tuning, 30.0);
        assert_eq!(state.player.frame, 1);
        assert_eq!(state.player.frame_timer, 0.0);

        for _ in 0..5 {
            pin_player(&mut state);
            update(&mut state, &tuning, 30.0);
        }
        assert_eq!(state.player.frame, 0);
    }

    #[test]
    fn test_spawn_after_cumulative_interval() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        for _ in 0..12 {
            pin_player(&mut state);
            update(&mut state, &tuning, 100.0);
        }
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_timer, 1200.0);

        pin_player(&mut state);
        update(&mut state, &tuning, 100.0);
        assert!(state.is_running());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, VIEWPORT.width + 40.0);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.obstacles[0].spawned_at_ms, 1300.0);
    }

    #[test]
    fn test_single_long_frame_spawns_once() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        update(&mut state, &tuning, 1300.0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, VIEWPORT.width + 40.0);
    }

    #[test]
    fn test_obstacles_scroll_left() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.obstacles.push(obstacle_at(400.0, 220.0));
        update(&mut state, &tuning, 16.666);
        assert!((state.obstacles[0].x - 397.2).abs() < EPS);
        update(&mut state, &tuning, 33.332);
        assert!((state.obstacles[0].x - 391.6).abs() < EPS);
    }

    #[test]
    fn test_score_increments_once_per_obstacle() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        // Right edge 105 is already behind the pass line at 106
        state.obstacles.push(obstacle_at(25.0, 220.0));

        pin_player(&mut state);
        update(&mut state, &tuning, 1.0);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].passed);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ScoreChanged(1), GameEvent::NewBest(1)]
        );

        for _ in 0..10 {
            pin_player(&mut state);
            update(&mut state, &tuning, 1.0);
        }
        assert_eq!(state.score, 1);
        assert!(state.is_running());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_pass_line_uses_offset() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        // Right edge just under 120, still ahead of the pass line at 106
        state.obstacles.push(obstacle_at(40.0, 220.0));
        pin_player(&mut state);
        update(&mut state, &tuning, 1.0);
        assert_eq!(state.score, 0);
        assert!(!state.obstacles[0].passed);
    }

    #[test]
    fn test_best_only_moves_up() {
        let tuning = Tuning::default();
        let mut state = GameState::new(5, VIEWPORT, &tuning, 3);
        state.reset(&tuning);
        state.obstacles.push(obstacle_at(25.0, 220.0));
        pin_player(&mut state);
        update(&mut state, &tuning, 1.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.best, 3);
        assert_eq!(state.drain_events(), vec![GameEvent::ScoreChanged(1)]);
    }

    #[test]
    fn test_collision_ends_run_and_keeps_obstacle() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        // Player at y=320 sits inside the lower blade, which starts at 242
        state.obstacles.push(obstacle_at(100.0, 50.0));
        state.obstacles.push(obstacle_at(101.0, 50.0));
        update(&mut state, &tuning, 16.666);

        assert!(state.is_game_over());
        assert!(!state.is_running());
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver(GameOverCause::Collision)]
        );

        // Terminal until reset
        update(&mut state, &tuning, 16.666);
        assert!(state.is_game_over());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_offscreen_obstacles_are_removed() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        let mut gone = obstacle_at(-201.0, 220.0);
        gone.passed = true;
        let mut kept = obstacle_at(-150.0, 220.0);
        kept.passed = true;
        state.obstacles.push(gone);
        state.obstacles.push(kept);
        state.obstacles.push(obstacle_at(300.0, 220.0));

        pin_player(&mut state);
        update(&mut state, &tuning, 1.0);
        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles[0].x < -150.0 && state.obstacles[0].x > -151.0);
        assert!(state.obstacles[1].x < 300.0);
    }

    #[test]
    fn test_despawn_margin_is_tunable() {
        let tuning = Tuning {
            despawn_margin: 0.0,
            ..Tuning::default()
        };
        let mut state = running_state(&tuning);
        let mut obstacle = obstacle_at(-81.0, 220.0);
        obstacle.passed = true;
        state.obstacles.push(obstacle);
        pin_player(&mut state);
        update(&mut state, &tuning, 1.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_cloud_wraps_then_drifts() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.clouds[0].pos.x = VIEWPORT.width + 221.0;
        let vx = state.clouds[0].vx;
        let stay_x = state.clouds[1].pos.x;
        let stay_vx = state.clouds[1].vx;

        update(&mut state, &tuning, 16.666);
        let expected = -220.0 + vx * frame_scale(16.666);
        assert!((state.clouds[0].pos.x - expected).abs() < EPS);
        assert!((state.clouds[1].pos.x - (stay_x + stay_vx)).abs() < EPS);
    }

    #[test]
    fn test_cloud_at_margin_does_not_wrap() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.clouds[0].pos.x = VIEWPORT.width + 220.0;
        let vx = state.clouds[0].vx;
        update(&mut state, &tuning, 16.666);
        assert!((state.clouds[0].pos.x - (VIEWPORT.width + 220.0 + vx)).abs() < EPS);
    }

    #[test]
    fn test_falling_below_playfield_ends_run() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.player.pos.y = VIEWPORT.height + 41.0;
        update(&mut state, &tuning, 16.666);
        assert!(state.is_game_over());
        assert!(!state.is_running());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver(GameOverCause::OutOfBounds)]
        );
    }

    #[test]
    fn test_flying_above_playfield_ends_run() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.player.pos.y = -39.0;
        state.player.vy = -6.0;
        update(&mut state, &tuning, 16.666);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_within_margin_keeps_running() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.player.pos.y = VIEWPORT.height + 30.0;
        state.player.vy = -0.3;
        update(&mut state, &tuning, 16.666);
        assert!(state.is_running());
    }

    #[test]
    fn test_collision_and_out_of_bounds_in_same_tick_fire_once() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.player.pos.y = VIEWPORT.height + 41.0;
        state.obstacles.push(obstacle_at(100.0, 50.0));
        update(&mut state, &tuning, 16.666);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver(GameOverCause::Collision)]
        );
    }

    #[test]
    fn test_negative_dt_is_clamped() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        let before = state.player.clone();
        update(&mut state, &tuning, -50.0);
        assert_eq!(state.player, before);
        assert_eq!(state.elapsed_ms, 0.0);
        assert_eq!(state.spawn_timer, 0.0);

        update(&mut state, &tuning, f32::NAN);
        assert_eq!(state.player, before);
        assert!(state.is_running());
    }
}
