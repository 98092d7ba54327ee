//! Session controller
//!
//! Owns the game state and drives one frame per animation callback:
//! clock → simulation update → collaborators → draw. The loop stops
//! rescheduling once the run is over and resumes only after a reset.

use crate::highscores::BestScoreStore;
use crate::platform::time::FrameClock;
use crate::renderer::Renderer;
use crate::sim::{self, GameEvent, GameState, Viewport};
use crate::tuning::Tuning;
use crate::ui::ScoreDisplay;

/// Whether the frame loop should schedule another callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Halt,
}

/// What an activate input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Flapped,
    /// A new run started; the caller must restart the frame loop
    Restarted,
    /// Nothing to do (not started yet)
    Ignored,
}

/// A game session with its persistence and score display collaborators
pub struct Session<S: BestScoreStore, D: ScoreDisplay> {
    state: GameState,
    tuning: Tuning,
    clock: FrameClock,
    store: S,
    display: D,
}

impl<S: BestScoreStore, D: ScoreDisplay> Session<S, D> {
    /// Create an idle session; the best score is read from the store once
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64, store: S, mut display: D) -> Self {
        let best = store.load();
        display.show_score(0);
        display.show_best(best);

        log::info!(
            "Session created ({}x{}, seed {}, best {})",
            viewport.width,
            viewport.height,
            seed,
            best
        );

        Self {
            state: GameState::new(seed, viewport, &tuning, best),
            clock: FrameClock::new(tuning.max_frame_ms),
            tuning,
            store,
            display,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for harnesses that need to stage a scenario
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Start a fresh run
    pub fn reset(&mut self) {
        self.state.reset(&self.tuning);
        self.clock.reset();
        self.display.show_score(0);
        log::info!("New run started (best {})", self.state.best);
    }

    /// Flap; returns false when not running
    pub fn flap(&mut self) -> bool {
        self.state.flap(&self.tuning)
    }

    /// Handle the single "activate" input
    pub fn activate(&mut self) -> Activation {
        if self.state.is_running() {
            self.flap();
            Activation::Flapped
        } else if self.state.is_game_over() {
            self.reset();
            Activation::Restarted
        } else {
            Activation::Ignored
        }
    }

    /// Run one animation-frame callback at timestamp `now_ms`
    pub fn frame<R: Renderer + ?Sized>(&mut self, now_ms: f64, renderer: &mut R) -> LoopControl {
        let dt = self.clock.tick(now_ms);
        sim::update(&mut self.state, &self.tuning, dt);
        self.dispatch_events();

        renderer.draw(&self.state, &self.tuning);

        if self.state.is_game_over() {
            LoopControl::Halt
        } else {
            LoopControl::Continue
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.display.show_score(score),
                GameEvent::NewBest(best) => {
                    self.store.save(best);
                    self.display.show_best(best);
                    log::info!("New best score: {}", best);
                }
                GameEvent::GameOver(cause) => {
                    log::info!("Game over ({:?}) with score {}", cause, self.state.score);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryBestScore;
    use crate::renderer::HeadlessRenderer;
    use crate::sim::{GamePhase, Obstacle};
    use crate::ui::LogScoreboard;

    type TestSession = Session<MemoryBestScore, LogScoreboard>;

    fn session(best: u32) -> TestSession {
        Session::new(
            Tuning::default(),
            Viewport::new(480.0, 640.0),
            77,
            MemoryBestScore::new(best),
            LogScoreboard::default(),
        )
    }

    /// Obstacle already behind the pass line, with the gap around the player
    fn passable_obstacle() -> Obstacle {
        Obstacle {
            x: 25.0,
            gap_top: 220.0,
            width: 80.0,
            passed: false,
            spawned_at_ms: 0.0,
            sway_seed: 0.0,
        }
    }

    #[test]
    fn test_new_session_shows_stored_best() {
        let session = session(9);
        assert_eq!(session.state().phase, GamePhase::Idle);
        assert_eq!(session.state().best, 9);
        assert_eq!(session.display().best, 9);
        assert_eq!(session.display().score, 0);
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();

        assert_eq!(session.frame(10_000.0, &mut renderer), LoopControl::Continue);
        assert_eq!(session.state().elapsed_ms, 0.0);
        assert_eq!(session.state().player.pos.y, 320.0);
        assert_eq!(renderer.frames, 1);

        session.frame(10_016.666, &mut renderer);
        assert!((session.state().elapsed_ms - 16.666).abs() < 1e-3);
        assert_eq!(renderer.frames, 2);
    }

    #[test]
    fn test_idle_session_draws_without_simulating() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.frame(0.0, &mut renderer);
        session.frame(500.0, &mut renderer);
        assert_eq!(session.state().phase, GamePhase::Idle);
        assert_eq!(session.state().spawn_timer, 0.0);
        assert_eq!(renderer.frames, 2);
    }

    #[test]
    fn test_loop_halts_on_game_over() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.state_mut().player.pos.y = 681.0;
        assert_eq!(session.frame(16.0, &mut renderer), LoopControl::Halt);
        assert!(session.state().is_game_over());
        // The final frame is still drawn
        assert_eq!(renderer.frames, 2);
    }

    #[test]
    fn test_activate_flaps_then_restarts() {
        let mut session = session(0);
        assert_eq!(session.activate(), Activation::Ignored);

        session.reset();
        assert_eq!(session.activate(), Activation::Flapped);
        assert_eq!(session.state().player.vy, -6.0);

        session.state_mut().end_run(sim::GameOverCause::OutOfBounds);
        assert!(!session.flap());
        assert_eq!(session.activate(), Activation::Restarted);
        assert!(session.state().is_running());
        assert_eq!(session.state().player.vy, 0.0);
    }

    #[test]
    fn test_long_hitch_advances_at_most_one_capped_frame() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.frame(10_000.0, &mut renderer);
        assert_eq!(session.state().elapsed_ms, 250.0);
    }

    #[test]
    fn test_reset_clears_clock_baseline() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.frame(16.0, &mut renderer);
        session.state_mut().end_run(sim::GameOverCause::Collision);

        // A minute later the player restarts; the first frame must not see that minute
        session.reset();
        session.frame(60_000.0, &mut renderer);
        assert_eq!(session.state().elapsed_ms, 0.0);
        assert_eq!(session.state().spawn_timer, 0.0);
        assert_eq!(session.state().player.frame_timer, 0.0);
    }

    #[test]
    fn test_new_best_is_saved_and_shown() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.state_mut().obstacles.push(passable_obstacle());
        session.frame(1.0, &mut renderer);

        assert_eq!(session.state().score, 1);
        assert_eq!(session.display().score, 1);
        assert_eq!(session.display().best, 1);
        assert_eq!(session.store().load(), 1);
        assert_eq!(session.store().writes, 1);
    }

    #[test]
    fn test_score_below_best_is_not_saved() {
        let mut session = session(5);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.state_mut().obstacles.push(passable_obstacle());
        session.frame(1.0, &mut renderer);

        assert_eq!(session.display().score, 1);
        assert_eq!(session.display().best, 5);
        assert_eq!(session.store().writes, 0);
    }

    #[test]
    fn test_best_survives_reset() {
        let mut session = session(0);
        let mut renderer = HeadlessRenderer::default();
        session.reset();
        session.frame(0.0, &mut renderer);
        session.state_mut().obstacles.push(passable_obstacle());
        session.frame(1.0, &mut renderer);
        session.state_mut().end_run(sim::GameOverCause::Collision);

        session.reset();
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().best, 1);
        assert_eq!(session.display().score, 0);
        assert_eq!(session.display().best, 1);
    }
}
