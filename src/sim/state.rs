//! Game state and core simulation types
//!
//! Everything the physics step reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first reset (assets still loading)
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Hit an obstacle blade
    Collision,
    /// Drifted too far above or below the playfield
    OutOfBounds,
}

/// Things that happened during a tick, drained by the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was passed; carries the new score
    ScoreChanged(u32),
    /// The score beat the best; carries the new best
    NewBest(u32),
    GameOver(GameOverCause),
}

/// Fixed-size drawing surface, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The samurai
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the hit circle; x never changes after creation
    pub pos: Vec2,
    /// Vertical velocity (px per reference frame, positive = down)
    pub vy: f32,
    /// Animation frame (0 or 1)
    pub frame: u8,
    /// Time spent on the current animation frame (ms)
    pub frame_timer: f32,
}

impl Player {
    /// Player at rest, vertically centred
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, viewport.height / 2.0),
            vy: 0.0,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Advance the two-frame run cycle
    pub fn animate(&mut self, dt_ms: f32, frame_interval_ms: f32) {
        self.frame_timer += dt_ms;
        if self.frame_timer > frame_interval_ms {
            self.frame_timer = 0.0;
            self.frame ^= 1;
        }
    }
}

/// A pair of katanas with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the gap
    pub gap_top: f32,
    pub width: f32,
    /// Set once, when the player gets past it
    pub passed: bool,
    /// Simulated time of spawn (ms), drives the sway animation
    pub spawned_at_ms: f64,
    /// Sway phase in radians
    pub sway_seed: f32,
}

impl Obstacle {
    /// Right (trailing) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom of the gap
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height
    }

    /// Vertical centre of the gap
    #[inline]
    pub fn gap_center(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height / 2.0
    }
}

/// A background cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    /// Rightward drift (px per reference frame)
    pub vx: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl Cloud {
    /// Random cloud somewhere in the upper part of the sky
    pub fn random(rng: &mut Pcg32, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height * 0.4 + 20.0,
            ),
            vx: 0.3 + rng.random::<f32>() * 0.6,
            scale: 0.7 + rng.random::<f32>() * 0.6,
            alpha: 0.7 + rng.random::<f32>() * 0.25,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Fixed pool, recycled by wraparound
    pub clouds: Vec<Cloud>,
    pub score: u32,
    /// Best score seen so far; never decreases
    pub best: u32,
    /// Time since the last spawn (ms)
    pub spawn_timer: f32,
    /// Simulated time since the last reset (ms)
    pub elapsed_ms: f64,
    /// Events from the latest tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle session; clouds are placed once here and survive resets
    pub fn new(seed: u64, viewport: Viewport, tuning: &Tuning, best: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..tuning.cloud_count)
            .map(|_| Cloud::random(&mut rng, viewport))
            .collect();

        Self {
            seed,
            viewport,
            phase: GamePhase::Idle,
            player: Player::new(tuning, viewport),
            obstacles: Vec::new(),
            clouds,
            score: 0,
            best,
            spawn_timer: 0.0,
            elapsed_ms: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh run. Best score and clouds carry over.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.player = Player::new(tuning, self.viewport);
        self.obstacles.clear();
        self.score = 0;
        self.spawn_timer = 0.0;
        self.elapsed_ms = 0.0;
        self.events.clear();
        self.phase = GamePhase::Running;
    }

    /// Kick the player upward; ignored outside of a run
    pub fn flap(&mut self, tuning: &Tuning) -> bool {
        if !self.is_running() {
            return false;
        }
        self.player.vy = tuning.flap_impulse;
        true
    }

    /// Transition to game over (once per run)
    pub fn end_run(&mut self, cause: GameOverCause) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver(cause));
    }

    /// Create an obstacle just past the right edge with a random gap
    pub fn spawn_obstacle(&mut self, tuning: &Tuning) {
        let (min_top, max_top) = tuning.gap_top_range(self.viewport.height);
        // Whole-pixel offsets keep blade art crisp
        let gap_top = if max_top > min_top {
            (self.rng.random::<f32>() * (max_top - min_top)).floor() + min_top
        } else {
            min_top
        };
        let sway_seed = self.rng.random::<f32>() * std::f32::consts::TAU;

        log::debug!("Spawning obstacle, gap top {}", gap_top);
        self.obstacles.push(Obstacle {
            x: self.viewport.width + tuning.spawn_offset,
            gap_top,
            width: tuning.obstacle_width,
            passed: false,
            spawned_at_ms: self.elapsed_ms,
            sway_seed,
        });
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
