//! Flappy Samurai - A side-scrolling katana-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, obstacle spawning, collisions, score)
//! - `session`: Run/game-over control and the frame loop driver
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::{BestScoreStore, MemoryBestScore};
pub use session::{Activation, LoopControl, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame interval (ms) that velocity and gravity constants are expressed in
    pub const REFERENCE_FRAME_MS: f32 = 16.666;

    /// LocalStorage key holding the best score as a plain integer
    pub const BEST_SCORE_KEY: &str = "flappy-samurai-best";
    /// LocalStorage key holding an optional JSON tuning override
    pub const TUNING_KEY: &str = "flappy-samurai-tuning";
}

/// Scale factor turning a per-reference-frame quantity into one for `dt_ms`
#[inline]
pub fn frame_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::REFERENCE_FRAME_MS
}
