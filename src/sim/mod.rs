//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Variable timestep, normalised to a reference frame
//! - Seeded RNG only
//! - Obstacles kept oldest first

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, collides, obstacle_rects};
pub use state::{
    Cloud, GameEvent, GameOverCause, GamePhase, GameState, Obstacle, Player, Viewport,
};
pub use tick::update;
