//! Rendering
//!
//! Renderers only read the game state. The WebGPU renderer draws the scene
//! from [`scene::build_scene`]; the headless one just counts frames.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{GpuRenderer, InitError};
pub use scene::build_scene;

use crate::sim::GameState;
use crate::tuning::Tuning;

/// Something that paints a full frame from the current state
pub trait Renderer {
    fn draw(&mut self, state: &GameState, tuning: &Tuning);
}

/// Renderer with no output surface (native runs, tests)
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Frames drawn so far
    pub frames: u64,
    /// Triangle count of the last frame
    pub last_triangles: usize,
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, state: &GameState, tuning: &Tuning) {
        self.frames += 1;
        self.last_triangles = build_scene(state, tuning).len() / 3;
    }
}
