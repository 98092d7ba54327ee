//! Data-driven game balance
//!
//! Every gameplay constant lives here so it can be overridden without a
//! rebuild. Velocities and accelerations are per reference frame
//! (see [`crate::consts::REFERENCE_FRAME_MS`]), distances are in pixels,
//! durations in milliseconds.

use serde::{Deserialize, Serialize};

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration (px per frame²)
    pub gravity: f32,
    /// Vertical velocity applied by a flap (negative = up)
    pub flap_impulse: f32,
    /// Fixed horizontal position of the player
    pub player_x: f32,
    /// Hit circle radius
    pub player_radius: f32,
    /// Time each animation frame is held
    pub frame_interval_ms: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Vertical size of the opening between the two blades
    pub gap_height: f32,
    /// Leftward scroll speed (px per frame)
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f32,
    /// Smallest allowed gap top
    pub gap_min_top: f32,
    /// Space kept free below the gap bottom
    pub gap_bottom_margin: f32,
    /// Distance past the right edge where obstacles appear
    pub spawn_offset: f32,
    /// Obstacles are dropped once their right edge is this far past the left edge
    pub despawn_margin: f32,
    /// Hit boxes extend this far into the gap so they match the blade art
    pub collision_overlap: f32,
    /// Trailing edge must be this far behind the player's x to count as passed
    pub pass_offset: f32,

    // === Playfield ===
    /// How far above or below the playfield the player may drift before losing
    pub bounds_margin: f32,
    pub cloud_count: usize,
    /// Off-screen distance at which clouds wrap
    pub cloud_wrap_margin: f32,

    // === Clock ===
    /// Upper bound on a single frame delta (tab switches, debugger pauses)
    ///
    /// After a longer hitch the game runs slower than wall time.
    pub max_frame_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            flap_impulse: -6.0,
            player_x: 120.0,
            player_radius: 18.0,
            frame_interval_ms: 120.0,

            obstacle_width: 80.0,
            gap_height: 200.0,
            obstacle_speed: 2.8,
            spawn_interval_ms: 1300.0,
            gap_min_top: 60.0,
            gap_bottom_margin: 120.0,
            spawn_offset: 40.0,
            despawn_margin: 120.0,
            collision_overlap: 8.0,
            pass_offset: 14.0,

            bounds_margin: 40.0,
            cloud_count: 5,
            cloud_wrap_margin: 220.0,

            max_frame_ms: 250.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Range of valid gap tops `[min, max)` for a playfield of the given height
    ///
    /// Collapses to an empty range at `gap_min_top` when the playfield is too
    /// short to honour both margins.
    pub fn gap_top_range(&self, playfield_height: f32) -> (f32, f32) {
        let min = self.gap_min_top;
        let max = playfield_height - self.gap_height - self.gap_bottom_margin;
        (min, max.max(min))
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(Some(json)) = storage.get_item(crate::consts::TUNING_KEY)
        {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override from LocalStorage");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring malformed tuning override: {}", e),
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
