//! Browser storage for the best score
//!
//! The value is a plain integer under [`BEST_SCORE_KEY`], so it stays
//! readable (and editable) from the devtools console.

#[cfg(target_arch = "wasm32")]
use crate::consts::BEST_SCORE_KEY;
#[cfg(target_arch = "wasm32")]
use crate::highscores::BestScoreStore;

/// Interpret a stored best score; anything missing or unreadable counts as 0
pub fn parse_best_score(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim) else {
        return 0;
    };
    if let Ok(best) = raw.parse::<u32>() {
        return best;
    }
    // Older saves may hold a float like "12.0"
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Best score kept in LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBestScore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageBestScore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - best score will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageBestScore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageBestScore {
    fn load(&self) -> u32 {
        let raw = self
            .storage
            .as_ref()
            .and_then(|s| s.get_item(BEST_SCORE_KEY).ok())
            .flatten();
        let best = parse_best_score(raw.as_deref());
        log::info!("Loaded best score {}", best);
        best
    }

    fn save(&mut self, best: u32) {
        if let Some(storage) = &self.storage
            && storage.set_item(BEST_SCORE_KEY, &best.to_string()).is_err()
        {
            log::warn!("Failed to save best score {}", best);
        }
    }
}
