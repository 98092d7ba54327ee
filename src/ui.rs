//! Score display
//!
//! Two numbers on screen: the current score and the best score. The browser
//! writes them into DOM elements; native runs log them.

/// Where score numbers are shown
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);
    fn show_best(&mut self, best: u32);
}

/// Keeps the last values shown and logs changes (native runs, tests)
#[derive(Debug, Clone, Default)]
pub struct LogScoreboard {
    pub score: u32,
    pub best: u32,
    /// Number of score updates received
    pub score_updates: usize,
}

impl ScoreDisplay for LogScoreboard {
    fn show_score(&mut self, score: u32) {
        self.score = score;
        self.score_updates += 1;
        log::debug!("Score: {}", score);
    }

    fn show_best(&mut self, best: u32) {
        self.best = best;
        log::debug!("Best: {}", best);
    }
}

/// `#score` / `#best` elements in the page (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct DomScoreboard {
    score_el: Option<web_sys::Element>,
    best_el: Option<web_sys::Element>,
}

#[cfg(target_arch = "wasm32")]
impl DomScoreboard {
    pub fn new(document: &web_sys::Document) -> Self {
        let score_el = document.get_element_by_id("score");
        let best_el = document.get_element_by_id("best");
        if score_el.is_none() || best_el.is_none() {
            log::warn!("Score elements missing from page - scores will not be shown");
        }
        Self { score_el, best_el }
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreDisplay for DomScoreboard {
    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.score_el {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn show_best(&mut self, best: u32) {
        if let Some(el) = &self.best_el {
            el.set_text_content(Some(&best.to_string()));
        }
    }
}
