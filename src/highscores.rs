//! Best score persistence
//!
//! The game keeps a single best score. Where it lives is up to the platform:
//! LocalStorage in the browser, memory for native runs and tests.

/// Somewhere to keep the best score between sessions
pub trait BestScoreStore {
    /// Stored best score, 0 if there is none
    fn load(&self) -> u32;
    /// Persist a new best score
    fn save(&mut self, best: u32);
}

/// In-memory store (native runs, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryBestScore {
    best: u32,
    /// Number of writes, for callers that care about persistence traffic
    pub writes: usize,
}

impl MemoryBestScore {
    pub fn new(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.writes += 1;
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) {
        (**self).save(best)
    }
}
