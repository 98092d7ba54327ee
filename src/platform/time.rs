//! Frame clock
//!
//! Turns the timestamps handed to animation-frame callbacks into per-frame
//! deltas. Owns no game state.

/// Delta-time source for the frame loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous callback (ms); `None` until the first one
    last_time: Option<f64>,
    /// Upper bound on a single delta (ms)
    max_frame_ms: f32,
}

impl FrameClock {
    pub fn new(max_frame_ms: f32) -> Self {
        Self {
            last_time: None,
            max_frame_ms,
        }
    }

    /// Milliseconds since the previous callback
    ///
    /// The first call after creation or [`reset`](Self::reset) only records a
    /// baseline and returns 0. Timestamps going backwards yield 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (now_ms - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        if !dt.is_finite() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_ms)
    }

    /// Forget the baseline so a paused loop doesn't resume with a stale delta
    pub fn reset(&mut self) {
        self.last_time = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_baseline() {
        let mut clock = FrameClock::new(250.0);
        assert!(!clock.has_baseline());
        assert_eq!(clock.tick(5000.0), 0.0);
        assert!(clock.has_baseline());
        assert_eq!(clock.tick(5016.0), 16.0);
        assert_eq!(clock.tick(5050.0), 34.0);
    }

    #[test]
    fn test_backwards_time_clamps_to_zero() {
        let mut clock = FrameClock::new(250.0);
        clock.tick(100.0);
        assert_eq!(clock.tick(90.0), 0.0);
        // Baseline follows the latest timestamp
        assert_eq!(clock.tick(100.0), 10.0);
    }

    #[test]
    fn test_long_pause_is_capped() {
        let mut clock = FrameClock::new(250.0);
        clock.tick(0.0);
        assert_eq!(clock.tick(10_000.0), 250.0);
    }

    #[test]
    fn test_reset_starts_a_new_baseline() {
        let mut clock = FrameClock::new(250.0);
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        assert_eq!(clock.tick(60_000.0), 0.0);
        assert_eq!(clock.tick(60_020.0), 20.0);
    }
}
