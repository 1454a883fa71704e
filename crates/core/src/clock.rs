//! Host-side gravity clock.
//!
//! The engines hold no timers. A driver owns a `GravityClock`, feeds it the
//! time elapsed since its last tick, and performs the forced move (soft drop
//! or snake step) whenever the clock fires.

/// Accumulates elapsed time and fires once per interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityClock {
    accumulated_ms: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and report whether a forced move is due.
    ///
    /// Fires once the accumulated time strictly exceeds `interval_ms`, then
    /// restarts from zero. Leftover time is discarded, so a long stall yields
    /// a single move rather than a burst.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms > interval_ms {
            self.accumulated_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_interval_is_exceeded() {
        let mut clock = GravityClock::new();
        assert!(!clock.advance(500, 1000));
        assert!(!clock.advance(500, 1000)); // exactly 1000: not yet
        assert!(clock.advance(16, 1000));
        assert_eq!(clock.accumulated_ms(), 0);
    }

    #[test]
    fn long_stall_fires_once() {
        let mut clock = GravityClock::new();
        assert!(clock.advance(5000, 100));
        assert!(!clock.advance(16, 100));
    }

    #[test]
    fn reset_discards_progress() {
        let mut clock = GravityClock::new();
        clock.advance(90, 100);
        clock.reset();
        assert!(!clock.advance(16, 100));
    }

    #[test]
    fn sixteen_ms_ticks_at_level_one() {
        let mut clock = GravityClock::new();
        let fired_at = (1..=100).find(|_| clock.advance(16, 1000));
        // 63 * 16 = 1008 > 1000
        assert_eq!(fired_at, Some(63));
    }
}
