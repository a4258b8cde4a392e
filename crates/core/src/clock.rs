//! Drop clock - decides when gravity pulls the active piece down
//!
//! Time is supplied by the caller in milliseconds so the clock stays
//! deterministic under test.

use crate::types::level_drop_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    start_ms: u64,
    interval_ms: u32,
}

impl DropClock {
    pub fn new(now_ms: u64, interval_ms: u32) -> Self {
        Self {
            start_ms: now_ms,
            interval_ms,
        }
    }

    /// Clock running at the speed of `level`
    pub fn for_level(now_ms: u64, level: u32) -> Self {
        Self::new(now_ms, level_drop_ms(level))
    }

    /// True once more than one interval has elapsed; the clock then restarts
    /// from `now_ms`.
    pub fn due(&mut self, now_ms: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed > u64::from(self.interval_ms) {
            self.start_ms = now_ms;
            return true;
        }
        false
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.start_ms = now_ms;
    }

    /// Change the speed without restarting the current interval
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_only_after_interval_elapsed() {
        let mut clock = DropClock::new(1_000, 720);
        assert!(!clock.due(1_500));
        assert!(!clock.due(1_720));
        assert!(clock.due(1_721));
        assert_eq!(clock.start_ms(), 1_721);
        assert!(!clock.due(1_800));
    }

    #[test]
    fn restart_pushes_the_deadline() {
        let mut clock = DropClock::new(0, 100);
        clock.restart(500);
        assert!(!clock.due(550));
        assert!(clock.due(601));
    }

    #[test]
    fn time_going_backwards_is_not_due() {
        let mut clock = DropClock::new(1_000, 100);
        assert!(!clock.due(10));
    }

    #[test]
    fn level_speed() {
        assert_eq!(DropClock::for_level(0, 1).interval_ms(), 720);
        assert_eq!(DropClock::for_level(0, 20).interval_ms(), 30);
        let mut clock = DropClock::for_level(0, 1);
        clock.set_interval(80);
        assert!(clock.due(81));
    }
}
