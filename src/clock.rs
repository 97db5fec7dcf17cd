//! Fixed-rate tick scheduling
//!
//! The simulation never reads time. The driver feeds elapsed wall time
//! in here and runs as many ticks as the current speed allows.

use crate::consts::MAX_SUBSTEPS;

/// Accumulates elapsed time and hands out due ticks
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds per tick at `speed` ticks per second
    pub fn interval(speed: u32) -> f32 {
        1.0 / speed.max(1) as f32
    }

    /// Add `dt` seconds and return how many ticks are due.
    ///
    /// Capped at `MAX_SUBSTEPS` so a long stall cannot trigger a burst;
    /// the excess time is dropped.
    pub fn advance(&mut self, dt: f32, speed: u32) -> u32 {
        let interval = Self::interval(speed);
        self.accumulator += dt.clamp(0.0, 0.25);

        let mut due = 0;
        while self.accumulator >= interval && due < MAX_SUBSTEPS {
            self.accumulator -= interval;
            due += 1;
        }
        if due == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(interval);
        }
        due
    }

    /// Time left until the next tick at `speed`
    pub fn until_next(&self, speed: u32) -> f32 {
        (Self::interval(speed) - self.accumulator).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_at_speed() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(0.04, 20), 0);
        assert_eq!(clock.advance(0.02, 20), 1);
        assert_eq!(clock.advance(0.1, 20), 2);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(10.0, 1000), MAX_SUBSTEPS);
        assert!(clock.until_next(1000) >= 0.0);
    }

    #[test]
    fn test_until_next() {
        let mut clock = TickClock::new();
        clock.advance(0.05, 10);
        assert!((clock.until_next(10) - 0.05).abs() < 1e-4);
    }
}
