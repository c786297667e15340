//! Frame clock.
//!
//! Measures wall time between frames from a millisecond [`TimeSource`]. The
//! delta is passed through unmodified: no smoothing, no clamping and no spike
//! protection, so a long stall produces one large delta.
use bevy_ecs::prelude::Resource;
use raylib::RaylibHandle;

/// Monotonic millisecond clock.
pub trait TimeSource {
    fn now_millis(&self) -> u64;
}

impl TimeSource for RaylibHandle {
    fn now_millis(&self) -> u64 {
        (self.get_time() * 1000.0) as u64
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct Clock {
    last_ms: u64,
    delta: f32,
}

impl Clock {
    /// Start the clock with `now_ms` as baseline, so the first tick measures
    /// from here and not from zero.
    pub fn new(now_ms: u64) -> Self {
        Clock {
            last_ms: now_ms,
            delta: 0.0,
        }
    }

    /// Seconds elapsed since the previous tick (or since [`Clock::new`]).
    ///
    /// A timestamp older than the baseline yields `0.0`.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.last_ms);
        self.delta = elapsed as f32 / 1000.0;
        self.last_ms = now_ms;
        self.delta
    }

    /// Delta computed by the last tick.
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_measures_from_init() {
        let mut clock = Clock::new(5_000);
        assert_eq!(clock.delta(), 0.0);
        let dt = clock.tick(5_250);
        assert!((dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_tick_advances_baseline() {
        let mut clock = Clock::new(0);
        clock.tick(16);
        let dt = clock.tick(32);
        assert!((dt - 0.016).abs() < 1e-6);
        assert!((clock.delta() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_pause_passes_through() {
        let mut clock = Clock::new(1_000);
        let dt = clock.tick(61_000);
        assert!((dt - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_delta_never_negative() {
        let mut clock = Clock::new(1_000);
        assert_eq!(clock.tick(500), 0.0);
        // Baseline moved back to 500.
        assert!((clock.tick(600) - 0.1).abs() < 1e-6);
    }
}
