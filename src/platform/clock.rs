//! Fixed-rate stepping driven by variable display frames

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta accepted (tab switches, debugger pauses)
const MAX_FRAME_DT: f64 = 0.25;

/// Accumulates wall-clock time and hands out whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    max_substeps: u32,
    accumulator: f64,
    last_time: Option<f64>,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed a timestamp in milliseconds (e.g. `requestAnimationFrame`) and
    /// get the number of ticks to run this frame.
    ///
    /// The first call runs exactly one tick.
    pub fn ticks_at(&mut self, time_ms: f64) -> u32 {
        let Some(last) = self.last_time.replace(time_ms) else {
            // One whole step, whatever its length
            self.accumulator += self.step;
            return self.drain();
        };
        self.advance(((time_ms - last) / 1000.0).max(0.0))
    }

    /// Add `dt` seconds and drain whole ticks, capped per frame
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt.min(MAX_FRAME_DT);
        self.drain()
    }

    fn drain(&mut self) -> u32 {
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop backlog we refused to simulate
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Forget accumulated time (after the loop was suspended)
    pub fn resync(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FixedStep::new(0.5, 8);
        assert_eq!(clock.ticks_at(1000.0), 1);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(0.5, 8);
        assert_eq!(clock.advance(0.25), 0);
        assert_eq!(clock.advance(0.25), 1);
        assert_eq!(clock.advance(0.125), 0);
    }

    #[test]
    fn test_caps_ticks_per_frame() {
        let mut clock = FixedStep::new(0.01, 4);
        assert_eq!(clock.advance(0.2), 4);
        // Backlog was dropped, not carried forward
        assert_eq!(clock.advance(0.0), 1);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_timestamps_drive_ticks() {
        let mut clock = FixedStep::new(0.1, 8);
        clock.ticks_at(0.0);
        assert_eq!(clock.ticks_at(200.0), 2);
        // Clock going backwards is ignored
        assert_eq!(clock.ticks_at(100.0), 0);
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let mut clock = FixedStep::new(0.05, 8);
        clock.ticks_at(0.0);
        // 10 s gap counts as 0.25 s
        assert_eq!(clock.ticks_at(10_000.0), 5);
    }

    #[test]
    fn test_resync_forgets_time() {
        let mut clock = FixedStep::new(0.5, 8);
        clock.ticks_at(0.0);
        clock.advance(0.25);
        clock.resync();
        assert_eq!(clock.ticks_at(90_000.0), 1);
    }

    #[test]
    fn test_step_longer_than_frame_clamp() {
        let mut clock = FixedStep::new(0.4, 8);
        assert_eq!(clock.ticks_at(0.0), 1);
        // Each frame delta is clamped to 0.25 s, two make one tick
        assert_eq!(clock.ticks_at(1000.0), 0);
        assert_eq!(clock.ticks_at(2000.0), 1);
        clock.resync();
        assert_eq!(clock.ticks_at(5000.0), 1);
    }
}
