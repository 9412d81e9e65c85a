//! Frame timing helpers: a tick clock that reports per-tick elapsed
//! seconds and a smoothed FPS estimate for hosts without their own
//! scheduler clock.

use web_time::Instant;

/// Tick clock for hosts without their own scheduler: reports elapsed
/// seconds between consecutive ticks and a smoothed FPS estimate.
pub struct FrameClock {
    /// Last tick timestamp
    last_tick: Instant,
    /// Longest delta a single tick may report, in seconds
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Clock whose first tick measures from now.
    ///
    /// `max_delta` caps the reported elapsed time so a long stall
    /// (debug break, window drag) does not become one huge integration
    /// step on the next tick.
    #[must_use]
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Elapsed seconds since the previous tick, capped at the
    /// configured maximum. Call once per scheduling tick and feed the
    /// result to the consumers of elapsed time.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_delta)
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    /// Quarter-second cap, suitable for interactive scenes.
    fn default() -> Self {
        Self::new(0.25)
    }
}
