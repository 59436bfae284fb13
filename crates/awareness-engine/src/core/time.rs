/// Default upper bound on a single frame delta, in seconds.
pub const DEFAULT_MAX_DT: f32 = 0.25;

/// Monotonic frame clock.
/// Converts host timestamps into per-frame deltas that are never negative.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Timestamp of the previous tick, in seconds.
    last: Option<f64>,
    /// Total seconds accumulated from clamped deltas.
    elapsed: f64,
    /// Largest delta a single tick may report.
    max_dt: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::with_max_dt(DEFAULT_MAX_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last: None,
            elapsed: 0.0,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Advance to `now` (seconds) and return the frame delta.
    ///
    /// The first call returns 0. A timestamp that goes backwards also
    /// yields 0, and the clock re-anchors on it.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now - last) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        self.elapsed += dt as f64;
        dt
    }

    /// Convenience for hosts that report milliseconds (`performance.now()`).
    pub fn tick_millis(&mut self, now_ms: f64) -> f32 {
        self.tick(now_ms / 1000.0)
    }

    /// Total clamped time seen so far, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
