//! Frame delta measurement and clamping.

use web_time::Instant;

/// Default cap on a single frame's delta, in seconds. Longer gaps (tab
/// backgrounding, hitches) are treated as one 50 ms step.
pub const DEFAULT_MAX_DT: f32 = 0.05;

/// Frame clock producing clamped per-frame deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Upper bound for a single delta, in seconds.
    max_dt: f32,
    /// Last tick timestamp (`None` before the first tick)
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// Create a clock that caps deltas at `max_dt` seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last_tick: None,
        }
    }

    /// Clamp an externally measured delta to `[0, max_dt]`.
    ///
    /// Non-finite and negative deltas become zero so a bad timestamp
    /// freezes the frame instead of destabilizing the springs.
    #[must_use]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        dt.min(self.max_dt)
    }

    /// Measure the wall-clock time since the previous tick and return it
    /// clamped. The first tick returns zero.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.clamp_dt(raw)
    }

    /// The configured delta cap in seconds.
    #[must_use]
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}
