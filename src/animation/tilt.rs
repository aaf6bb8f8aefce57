//! Canvas tilt derived from the horizontal slide velocity.

/// Low-pass filter turning the canvas spring's velocity into a small
/// Z-rotation of the canvas, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFilter {
    /// Degrees of tilt per (vw / s) of canvas velocity.
    pub gain: f32,
    /// Absolute tilt limit in degrees.
    pub max_deg: f32,
    /// Fraction of the remaining error kept after one second. Smaller
    /// values settle faster.
    pub retention: f32,
    tilt_deg: f32,
}

impl TiltFilter {
    /// Filter at zero tilt.
    #[must_use]
    pub fn new(gain: f32, max_deg: f32, retention: f32) -> Self {
        Self {
            gain,
            max_deg,
            retention,
            tilt_deg: 0.0,
        }
    }

    /// Feed the current velocity and return the filtered tilt.
    ///
    /// The blend factor `1 - retention^dt` makes the response independent
    /// of frame rate. A negative limit acts as its magnitude and a
    /// non-finite one holds the target at zero.
    pub fn update(&mut self, velocity: f32, dt: f32) -> f32 {
        let limit = if self.max_deg.is_finite() {
            self.max_deg.abs()
        } else {
            0.0
        };
        let raw = velocity * self.gain;
        let desired = if raw.is_finite() {
            raw.max(-limit).min(limit)
        } else {
            0.0
        };
        let blend = 1.0 - self.retention.powf(dt);
        self.tilt_deg += (desired - self.tilt_deg) * blend;
        self.tilt_deg
    }

    /// Current tilt in degrees.
    #[must_use]
    pub fn degrees(&self) -> f32 {
        self.tilt_deg
    }
}

impl Default for TiltFilter {
    fn default() -> Self {
        Self::new(0.08, 4.0, 0.12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_holds_tilt() {
        let mut f = TiltFilter::default();
        assert_eq!(f.update(100.0, 0.0), 0.0);
    }

    #[test]
    fn tilt_is_clamped() {
        let mut f = TiltFilter::default();
        for _ in 0..1000 {
            let _ = f.update(-1000.0, 0.05);
        }
        assert!((f.degrees() + 4.0).abs() < 1e-4);
    }

    #[test]
    fn bad_limits_do_not_panic() {
        let mut negative = TiltFilter::new(0.08, -1.0, 0.12);
        for _ in 0..200 {
            let _ = negative.update(1000.0, 0.05);
        }
        assert!((negative.degrees() - 1.0).abs() < 1e-4);

        let mut nan = TiltFilter::new(f32::NAN, f32::NAN, 0.12);
        let tilt = nan.update(50.0, 0.05);
        assert!(tilt.is_finite());
        assert_eq!(tilt, 0.0);
    }

    #[test]
    fn one_second_keeps_retention_fraction() {
        let mut f = TiltFilter::default();
        // desired = 25 * 0.08 = 2°, one 1 s step closes 88% of the gap.
        let tilt = f.update(25.0, 1.0);
        assert!((tilt - 2.0 * 0.88).abs() < 1e-5);
    }

    #[test]
    fn frame_rate_independent() {
        let mut coarse = TiltFilter::default();
        let mut fine = TiltFilter::default();
        for _ in 0..10 {
            let _ = coarse.update(30.0, 0.05);
        }
        for _ in 0..50 {
            let _ = fine.update(30.0, 0.01);
        }
        assert!((coarse.degrees() - fine.degrees()).abs() < 1e-4);
    }
}
