//! Idle "breathing" sway applied to the model's X rotation.

use crate::util::clamp01;

/// Sinusoidal sway that fades out as the page is scrolled through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breathing {
    /// Peak rotation in radians.
    pub amplitude: f32,
    /// Angular frequency in radians per millisecond.
    pub frequency: f32,
}

impl Breathing {
    /// Sway angle at `time_ms`, scaled by `1 - fade` (fade in [0, 1]).
    #[must_use]
    pub fn angle(&self, time_ms: f64, fade: f32) -> f32 {
        let phase = (time_ms * f64::from(self.frequency)).sin() as f32;
        phase * self.amplitude * (1.0 - clamp01(fade))
    }
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            amplitude: 0.03,
            frequency: 0.0015,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_faded_is_still() {
        let b = Breathing::default();
        for t in [0.0, 500.0, 1047.0, 90_000.0] {
            assert_eq!(b.angle(t, 1.0), 0.0);
        }
    }

    #[test]
    fn peak_matches_amplitude() {
        let b = Breathing::default();
        // sin reaches 1 at t = π / 2 / 0.0015 ms
        let t = std::f64::consts::FRAC_PI_2 / 0.0015;
        assert!((b.angle(t, 0.0) - 0.03).abs() < 1e-6);
        assert!((b.angle(t, 0.5) - 0.015).abs() < 1e-6);
    }
}
