//! Easing functions for progress shaping.
//!
//! Scroll progress fractions are passed through one of these curves
//! before they drive keyframe interpolation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for progress curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-out: `1 - (1 - t)³`.
    CubicOut,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: cubic ease-out, the curve every scroll phase uses.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicOut;

    /// Evaluate the easing function at progress t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = super::clamp01(t);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::CubicOut,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SqrtOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn test_cubic_out_values() {
        let f = EasingFunction::CubicOut;
        assert_eq!(f.evaluate(0.0), 0.0);
        assert_eq!(f.evaluate(1.0), 1.0);
        // 1 - 0.5³ = 0.875
        assert!((f.evaluate(0.5) - 0.875).abs() < 1e-6);
        // 1 - 0.75³ = 0.578125
        assert!((f.evaluate(0.25) - 0.578_125).abs() < 1e-6);
    }

    #[test]
    fn test_output_stays_in_unit_interval() {
        for f in ALL {
            for i in 0..=1000 {
                let v = f.evaluate(i as f32 / 1000.0);
                assert!(
                    (-1e-6..=1.0 + 1e-6).contains(&v),
                    "{f:?} left [0,1] with {v}"
                );
            }
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for f in ALL {
            let mut prev = f.evaluate(0.0);
            for i in 1..=1000 {
                let v = f.evaluate(i as f32 / 1000.0);
                assert!(v + 1e-6 >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let cubic = EasingFunction::CubicOut;
        assert_eq!(cubic.evaluate(-3.0), 0.0);
        assert_eq!(cubic.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_cubic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicOut);
    }
}
