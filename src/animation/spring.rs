//! Critically damped spring smoothing for scalar channels.
//!
//! Each animated scalar (canvas offset, model rotation, model X/Y) owns a
//! [`SpringState`] that is pulled toward a moving target once per frame.
//! Damping is derived from stiffness as `c = 2·√k` (unit mass), which is
//! the critical value: a step target is approached without overshoot.

use serde::{Deserialize, Serialize};

/// Stiffness used when a channel does not specify one.
pub const DEFAULT_STIFFNESS: f32 = 10.0;

/// Position and velocity of one smoothed scalar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpringState {
    /// Current value.
    pub position: f32,
    /// Current rate of change, in units per second.
    pub velocity: f32,
}

impl SpringState {
    /// A spring at rest at `position`.
    #[must_use]
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advance one semi-implicit Euler step toward `target`.
    ///
    /// `dt` must be small and positive (callers clamp it, see
    /// [`FrameClock`](crate::util::frame_timing::FrameClock)); `stiffness`
    /// must be positive.
    #[inline]
    pub fn step(&mut self, target: f32, dt: f32, stiffness: f32) {
        let damping = 2.0 * stiffness.sqrt();
        let accel =
            stiffness * (target - self.position) - damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    /// Whether both position and velocity are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// A spring state paired with its stiffness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringChannel {
    /// Integrated state.
    pub state: SpringState,
    /// Stiffness `k` (> 0).
    pub stiffness: f32,
}

impl SpringChannel {
    /// Channel at rest at `initial` with the given stiffness.
    #[must_use]
    pub fn new(initial: f32, stiffness: f32) -> Self {
        Self {
            state: SpringState::at_rest(initial),
            stiffness,
        }
    }

    /// Step toward `target`. A step that produces non-finite values
    /// snaps the channel to the target at rest.
    pub fn update(&mut self, target: f32, dt: f32) {
        self.state.step(target, dt, self.stiffness);
        if !self.state.is_finite() {
            log::warn!(
                "spring diverged (target {target}, dt {dt}, k {}); snapping",
                self.stiffness
            );
            self.state = SpringState::at_rest(if target.is_finite() {
                target
            } else {
                0.0
            });
        }
    }

    /// Current smoothed value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.state.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }
}
