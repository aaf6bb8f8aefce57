//! Per-frame input and the commands a tick hands back to the host.
//!
//! The session never touches a renderer or the DOM. Each tick returns a
//! [`FrameCommands`] describing what the host should write this frame.

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::camera::Camera;

// ── Input ────────────────────────────────────────────────────────────────

/// Everything one tick needs from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Host timestamp in milliseconds (drives the idle sway).
    pub time_ms: f64,
    /// Seconds since the previous frame, before clamping.
    pub dt: f32,
    /// Current vertical scroll offset in CSS pixels.
    pub scroll_y: f32,
}

// ── Output ───────────────────────────────────────────────────────────────

/// CSS transform applied to the canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CanvasTransform {
    /// Horizontal offset in viewport-width units.
    pub translate_x_vw: f32,
    /// Tilt in degrees.
    pub rotate_z_deg: f32,
}

impl CanvasTransform {
    /// The inline `transform` value for the canvas style.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translateX({}vw) rotateZ({}deg)",
            self.translate_x_vw, self.rotate_z_deg
        )
    }
}

/// Model placement for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ModelTransform {
    /// World-space offset.
    pub position: Vec3,
    /// Rotation about X in radians (idle sway).
    pub rotation_x: f32,
    /// Rotation about Y in radians (scroll-driven turn).
    pub rotation_y: f32,
}

impl ModelTransform {
    /// World matrix: translate, then rotate about X, then about Y.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation_x)
            * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// What the host should do this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCommands {
    /// Advance the model's animation mixer by this many seconds.
    pub mixer_dt: Option<f32>,
    /// Canvas element transform (always present).
    pub canvas: CanvasTransform,
    /// Model transform, once the model is loaded.
    pub model: Option<ModelTransform>,
    /// Camera to render with.
    pub camera: Camera,
    /// Whether to submit a frame.
    pub render: bool,
}
