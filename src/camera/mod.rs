//! Camera placement for the staged model.
//!
//! Provides a perspective camera, bounding-sphere framing, frustum checks
//! and a rig that re-frames on resize.

/// Core camera struct and matrices.
pub mod core;
/// Fitting the camera to a model's bounds.
pub mod framing;
/// View frustum extraction and sphere containment.
pub mod frustum;
/// Viewport tracking and per-frame look-at.
pub mod rig;

pub use self::core::Camera;
pub use framing::{Bounds, Framing, FramingParams, FramingStyle, ShadowFrame};
pub use rig::{CameraRig, Viewport};
