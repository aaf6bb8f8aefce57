use glam::Vec3;
use serde::Serialize;

use super::core::Camera;
use super::framing::{frame_bounds, Bounds, Framing, FramingParams};
use crate::options::CameraOptions;

/// Drawing-buffer size derived from the canvas's CSS box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in CSS pixels (at least 1).
    pub width: u32,
    /// Height in CSS pixels (at least 1).
    pub height: u32,
    /// Device pixel ratio to render at, capped.
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Viewport for a CSS box of `width × height`, rounding and flooring
    /// each side at one pixel and capping the device pixel ratio.
    #[must_use]
    pub fn from_css(
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
        pixel_ratio_cap: f32,
    ) -> Self {
        let side = |v: f32| {
            if v.is_finite() {
                v.round().max(1.0) as u32
            } else {
                1
            }
        };
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0
        {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: side(width),
            height: side(height),
            pixel_ratio: ratio.min(pixel_ratio_cap),
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
        }
    }
}

/// Owns the scene camera: tracks the viewport, frames the loaded model
/// and keeps looking at it as it moves.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    params: FramingParams,
    reframe_on_resize: bool,
    subject: Option<(Bounds, Vec3)>,
    framing: Option<Framing>,
    viewport: Viewport,
}

impl CameraRig {
    /// Rig with the unframed initial camera described by `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            camera: Camera::new(
                options.fovy,
                1.0,
                options.znear,
                options.zfar,
            ),
            params: options.framing_params(),
            reframe_on_resize: options.reframe_on_resize,
            subject: None,
            framing: None,
            viewport: Viewport::default(),
        }
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The most recent framing, if a model has been framed.
    #[must_use]
    pub fn framing(&self) -> Option<&Framing> {
        self.framing.as_ref()
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new viewport and update the aspect ratio. A framed model
    /// is re-framed when `reframe_on_resize` is set.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        if self.reframe_on_resize {
            if let Some((bounds, forward)) = self.subject {
                let _ = self.frame(bounds, forward);
            }
        }
    }

    /// Frame `bounds` (the model's world-space box) and remember it for
    /// later re-framing.
    pub fn frame(&mut self, bounds: Bounds, forward: Vec3) -> Framing {
        let framing =
            frame_bounds(&self.camera, &bounds, forward, &self.params);
        framing.apply(&mut self.camera);
        log::debug!(
            "framed model: distance {:.3}, near {:.4}, far {:.1}, aspect {:.3}",
            framing.distance,
            framing.znear,
            framing.zfar,
            self.camera.aspect
        );
        self.subject = Some((bounds, forward));
        self.framing = Some(framing);
        framing
    }

    /// Point the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.camera.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rounds_and_floors() {
        let v = Viewport::from_css(799.6, 0.2, 3.0, 2.0);
        assert_eq!(v.width, 800);
        assert_eq!(v.height, 1);
        assert_eq!(v.pixel_ratio, 2.0);
        let v = Viewport::from_css(f32::NAN, 300.0, 0.0, 2.0);
        assert_eq!(v.width, 1);
        assert_eq!(v.pixel_ratio, 1.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut rig = CameraRig::new(&CameraOptions::default());
        rig.resize(Viewport::from_css(1200.0, 600.0, 1.0, 2.0));
        assert_eq!(rig.camera().aspect, 2.0);
        assert!(rig.framing().is_none());
    }

    #[test]
    fn resize_reframes_subject() {
        let mut rig = CameraRig::new(&CameraOptions::default());
        rig.resize(Viewport::from_css(1600.0, 900.0, 1.0, 2.0));
        let wide = rig.frame(Bounds::default(), Vec3::Z).distance;
        rig.resize(Viewport::from_css(400.0, 900.0, 1.0, 2.0));
        let narrow = rig.framing().map(|f| f.distance).unwrap();
        assert!(narrow > wide);
    }

    #[test]
    fn resize_without_reframe_keeps_distance() {
        let options = CameraOptions {
            reframe_on_resize: false,
            ..CameraOptions::default()
        };
        let mut rig = CameraRig::new(&options);
        let first = rig.frame(Bounds::default(), Vec3::Z);
        rig.resize(Viewport::from_css(300.0, 900.0, 1.0, 2.0));
        assert_eq!(rig.framing(), Some(&first));
    }
}
