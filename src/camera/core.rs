use glam::{Mat4, Vec3};
use serde::Serialize;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, 5)` looking at the origin, with the given
    /// projection.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fovy_radians(&self) -> f32 {
        self.fovy.to_radians()
    }

    /// Horizontal field of view in radians, derived from the vertical
    /// FOV and the aspect ratio.
    #[must_use]
    pub fn fovx_radians(&self) -> f32 {
        2.0 * ((self.fovy_radians() * 0.5).tan() * self.aspect).atan()
    }

    /// View matrix (world → camera).
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Unit vector from eye toward target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(45.0, 1.0, 0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_aspect_has_equal_fovs() {
        let cam = Camera::new(60.0, 1.0, 0.1, 10.0);
        assert!((cam.fovx_radians() - cam.fovy_radians()).abs() < 1e-6);
    }

    #[test]
    fn wide_aspect_widens_horizontal_fov() {
        let cam = Camera::new(45.0, 2.0, 0.1, 10.0);
        assert!(cam.fovx_radians() > cam.fovy_radians());
        let tall = Camera::new(45.0, 0.5, 0.1, 10.0);
        assert!(tall.fovx_radians() < tall.fovy_radians());
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = Camera::default();
        assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-6);
    }
}
