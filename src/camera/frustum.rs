//! View frustum planes, used to check that a framed model fits.

use glam::{Mat4, Vec3, Vec4};

use super::core::Camera;

/// A plane `normal · p + distance = 0` with a unit normal pointing into
/// the frustum.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin.
    pub distance: f32,
}

impl Plane {
    /// Normalize raw plane coefficients `(a, b, c, d)`.
    fn from_row(row: Vec4) -> Self {
        let len = row.truncate().length();
        if len > 0.0 {
            Self {
                normal: row.truncate() / len,
                distance: row.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = inside).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six inward-facing planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Clipping planes in the order above.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract planes from a view-projection matrix (Gribb/Hartmann,
    /// right-handed, [0,1] depth).
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let [r0, r1, r2, r3] = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];
        Self {
            planes: [
                Plane::from_row(r3 + r0),
                Plane::from_row(r3 - r0),
                Plane::from_row(r3 + r1),
                Plane::from_row(r3 - r1),
                Plane::from_row(r2),
                Plane::from_row(r3 - r2),
            ],
        }
    }

    /// Frustum of `camera`'s current view and projection.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_view_projection(camera.build_matrix())
    }

    /// Smallest slack between the sphere and any plane. Negative means
    /// the sphere pokes out of the frustum.
    #[must_use]
    pub fn sphere_clearance(&self, center: Vec3, radius: f32) -> f32 {
        self.planes
            .iter()
            .map(|p| p.distance_to_point(center) - radius)
            .fold(f32::INFINITY, f32::min)
    }

    /// Whether the sphere lies entirely inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.sphere_clearance(center, radius) >= 0.0
    }
}
