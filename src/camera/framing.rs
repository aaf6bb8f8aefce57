//! Fitting the camera to a model's bounds.
//!
//! The model's bounding sphere is kept inside both the vertical and the
//! horizontal field of view, scaled by a padding factor, so the whole
//! model stays visible for any aspect ratio.

use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::core::Camera;

/// Smallest radius a bounding sphere is given, so degenerate (flat or
/// empty) models still produce a usable distance.
const MIN_RADIUS: f32 = 1e-6;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Box spanning `min`..`max` (corners are re-ordered if swapped).
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Smallest box holding every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });
        Some(Self { min, max })
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the sphere through the box corners.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        (self.size().length() * 0.5).max(MIN_RADIUS)
    }

    /// The eight corners.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// World-space box of this box after `transform` (corner-transformed,
    /// so rotations grow it conservatively).
    #[must_use]
    pub fn transformed(&self, transform: &Mat4) -> Self {
        let corners = self.corners().map(|c| transform.transform_point3(c));
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });
        Self { min, max }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Vec3::splat(-0.5),
            max: Vec3::splat(0.5),
        }
    }
}

/// Where the camera is placed relative to the framed model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FramingStyle {
    /// On the world +Z axis through the model center, with wide clip
    /// planes (`d / 100` .. `100 d`).
    Orbit,
    /// In front of the model along its own forward axis, lifted by an
    /// elevation ratio, with clip planes hugging the model.
    Front,
}

/// Inputs controlling a framing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingParams {
    /// Placement style.
    pub style: FramingStyle,
    /// Multiplier on the bounding radius (≥ 1 leaves a margin).
    pub padding: f32,
    /// Upward offset as a fraction of distance (`Front` only).
    pub elevation: f32,
}

impl Default for FramingParams {
    fn default() -> Self {
        Self {
            style: FramingStyle::Orbit,
            padding: 1.5,
            elevation: 0.2,
        }
    }
}

/// Result of framing: a camera placement plus clip planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Framing {
    /// Camera position.
    pub eye: Vec3,
    /// Look-at point (the model center).
    pub target: Vec3,
    /// Camera up vector.
    pub up: Vec3,
    /// Fit distance along the view axis.
    pub distance: f32,
    /// Bounding-sphere radius that was fitted.
    pub radius: f32,
    /// Near clip distance.
    pub znear: f32,
    /// Far clip distance.
    pub zfar: f32,
}

impl Framing {
    /// Write placement and clip planes into `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye;
        camera.target = self.target;
        camera.up = self.up;
        camera.znear = self.znear;
        camera.zfar = self.zfar;
    }
}

/// Distance at which a sphere of `radius · padding` touches the tighter
/// of the vertical and horizontal fields of view.
#[must_use]
pub fn fit_distance(radius: f32, padding: f32, fovy: f32, aspect: f32) -> f32 {
    let fovx = 2.0 * ((fovy * 0.5).tan() * aspect).atan();
    let padded = radius * padding;
    let dist_v = padded / (fovy * 0.5).sin();
    let dist_h = padded / (fovx * 0.5).sin();
    dist_v.max(dist_h).max(0.01)
}

/// Frame `bounds` with `camera`'s field of view and aspect ratio.
///
/// `forward` is the model's world-space forward axis, used by
/// [`FramingStyle::Front`].
#[must_use]
pub fn frame_bounds(
    camera: &Camera,
    bounds: &Bounds,
    forward: Vec3,
    params: &FramingParams,
) -> Framing {
    let center = bounds.center();
    let radius = bounds.bounding_radius();
    let distance = fit_distance(
        radius,
        params.padding,
        camera.fovy_radians(),
        camera.aspect.max(f32::EPSILON),
    );

    match params.style {
        FramingStyle::Orbit => Framing {
            eye: center + Vec3::Z * distance,
            target: center,
            up: Vec3::Y,
            distance,
            radius,
            znear: (distance / 100.0).max(0.001),
            zfar: distance * 100.0,
        },
        FramingStyle::Front => {
            let forward = forward.try_normalize().unwrap_or(Vec3::Z);
            let up = if forward.y.abs() > 0.999 {
                Vec3::Z
            } else {
                Vec3::Y
            };
            let eye = center - forward * distance
                + Vec3::Y * (distance * params.elevation);
            Framing {
                eye,
                target: center,
                up,
                distance,
                radius,
                znear: (distance - radius * 3.0).max(0.01),
                zfar: distance + radius * 6.0,
            }
        }
    }
}

/// Directional-light placement that keeps a framed model inside the
/// shadow camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowFrame {
    /// Light position.
    pub light_position: Vec3,
    /// Light target (the model center).
    pub target: Vec3,
    /// Shadow camera near plane.
    pub near: f32,
    /// Shadow camera far plane.
    pub far: f32,
    /// Half width/height of the orthographic shadow camera.
    pub half_extent: f32,
}

impl ShadowFrame {
    /// Light offset from its target.
    pub const LIGHT_OFFSET: Vec3 = Vec3::new(3.0, 5.0, 2.0);

    /// Shadow frame following `framing`'s target, sized by its radius.
    #[must_use]
    pub fn follow(framing: &Framing) -> Self {
        let scene_size = framing.radius * 2.0;
        Self {
            light_position: framing.target + Self::LIGHT_OFFSET,
            target: framing.target,
            near: 0.1,
            far: scene_size * 10.0,
            half_extent: scene_size * 2.0,
        }
    }
}
