use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{FramingParams, FramingStyle};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and framing parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane before a model is framed.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane before a model is framed.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera placement relative to the model.
    #[schemars(title = "Framing Style")]
    pub style: FramingStyle,
    /// Bounding-sphere padding factor.
    #[schemars(title = "Padding", range(min = 1.0, max = 3.0), extend("step" = 0.05))]
    pub padding: f32,
    /// Camera lift as a fraction of distance (front framing only).
    #[schemars(title = "Elevation", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub elevation: f32,
    /// Re-frame the model whenever the canvas is resized.
    #[schemars(title = "Reframe On Resize")]
    pub reframe_on_resize: bool,
}

impl CameraOptions {
    /// Framing inputs derived from these options.
    #[must_use]
    pub fn framing_params(&self) -> FramingParams {
        FramingParams {
            style: self.style,
            padding: self.padding,
            elevation: self.elevation,
        }
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            style: FramingStyle::Orbit,
            padding: 1.5,
            elevation: 0.2,
            reframe_on_resize: true,
        }
    }
}
