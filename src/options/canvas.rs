use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default)]
/// Canvas element tilt, pixel ratio and layout-settle timing.
pub struct CanvasOptions {
    /// DOM id of the canvas element.
    #[schemars(skip)]
    pub element_id: String,
    /// Tag name of the page sections that drive the scroll track.
    #[schemars(skip)]
    pub section_selector: String,
    /// Degrees of tilt per (vw / s) of canvas slide velocity.
    #[schemars(title = "Tilt Gain", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub tilt_gain: f32,
    /// Tilt limit in degrees.
    #[schemars(title = "Max Tilt", range(min = 0.0, max = 15.0), extend("step" = 0.5))]
    pub tilt_max_deg: f32,
    /// Fraction of the tilt error left after one second.
    #[schemars(title = "Tilt Retention", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub tilt_retention: f32,
    /// Upper bound on the device pixel ratio used for rendering.
    #[schemars(title = "Pixel Ratio Cap", range(min = 1.0, max = 4.0), extend("step" = 0.25))]
    pub pixel_ratio_cap: f32,
    /// Delay after an orientation change before re-measuring, in ms.
    #[schemars(skip)]
    pub orientation_settle_ms: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            element_id: "model".into(),
            section_selector: "section".into(),
            tilt_gain: 0.08,
            tilt_max_deg: 4.0,
            tilt_retention: 0.12,
            pixel_ratio_cap: 2.0,
            orientation_settle_ms: 50,
        }
    }
}
